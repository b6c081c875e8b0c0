use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the replay host.
#[derive(Parser, Debug)]
#[command(
    name = "a2ui-stream",
    version,
    about = "Replay a recorded agent stream and dump the resulting surfaces"
)]
pub struct Args {
    /// Recorded stream to replay; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Bytes per simulated token (overrides config)
    #[arg(long)]
    pub chunk_bytes: Option<usize>,

    /// Pretty-print the state dump
    #[arg(long)]
    pub pretty: bool,

    /// Path to an alternate config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
