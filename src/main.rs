use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use a2ui_stream::args::Args;
use a2ui_stream::config::Config;
use a2ui_stream::session::StreamSession;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.clone())?;

    let filter = config
        .log_filter
        .clone()
        .map(EnvFilter::new)
        .unwrap_or_else(EnvFilter::from_default_env);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let raw = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stream {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stream from stdin")?;
            buffer
        }
    };

    // Replay in small chunks so the run exercises the same reassembly paths
    // a live token stream does.
    let chunk_bytes = args.chunk_bytes.unwrap_or(config.chunk_bytes).max(1);
    let mut session = StreamSession::new();
    for chunk in chunks(&raw, chunk_bytes) {
        session.consume(chunk);
    }

    let dump = json!({
        "textHistory": session.text_history(),
        "textBuffer": session.text_buffer(),
        "surfaces": session.surfaces(),
    });
    let rendered = if args.pretty || config.pretty {
        serde_json::to_string_pretty(&dump)?
    } else {
        serde_json::to_string(&dump)?
    };
    println!("{rendered}");

    Ok(())
}

/// Split into ~`size`-byte pieces without cutting a UTF-8 sequence.
fn chunks(raw: &str, size: usize) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    while start < raw.len() {
        let mut end = (start + size).min(raw.len());
        while !raw.is_char_boundary(end) {
            end += 1;
        }
        out.push(&raw[start..end]);
        start = end;
    }
    out
}
