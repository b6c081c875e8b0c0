//! Stream ingestion: the text→structured mode switch and the session that
//! owns the surface registry.
//!
//! A session is single-threaded and push-driven. The host feeds tokens with
//! [`StreamSession::consume`] and reads state back between calls; messages
//! are applied in the order their terminating newline arrived, regardless
//! of how the stream was chunked.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dispatch;
use crate::lines::LineReassembler;
use crate::protocol::ServerMessage;
use crate::surface::{Surface, SurfaceRegistry};

/// Fixed preamble terminator: everything before it is free text, everything
/// after it is JSON Lines.
pub const MODE_DELIMITER: &str = "---a2ui_JSON---";

/// Ingestion mode. `Text` is initial; `Structured` is terminal for the
/// session — the protocol defines no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StreamMode {
    #[default]
    Text,
    Structured,
}

/// One ingestion session: mode, buffers, text history, and the registry.
#[derive(Debug, Default)]
pub struct StreamSession {
    mode: StreamMode,
    text_buffer: String,
    lines: LineReassembler,
    text_history: Vec<String>,
    surfaces: SurfaceRegistry,
}

impl StreamSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw token from the stream.
    pub fn consume(&mut self, token: &str) {
        match self.mode {
            StreamMode::Text => {
                self.text_buffer.push_str(token);

                // The delimiter may arrive split across tokens; matching
                // runs against the whole accumulated buffer each call.
                if let Some(at) = self.text_buffer.find(MODE_DELIMITER) {
                    let after = self.text_buffer.split_off(at + MODE_DELIMITER.len());
                    self.text_buffer.truncate(at);
                    let before = std::mem::take(&mut self.text_buffer);
                    if !before.is_empty() {
                        self.text_history.push(before);
                    }
                    self.mode = StreamMode::Structured;
                    if !after.is_empty() {
                        self.consume_structured(&after);
                    }
                }
            }
            StreamMode::Structured => self.consume_structured(token),
        }
    }

    fn consume_structured(&mut self, token: &str) {
        for line in self.lines.feed(token) {
            if line.trim().is_empty() {
                continue;
            }
            match ServerMessage::parse(&line) {
                Ok(message) => dispatch::apply(message, &mut self.surfaces),
                Err(err) => warn!("skipping malformed stream line {line:?}: {err}"),
            }
        }
    }

    /// Two-way binding entry point for interactive controls.
    ///
    /// Edits address existing surfaces only; unlike protocol messages they
    /// do not create a surface on first reference.
    pub fn write_data_path(&mut self, surface_id: &str, path: &str, value: Value) {
        match self.surfaces.get_mut(surface_id) {
            Some(surface) => surface.write_data(path, value),
            None => debug!("dropping edit for unknown surface {surface_id:?}"),
        }
    }

    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    /// Free text accumulated since the last completed block.
    pub fn text_buffer(&self) -> &str {
        &self.text_buffer
    }

    /// Completed free-text blocks, oldest first.
    pub fn text_history(&self) -> &[String] {
        &self.text_history
    }

    pub fn surfaces(&self) -> &SurfaceRegistry {
        &self.surfaces
    }

    pub fn surface(&self, surface_id: &str) -> Option<&Surface> {
        self.surfaces.get(surface_id)
    }
}
