//! Streaming A2UI protocol engine.
//!
//! Consumes a mixed agent stream — free text, then JSON-Lines structured
//! messages after the `---a2ui_JSON---` switch — and maintains the surface
//! registry, data models, and pointer-addressed bindings that a rendering
//! layer reads from.

pub mod action;
pub mod args;
pub mod config;
pub mod dispatch;
pub mod lines;
pub mod pointer;
pub mod protocol;
pub mod session;
pub mod surface;
pub mod value;

// Re-export the collaborator-facing types at the crate root for convenience
pub use action::{build_action, ActionContextEntry, UserAction};
pub use lines::LineReassembler;
pub use protocol::{
    BeginRendering, ComponentEntry, DataEntry, DataModelUpdate, DeleteSurface, ServerMessage,
    SurfaceUpdate,
};
pub use session::{StreamMode, StreamSession, MODE_DELIMITER};
pub use surface::{Surface, SurfaceRegistry};
pub use value::{resolve_bound, BoundValue, ProtocolValue};
