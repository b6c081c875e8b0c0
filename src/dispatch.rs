//! Applies decoded structured messages to the surface registry.

use tracing::debug;

use crate::protocol::ServerMessage;
use crate::surface::SurfaceRegistry;
use crate::value;

/// Apply one structured message.
///
/// Every kind except `deleteSurface` creates the addressed surface on first
/// reference. All writes for one message land before this returns, so a
/// reader between two `consume` calls never sees a half-applied message.
pub fn apply(message: ServerMessage, surfaces: &mut SurfaceRegistry) {
    match message {
        ServerMessage::SurfaceUpdate(update) => {
            let surface = surfaces.get_or_create(&update.surface_id);
            for entry in update.components {
                // Last write wins; no partial merge of nested fields.
                surface.components.insert(entry.id, entry.component);
            }
        }
        ServerMessage::DataModelUpdate(update) => {
            let surface = surfaces.get_or_create(&update.surface_id);
            for entry in update.contents {
                match value::decode_entry(&entry.value) {
                    Some(decoded) => surface.set_data(entry.key, decoded),
                    None => debug!(
                        "data entry {:?} carried no recognized value tag; skipped",
                        entry.key
                    ),
                }
            }
        }
        ServerMessage::BeginRendering(begin) => {
            let surface = surfaces.get_or_create(&begin.surface_id);
            surface.root = Some(begin.root);
            // One-way within a session: a later beginRendering re-points
            // root without resetting liveness.
            surface.is_live = true;
        }
        ServerMessage::DeleteSurface(delete) => {
            // Deleting an unknown surface is a silent no-op.
            surfaces.remove(&delete.surface_id);
        }
    }
}
