//! Wire types for the structured half of the stream.
//!
//! After the mode switch the stream is JSON Lines: one message per line,
//! each a single-key object whose key names the kind. Parsing goes through
//! a discriminated union, so a zero-key or multi-key object, an unknown
//! kind, or a payload without `surfaceId` is rejected at the boundary
//! instead of silently taking an arbitrary key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One structured message decoded from a stream line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ServerMessage {
    #[serde(rename = "surfaceUpdate")]
    SurfaceUpdate(SurfaceUpdate),
    #[serde(rename = "dataModelUpdate")]
    DataModelUpdate(DataModelUpdate),
    #[serde(rename = "beginRendering")]
    BeginRendering(BeginRendering),
    #[serde(rename = "deleteSurface")]
    DeleteSurface(DeleteSurface),
}

impl ServerMessage {
    /// Parse one stream line. Failures are protocol-level, never fatal:
    /// the caller logs and drops the line.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// The surface this message addresses.
    pub fn surface_id(&self) -> &str {
        match self {
            Self::SurfaceUpdate(m) => &m.surface_id,
            Self::DataModelUpdate(m) => &m.surface_id,
            Self::BeginRendering(m) => &m.surface_id,
            Self::DeleteSurface(m) => &m.surface_id,
        }
    }

    /// The wire name of this message's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SurfaceUpdate(_) => "surfaceUpdate",
            Self::DataModelUpdate(_) => "dataModelUpdate",
            Self::BeginRendering(_) => "beginRendering",
            Self::DeleteSurface(_) => "deleteSurface",
        }
    }
}

/// Replaces component definitions on a surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceUpdate {
    pub surface_id: String,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// One component definition keyed by id. The definition itself is opaque
/// to this layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentEntry {
    pub id: String,
    pub component: Value,
}

/// Replaces top-level keys of a surface's data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataModelUpdate {
    pub surface_id: String,
    #[serde(default)]
    pub contents: Vec<DataEntry>,
}

/// One data-model entry: a top-level key plus its tagged value encoding,
/// captured raw for the value codec to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEntry {
    pub key: String,
    #[serde(flatten)]
    pub value: Map<String, Value>,
}

/// Points a surface at its top-level component and marks it live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeginRendering {
    pub surface_id: String,
    pub root: String,
}

/// Removes a surface from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSurface {
    pub surface_id: String,
}
