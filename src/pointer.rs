//! RFC-6901-style pointer resolution over nested JSON data.
//!
//! Paths address locations inside a surface's data model. The empty string
//! is the root itself; every other path starts with `/`, separates segments
//! with `/`, and escapes `/` as `~1` and `~` as `~0`. Malformed paths are
//! never fatal: reads resolve to nothing and writes are dropped.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

/// Pointer grammar violations. Callers degrade these to "no value".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must be empty or start with '/', got {0:?}")]
    MissingLeadingSlash(String),
}

/// Escape one path segment: `~` becomes `~0`, then `/` becomes `~1`.
pub fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Unescape one path segment: `~1` becomes `/`, then `~0` becomes `~`.
///
/// Expansion order matters: `~01` must decode to `~1`, not `/`.
pub fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn split(path: &str) -> Result<Vec<String>, PointerError> {
    if path.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = path.strip_prefix('/') else {
        return Err(PointerError::MissingLeadingSlash(path.to_string()));
    };
    Ok(rest.split('/').map(unescape).collect())
}

/// Read the value at `path` inside `root`.
///
/// Returns `None` for malformed paths (logged, non-fatal) and whenever the
/// walk falls off the data: a null, absent, or non-container intermediate
/// short-circuits instead of raising. Objects descend by key, arrays by
/// numeric index.
pub fn read<'a>(path: &str, root: &'a Value) -> Option<&'a Value> {
    let tokens = match split(path) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("ignoring data read: {err}");
            return None;
        }
    };

    let mut current = root;
    for token in &tokens {
        current = match current {
            Value::Object(map) => map.get(token)?,
            Value::Array(items) => items.get(token.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write `value` at `path` inside `root`, creating empty objects along the
/// way for absent segments.
///
/// A malformed path, or a traversal that would pass through an existing
/// non-object value, drops the write (logged, non-fatal). The final segment
/// is set unconditionally, overwriting any prior value. An empty path
/// replaces `root` wholesale.
pub fn write(path: &str, value: Value, root: &mut Value) {
    let tokens = match split(path) {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("dropping data write: {err}");
            return;
        }
    };

    let Some((last, parents)) = tokens.split_last() else {
        *root = value;
        return;
    };

    let mut current = root;
    for token in parents {
        let Value::Object(map) = current else {
            debug!("dropping write to {path:?}: segment {token:?} is not an object");
            return;
        };
        current = map
            .entry(token.clone())
            .or_insert_with(|| Value::Object(Map::new()));
    }

    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
        }
        _ => debug!("dropping write to {path:?}: parent of final segment is not an object"),
    }
}
