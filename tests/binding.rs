//! Data-binding tests at the public API surface.
//!
//! Cover the two-way path: stream updates flowing into the data model,
//! bound-value resolution reading out of it, and user edits flowing back
//! in through the narrow write entry point.

use a2ui_stream::{build_action, ActionContextEntry, StreamSession, MODE_DELIMITER};
use serde_json::json;

fn live_session() -> StreamSession {
    let mut session = StreamSession::new();
    session.consume(MODE_DELIMITER);
    session.consume(
        "{\"dataModelUpdate\":{\"surfaceId\":\"s1\",\"contents\":[{\"key\":\"form\",\"valueMap\":[{\"key\":\"email\",\"valueString\":\"ada@example.com\"}]}]}}\n",
    );
    session.consume("{\"beginRendering\":{\"surfaceId\":\"s1\",\"root\":\"c1\"}}\n");
    session
}

#[test]
fn test_resolution_is_not_cached() {
    let mut session = live_session();

    let bound = json!({ "path": "/form/email" });
    assert_eq!(
        session.surface("s1").unwrap().resolve(&bound),
        Some(json!("ada@example.com"))
    );

    // A later stream update must be visible to the next resolve.
    session.consume(
        "{\"dataModelUpdate\":{\"surfaceId\":\"s1\",\"contents\":[{\"key\":\"form\",\"valueMap\":[{\"key\":\"email\",\"valueString\":\"grace@example.com\"}]}]}}\n",
    );
    assert_eq!(
        session.surface("s1").unwrap().resolve(&bound),
        Some(json!("grace@example.com"))
    );
}

#[test]
fn test_edit_flows_back_through_write_path() {
    let mut session = live_session();

    session.write_data_path("s1", "/form/email", json!("edited@example.com"));

    let surface = session.surface("s1").unwrap();
    assert_eq!(
        surface.read_data("/form/email"),
        Some(&json!("edited@example.com"))
    );
    assert_eq!(
        surface.resolve(&json!({ "path": "/form/email" })),
        Some(json!("edited@example.com"))
    );
}

#[test]
fn test_edit_creates_missing_parents() {
    let mut session = live_session();
    session.write_data_path("s1", "/draft/note/body", json!("wip"));
    assert_eq!(
        session.surface("s1").unwrap().read_data("/draft/note/body"),
        Some(&json!("wip"))
    );
}

#[test]
fn test_escaped_keys_round_trip_through_the_stream() {
    let mut session = StreamSession::new();
    session.consume(MODE_DELIMITER);
    session.consume(
        "{\"dataModelUpdate\":{\"surfaceId\":\"s1\",\"contents\":[{\"key\":\"a/b\",\"valueNumber\":7}]}}\n",
    );

    let surface = session.surface("s1").unwrap();
    assert_eq!(surface.read_data("/a~1b"), Some(&json!(7.0)));
}

#[test]
fn test_malformed_edit_path_is_a_noop() {
    let mut session = live_session();
    let before = serde_json::to_value(session.surfaces()).unwrap();

    session.write_data_path("s1", "no-leading-slash", json!(1));

    assert_eq!(serde_json::to_value(session.surfaces()).unwrap(), before);
}

#[test]
fn test_action_reflects_latest_edits() {
    let mut session = live_session();
    session.write_data_path("s1", "/form/email", json!("final@example.com"));

    let context = vec![ActionContextEntry {
        key: "email".to_string(),
        value: json!({ "path": "/form/email" }),
    }];
    let surface = session.surface("s1").unwrap();
    let action = build_action(surface, "s1", "submit-btn", "submit", &context);

    assert_eq!(action.context["email"], json!("final@example.com"));
    assert_eq!(action.surface_id, "s1");
}
