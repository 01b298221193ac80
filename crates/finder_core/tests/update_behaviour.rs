use std::sync::Once;

use finder_core::{
    update, AppState, Effect, FormInput, Generation, IdentifierKind, LookupFailure, LookupPayload,
    Msg, PLACEHOLDER_IDLE, PLACEHOLDER_LOADING, VIEW_LESS, VIEW_MORE,
};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(finder_logging::initialize_for_tests);
}

fn select(state: AppState, raw: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::AssetTypeSelected(raw.to_string()))
}

fn submit(
    state: AppState,
    identifier: &str,
    key: Option<IdentifierKind>,
    checked: &[&str],
) -> (AppState, Vec<Effect>) {
    let input = FormInput {
        identifier: identifier.to_string(),
        key,
        checked: checked.iter().map(|id| (id.to_string(), true)).collect(),
    };
    update(state, Msg::FormSubmitted(input))
}

fn dispatched_generation(effects: &[Effect]) -> Generation {
    match effects {
        [Effect::DispatchLookup { generation, .. }] => *generation,
        other => panic!("expected one dispatch, got {other:?}"),
    }
}

fn complete_ok(
    state: AppState,
    generation: Generation,
    body: serde_json::Value,
) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::LookupCompleted {
            generation,
            result: Ok(LookupPayload::from_value(&body)),
        },
    )
}

#[test]
fn initial_state_shows_placeholder() {
    init_logging();
    let state = AppState::new();
    let view = state.view();

    assert_eq!(view.placeholder, Some(PLACEHOLDER_IDLE));
    assert_eq!(view.error, None);
    assert!(view.sections.is_empty());
    assert!(view.submit_enabled);
}

#[test]
fn unknown_asset_type_shows_banner() {
    init_logging();
    let (state, effects) = select(AppState::new(), "Nonsense");

    assert!(effects.is_empty());
    assert_eq!(
        state.view().error,
        Some("unknown asset type: Nonsense".to_string())
    );
}

#[test]
fn blank_identifier_short_circuits_without_dispatch() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(state, "   ", None, &["journeysUsingEmail"]);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.error,
        Some("Please enter a Email Name or ID/Key.".to_string())
    );
    assert_eq!(view.placeholder, None);
    // The control was never disabled past the synchronous check.
    assert!(view.submit_enabled);
}

#[test]
fn all_false_selection_short_circuits_without_dispatch() {
    init_logging();
    let (state, _) = select(AppState::new(), "DataExtensions");
    let (state, effects) = submit(state, "Customers", None, &[]);

    assert!(effects.is_empty());
    assert_eq!(
        state.view().error,
        Some("Please select at least one option.".to_string())
    );
}

#[test]
fn valid_submit_enters_loading_and_dispatches_once() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(
        state,
        "abc123",
        Some(IdentifierKind::Id),
        &["journeysUsingEmail"],
    );

    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::DispatchLookup { endpoint, .. } => assert_eq!(*endpoint, "/email-detail"),
    }
    let view = state.view();
    assert_eq!(view.placeholder, Some(PLACEHOLDER_LOADING));
    assert!(!view.submit_enabled);
    assert_eq!(view.error, None);
}

#[test]
fn completion_renders_sections_and_reenables_submit() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(
        state,
        "abc123",
        Some(IdentifierKind::Id),
        &["journeysUsingEmail"],
    );
    let generation = dispatched_generation(&effects);
    let (mut state, _) = complete_ok(state, generation, json!({ "journeysUsingEmail": [] }));

    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.placeholder, None);
    assert!(view.submit_enabled);
    assert_eq!(view.sections.len(), 1);
    assert_eq!(view.sections[0].title, "Journeys using this Email");
    assert_eq!(
        view.sections[0].lines,
        vec!["No journeys found using this Email.".to_string()]
    );
    assert!(view.sections[0].muted);
}

#[test]
fn failure_body_is_surfaced_verbatim() {
    init_logging();
    let (state, _) = select(AppState::new(), "DataExtensions");
    let (state, effects) = submit(state, "Customers", None, &["dePath"]);
    let generation = dispatched_generation(&effects);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            generation,
            result: Err(LookupFailure::Status {
                body: "No Data Extension found with this CustomerKey or Name".to_string(),
            }),
        },
    );

    let view = state.view();
    assert_eq!(
        view.error,
        Some("No Data Extension found with this CustomerKey or Name".to_string())
    );
    // An error response yields no sections.
    assert!(view.sections.is_empty());
    assert!(view.submit_enabled);
}

#[test]
fn transport_failure_uses_generic_message() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(state, "abc123", None, &["triggeredSends"]);
    let generation = dispatched_generation(&effects);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            generation,
            result: Err(LookupFailure::Transport),
        },
    );

    assert_eq!(
        state.view().error,
        Some("An error occurred while retrieving Email details. Please try again.".to_string())
    );
}

#[test]
fn switching_type_clears_results_and_errors() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, _) = submit(state, "", None, &[]);
    assert!(state.view().error.is_some());

    let (state, _) = select(state, "CloudPages");

    let view = state.view();
    assert_eq!(view.error, None);
    assert!(view.sections.is_empty());
    assert_eq!(view.placeholder, Some(PLACEHOLDER_IDLE));
    assert_eq!(view.selected_label, Some("CloudPages"));
}

#[test]
fn stale_completion_after_type_switch_is_discarded() {
    init_logging();
    let (state, _) = select(AppState::new(), "DataExtensions");
    let (state, effects) = submit(state, "Customers", None, &["dePath"]);
    let stale = dispatched_generation(&effects);

    // Type switch while the lookup is in flight.
    let (mut state, _) = select(state, "Emails");
    assert!(state.consume_dirty());

    let (mut state, _) = complete_ok(
        state,
        stale,
        json!({ "dePath": "Data Extensions / Shared" }),
    );

    // The late response must not paint into the new form's pane.
    assert!(!state.consume_dirty());
    let view = state.view();
    assert!(view.sections.is_empty());
    assert_eq!(view.placeholder, Some(PLACEHOLDER_IDLE));
}

#[test]
fn resubmit_supersedes_the_previous_lookup() {
    init_logging();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, first) = submit(state, "abc123", None, &["journeysUsingEmail"]);
    let first_generation = dispatched_generation(&first);
    let (state, second) = submit(state, "def456", None, &["journeysUsingEmail"]);
    let second_generation = dispatched_generation(&second);
    assert!(second_generation > first_generation);

    // The superseded completion is ignored, the current one renders.
    let (state, _) = complete_ok(
        state,
        first_generation,
        json!({ "journeysUsingEmail": [{ "Name": "old" }] }),
    );
    assert!(state.view().sections.is_empty());

    let (state, _) = complete_ok(
        state,
        second_generation,
        json!({ "journeysUsingEmail": [{ "Name": "new" }] }),
    );
    assert_eq!(state.view().sections[0].lines, vec!["new".to_string()]);
}

#[test]
fn toggle_expands_and_collapses_truncated_sections() {
    init_logging();
    let journeys: Vec<serde_json::Value> = ["a", "b", "c", "d", "e", "f", "g"]
        .iter()
        .map(|name| json!({ "Name": name }))
        .collect();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(state, "abc123", None, &["journeysUsingEmail"]);
    let generation = dispatched_generation(&effects);
    let (state, _) = complete_ok(state, generation, json!({ "journeysUsingEmail": journeys }));

    let section = &state.view().sections[0];
    assert_eq!(section.lines, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(section.hidden_count, 2);
    assert_eq!(section.toggle_label, Some(VIEW_MORE));

    let (state, _) = update(state, Msg::SectionToggled { index: 0 });
    let section = &state.view().sections[0];
    assert_eq!(section.lines, vec!["a", "b", "c", "d", "e", "f", "g"]);
    assert_eq!(section.hidden_count, 0);
    assert_eq!(section.toggle_label, Some(VIEW_LESS));

    let (state, _) = update(state, Msg::SectionToggled { index: 0 });
    let section = &state.view().sections[0];
    assert_eq!(section.lines, vec!["a", "b", "c", "d", "e"]);
    assert_eq!(section.toggle_label, Some(VIEW_MORE));
}

#[test]
fn toggle_ignores_sections_without_the_affordance() {
    init_logging();
    let journeys: Vec<serde_json::Value> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|name| json!({ "Name": name }))
        .collect();
    let (state, _) = select(AppState::new(), "Emails");
    let (state, effects) = submit(state, "abc123", None, &["journeysUsingEmail"]);
    let generation = dispatched_generation(&effects);
    let (mut state, _) = complete_ok(state, generation, json!({ "journeysUsingEmail": journeys }));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::SectionToggled { index: 0 });

    assert!(!state.consume_dirty());
    let section = &state.view().sections[0];
    assert_eq!(section.lines.len(), 5);
    assert_eq!(section.toggle_label, None);
}
