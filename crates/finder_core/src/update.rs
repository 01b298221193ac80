use crate::msg::{FormInput, LookupFailure, Msg};
use crate::payload::LookupPayload;
use crate::registry::{AssetType, IdentifierKind};
use crate::render::render_sections;
use crate::request::{self, BuildError, Identifier, SelectionSet};
use crate::state::{AppState, Generation};
use crate::Effect;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AssetTypeSelected(raw) => {
            match AssetType::parse(&raw) {
                Ok(asset_type) => state.select_asset(asset_type),
                Err(err) => state.fail(err.to_string()),
            }
            Vec::new()
        }
        Msg::FormSubmitted(input) => submit(&mut state, input),
        Msg::LookupCompleted { generation, result } => {
            complete(&mut state, generation, result);
            Vec::new()
        }
        Msg::SectionToggled { index } => {
            state.toggle_section(index);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, input: FormInput) -> Vec<Effect> {
    let Some(asset_type) = state.selected() else {
        // No form is visible without a selected type; nothing to submit.
        return Vec::new();
    };
    let descriptor = asset_type.descriptor();

    let kind = input
        .key
        .or_else(|| descriptor.key_selectors.first().copied())
        .unwrap_or(IdentifierKind::Name);
    let identifier = Identifier::new(kind, input.identifier);
    let selection = SelectionSet::from_checked(asset_type, &input.checked);

    match request::build(asset_type, &identifier, &selection) {
        Ok(request) => {
            let identifier_kind = (!descriptor.key_selectors.is_empty()).then_some(kind);
            let generation = state.begin_loading(identifier_kind, selection);
            vec![Effect::DispatchLookup {
                generation,
                endpoint: descriptor.endpoint,
                request,
            }]
        }
        Err(err) => {
            // Validation short-circuits straight to the banner, without ever
            // entering Loading or disabling the submit control.
            state.fail(validation_message(asset_type, err));
            Vec::new()
        }
    }
}

fn complete(
    state: &mut AppState,
    generation: Generation,
    result: Result<LookupPayload, LookupFailure>,
) {
    if generation != state.generation() {
        // Stale: the user switched forms or resubmitted while this lookup
        // was in flight.
        return;
    }
    let Some((identifier_kind, selection)) = state.loading_context() else {
        return;
    };
    let Some(asset_type) = state.selected() else {
        return;
    };

    match result {
        Ok(payload) => {
            let sections = render_sections(&payload, &selection, asset_type, identifier_kind);
            state.complete(sections);
        }
        Err(failure) => state.fail(failure_message(asset_type, &failure)),
    }
}

fn validation_message(asset_type: AssetType, err: BuildError) -> String {
    match err {
        BuildError::MissingIdentifier => format!(
            "Please enter a {} Name or ID/Key.",
            asset_type.error_label()
        ),
        BuildError::NoSelectionMade => "Please select at least one option.".to_string(),
    }
}

fn failure_message(asset_type: AssetType, failure: &LookupFailure) -> String {
    match failure {
        LookupFailure::Status { body } if !body.trim().is_empty() => body.clone(),
        _ => format!(
            "An error occurred while retrieving {} details. Please try again.",
            asset_type.error_label()
        ),
    }
}
