use crate::payload::LookupPayload;
use crate::registry::IdentifierKind;
use crate::state::Generation;

/// Raw form values captured at submit time. The front end owns the widgets;
/// the core only ever sees this snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub identifier: String,
    /// Chosen key selector, if the form has one.
    pub key: Option<IdentifierKind>,
    /// Checkbox state by relation category id.
    pub checked: Vec<(String, bool)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked an entry in the asset type selector (raw select value).
    AssetTypeSelected(String),
    /// User clicked the active form's submit button.
    FormSubmitted(FormInput),
    /// The lookup dispatched for `generation` settled.
    LookupCompleted {
        generation: Generation,
        result: Result<LookupPayload, LookupFailure>,
    },
    /// User clicked a section's View more/View less toggle.
    SectionToggled { index: usize },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Terminal failure of a dispatched lookup, as reported by the IO layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Non-2xx response; the body is surfaced verbatim when present.
    Status { body: String },
    /// Transport-level failure (connect, timeout, decode).
    Transport,
}
