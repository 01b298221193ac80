//! Finder core: pure request building, result rendering and UI state machine.
mod effect;
mod msg;
mod payload;
mod registry;
mod render;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FormInput, LookupFailure, Msg};
pub use payload::{CategoryValue, LookupPayload};
pub use registry::{
    describe, ActivityKind, AssetType, AssetTypeDescriptor, IdentifierKind, RelationCategory,
    UnknownAssetType,
};
pub use render::{render_sections, DisplaySection, SectionBody, VISIBLE_COUNT};
pub use request::{build as build_request, BuildError, Identifier, LookupRequest, SelectionSet};
pub use state::{AppState, Generation};
pub use update::update;
pub use view_model::{
    AppViewModel, SectionView, PLACEHOLDER_IDLE, PLACEHOLDER_LOADING, VIEW_LESS, VIEW_MORE,
};
