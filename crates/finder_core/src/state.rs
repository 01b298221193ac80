use crate::registry::{AssetType, IdentifierKind};
use crate::render::DisplaySection;
use crate::request::SelectionSet;
use crate::view_model::{
    section_view, AppViewModel, PLACEHOLDER_IDLE, PLACEHOLDER_LOADING,
};

/// Monotonically increasing lookup counter. A completion whose generation no
/// longer matches the state's is stale and must be discarded.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected: Option<AssetType>,
    phase: Phase,
    generation: Generation,
    dirty: bool,
}

/// Result-pane lifecycle. Validation failures and lookup errors both land in
/// `Failed`; they differ only in how the message was produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    AwaitingInput,
    Loading {
        identifier_kind: Option<IdentifierKind>,
        selection: SelectionSet,
    },
    Rendered {
        sections: Vec<DisplaySection>,
        expanded: Vec<bool>,
    },
    Failed {
        message: String,
    },
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<AssetType> {
        self.selected
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// True once since the last mutation; used to coalesce repaints.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let mut view = AppViewModel {
            selected_label: self.selected.map(AssetType::display_label),
            placeholder: None,
            error: None,
            sections: Vec::new(),
            submit_enabled: !self.is_loading(),
        };
        match &self.phase {
            Phase::Idle | Phase::AwaitingInput => view.placeholder = Some(PLACEHOLDER_IDLE),
            Phase::Loading { .. } => view.placeholder = Some(PLACEHOLDER_LOADING),
            Phase::Rendered { sections, expanded } => {
                view.sections = sections
                    .iter()
                    .zip(expanded)
                    .map(|(section, expanded)| section_view(section, *expanded))
                    .collect();
            }
            Phase::Failed { message } => view.error = Some(message.clone()),
        }
        view
    }

    /// Switches the visible form. Previous results and errors are cleared and
    /// any in-flight lookup becomes stale.
    pub(crate) fn select_asset(&mut self, asset_type: AssetType) {
        self.selected = Some(asset_type);
        self.phase = Phase::AwaitingInput;
        self.generation += 1;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = Phase::Failed { message };
        self.dirty = true;
    }

    /// Enters `Loading` and returns the generation the dispatched lookup must
    /// echo back on completion.
    pub(crate) fn begin_loading(
        &mut self,
        identifier_kind: Option<IdentifierKind>,
        selection: SelectionSet,
    ) -> Generation {
        self.generation += 1;
        self.phase = Phase::Loading {
            identifier_kind,
            selection,
        };
        self.dirty = true;
        self.generation
    }

    /// The key and selection of the in-flight lookup, if any.
    pub(crate) fn loading_context(&self) -> Option<(Option<IdentifierKind>, SelectionSet)> {
        match &self.phase {
            Phase::Loading {
                identifier_kind,
                selection,
            } => Some((*identifier_kind, selection.clone())),
            _ => None,
        }
    }

    pub(crate) fn complete(&mut self, sections: Vec<DisplaySection>) {
        let expanded = vec![false; sections.len()];
        self.phase = Phase::Rendered { sections, expanded };
        self.dirty = true;
    }

    pub(crate) fn toggle_section(&mut self, index: usize) {
        if let Phase::Rendered { sections, expanded } = &mut self.phase {
            let Some(section) = sections.get(index) else {
                return;
            };
            if section.is_truncated() {
                expanded[index] = !expanded[index];
                self.dirty = true;
            }
        }
    }
}
