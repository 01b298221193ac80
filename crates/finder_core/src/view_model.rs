use crate::render::{DisplaySection, SectionBody, VISIBLE_COUNT};

pub const PLACEHOLDER_IDLE: &str = "Information will be shown here.";
pub const PLACEHOLDER_LOADING: &str = "Results are loading...";
pub const VIEW_MORE: &str = "View more";
pub const VIEW_LESS: &str = "View less";

/// Everything a front end needs to paint the screen. Derived from state on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected_label: Option<&'static str>,
    /// Shown in the results pane while there is nothing to render.
    pub placeholder: Option<&'static str>,
    /// Single replaceable banner message.
    pub error: Option<String>,
    pub sections: Vec<SectionView>,
    /// The single-flight guard: false only while a lookup is in flight.
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub lines: Vec<String>,
    /// True when the lines show a not-found message rather than data.
    pub muted: bool,
    /// Items currently collapsed behind the toggle.
    pub hidden_count: usize,
    /// "View more" / "View less" when the section is expandable.
    pub toggle_label: Option<&'static str>,
}

pub(crate) fn section_view(section: &DisplaySection, expanded: bool) -> SectionView {
    let title = section.title.clone();
    match &section.body {
        SectionBody::Text(text) => SectionView {
            title,
            lines: vec![text.clone()],
            muted: false,
            hidden_count: 0,
            toggle_label: None,
        },
        SectionBody::NotFound(message) => SectionView {
            title,
            lines: vec![message.clone()],
            muted: true,
            hidden_count: 0,
            toggle_label: None,
        },
        SectionBody::List { items, truncated } => {
            let (lines, hidden_count, toggle_label) = match (*truncated, expanded) {
                (false, _) => (items.clone(), 0, None),
                (true, false) => (
                    items[..VISIBLE_COUNT].to_vec(),
                    items.len() - VISIBLE_COUNT,
                    Some(VIEW_MORE),
                ),
                (true, true) => (items.clone(), 0, Some(VIEW_LESS)),
            };
            SectionView {
                title,
                lines,
                muted: false,
                hidden_count,
                toggle_label,
            }
        }
    }
}
