use crate::payload::{CategoryValue, LookupPayload};
use crate::registry::{AssetType, IdentifierKind};
use crate::request::SelectionSet;

/// List items shown before a section collapses behind the expand affordance.
pub const VISIBLE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySection {
    pub title: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Single-line, path-like value.
    Text(String),
    /// The category's not-found message, shown in place of an empty list.
    NotFound(String),
    /// Ordered items. `truncated` marks lists longer than [`VISIBLE_COUNT`]
    /// that start collapsed behind a View more toggle.
    List { items: Vec<String>, truncated: bool },
}

impl DisplaySection {
    pub fn is_truncated(&self) -> bool {
        matches!(self.body, SectionBody::List { truncated: true, .. })
    }
}

/// Turns a response payload into the ordered section list.
///
/// Relation categories render in registry order, selected ones only. The
/// `identifier_kind` is the key the lookup was made with; a resolved name is
/// surfaced only for lookups by secondary key, where the user does not
/// already know it.
pub fn render_sections(
    payload: &LookupPayload,
    selection: &SelectionSet,
    asset_type: AssetType,
    identifier_kind: Option<IdentifierKind>,
) -> Vec<DisplaySection> {
    let mut sections = Vec::new();

    if resolved_by_secondary_key(asset_type, identifier_kind) {
        if let Some(name) = &payload.resolved_name {
            sections.push(DisplaySection {
                title: "Name".to_string(),
                body: SectionBody::Text(name.clone()),
            });
        }
    }

    for category in asset_type.descriptor().categories {
        if !selection.is_selected(category.id) {
            continue;
        }
        let body = match payload.categories.get(category.id) {
            Some(CategoryValue::Text(text)) if !text.is_empty() => SectionBody::Text(text.clone()),
            Some(CategoryValue::Items(items)) if !items.is_empty() => SectionBody::List {
                items: items.clone(),
                truncated: items.len() > VISIBLE_COUNT,
            },
            _ => SectionBody::NotFound(category.not_found.to_string()),
        };
        sections.push(DisplaySection {
            title: category.title.to_string(),
            body,
        });
    }

    // Activity lookups always close with the automations list, independent
    // of any selection, rendered in full.
    if matches!(asset_type, AssetType::Activity(_)) {
        let body = if payload.automations.is_empty() {
            SectionBody::NotFound("No automations found.".to_string())
        } else {
            SectionBody::List {
                items: payload.automations.clone(),
                truncated: false,
            }
        };
        sections.push(DisplaySection {
            title: "Automations".to_string(),
            body,
        });
    }

    sections
}

fn resolved_by_secondary_key(asset_type: AssetType, kind: Option<IdentifierKind>) -> bool {
    matches!(
        (asset_type, kind),
        (AssetType::DataExtension, Some(IdentifierKind::CustomerKey))
            | (AssetType::Email, Some(IdentifierKind::Id))
    )
}
