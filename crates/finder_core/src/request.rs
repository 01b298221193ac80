use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::registry::{AssetType, IdentifierKind};

/// Tagged identifier: which key field the value belongs to is explicit, so
/// the builder never has to guess from which field happens to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub kind: IdentifierKind,
    pub value: String,
}

impl Identifier {
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Checkbox state per relation category id, captured at submit time.
///
/// Always holds an entry for every category the registry knows for the asset
/// type; the backend treats a missing key differently from `false`, so ids
/// are never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeMap<&'static str, bool>);

impl SelectionSet {
    /// Builds the full selection map for `asset_type` from the checked pairs
    /// the form reports. Ids absent from `checked` default to false.
    pub fn from_checked(asset_type: AssetType, checked: &[(String, bool)]) -> Self {
        let mut map = BTreeMap::new();
        for category in asset_type.descriptor().categories {
            let on = checked
                .iter()
                .any(|(id, checked)| *checked && id == category.id);
            map.insert(category.id, on);
        }
        Self(map)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn any_selected(&self) -> bool {
        self.0.values().any(|on| *on)
    }
}

/// Canonical request payload, shaped per asset type. Field names follow the
/// backend schema exactly; serialization is deterministic, so identical
/// inputs produce byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupRequest {
    DataExtension {
        name: String,
        #[serde(rename = "customerKey")]
        customer_key: String,
        userselection: SelectionSet,
    },
    CloudPage {
        #[serde(rename = "cloudPageID")]
        cloud_page_id: String,
        userselection: SelectionSet,
    },
    Email {
        #[serde(rename = "ID")]
        id: String,
        #[serde(rename = "Name")]
        name: String,
        userselection: SelectionSet,
    },
    Activity {
        name: String,
        #[serde(rename = "activityType")]
        activity_type: &'static str,
    },
}

/// Local validation failures; these never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    MissingIdentifier,
    NoSelectionMade,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingIdentifier => write!(f, "missing identifier"),
            BuildError::NoSelectionMade => write!(f, "no relation category selected"),
        }
    }
}

impl std::error::Error for BuildError {}

/// Maps the form's raw values to the canonical request payload.
///
/// For types with a key selector exactly the chosen field receives the
/// identifier; the other key is sent as an empty string because the backend
/// schema expects both keys present.
pub fn build(
    asset_type: AssetType,
    identifier: &Identifier,
    selection: &SelectionSet,
) -> Result<LookupRequest, BuildError> {
    let value = identifier.value.trim();
    if value.is_empty() {
        return Err(BuildError::MissingIdentifier);
    }

    // Activity forms have no checkboxes and therefore no selection gate.
    if !asset_type.descriptor().categories.is_empty() && !selection.any_selected() {
        return Err(BuildError::NoSelectionMade);
    }

    let request = match asset_type {
        AssetType::DataExtension => {
            let (name, customer_key) = match identifier.kind {
                IdentifierKind::CustomerKey => (String::new(), value.to_string()),
                _ => (value.to_string(), String::new()),
            };
            LookupRequest::DataExtension {
                name,
                customer_key,
                userselection: selection.clone(),
            }
        }
        AssetType::CloudPage => LookupRequest::CloudPage {
            cloud_page_id: value.to_string(),
            userselection: selection.clone(),
        },
        AssetType::Email => {
            let (id, name) = match identifier.kind {
                IdentifierKind::Id => (value.to_string(), String::new()),
                _ => (String::new(), value.to_string()),
            };
            LookupRequest::Email {
                id,
                name,
                userselection: selection.clone(),
            }
        }
        AssetType::Activity(kind) => LookupRequest::Activity {
            name: value.to_string(),
            activity_type: kind.label(),
        },
    };

    Ok(request)
}
