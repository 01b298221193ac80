use std::fmt;

/// One supported asset type in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    DataExtension,
    CloudPage,
    Email,
    Activity(ActivityKind),
}

/// Automation activity subtypes. They share one form and endpoint and differ
/// only in the `activityType` label carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Query,
    Script,
    ImportActivity,
    FilterActivity,
}

impl ActivityKind {
    /// The un-normalized label the backend expects as `activityType`.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Query => "Queries",
            ActivityKind::Script => "Scripts",
            ActivityKind::ImportActivity => "Import Activities",
            ActivityKind::FilterActivity => "Filter Activities",
        }
    }
}

/// Which identifier field of a form carries the user's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Name,
    CustomerKey,
    Id,
}

/// One named kind of relationship a user can opt to view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationCategory {
    /// Key in both the request's `userselection` map and the response body.
    pub id: &'static str,
    pub title: &'static str,
    pub not_found: &'static str,
}

/// Static description of one asset type: endpoint, identifier fields and
/// relation categories in render order.
#[derive(Debug)]
pub struct AssetTypeDescriptor {
    pub endpoint: &'static str,
    /// Allowed key selectors; the first entry is the form default. Empty for
    /// types whose single input field is not selectable.
    pub key_selectors: &'static [IdentifierKind],
    pub categories: &'static [RelationCategory],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAssetType(pub String);

impl fmt::Display for UnknownAssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown asset type: {}", self.0)
    }
}

impl std::error::Error for UnknownAssetType {}

const DATA_EXTENSION_CATEGORIES: &[RelationCategory] = &[
    RelationCategory {
        id: "dePath",
        title: "Path",
        not_found: "No path found for this Data Extension.",
    },
    RelationCategory {
        id: "queriesTargeting",
        title: "Queries targeting this Data Extension",
        not_found: "No queries found targeting this Data Extension.",
    },
    RelationCategory {
        id: "queriesIncluding",
        title: "Queries including this Data Extension",
        not_found: "No queries found including this Data Extension.",
    },
    RelationCategory {
        id: "importsTargeting",
        title: "Import activities targeting this Data Extension",
        not_found: "No import activities found targeting this Data Extension.",
    },
    RelationCategory {
        id: "filtersTargeting",
        title: "Filters targeting this Data Extension",
        not_found: "No filters found targeting this Data Extension.",
    },
    RelationCategory {
        id: "contentEmailsIncluding",
        title: "Content Builder emails using this Data Extension",
        not_found: "No Content Builder emails found using this Data Extension.",
    },
    RelationCategory {
        id: "initiatedEmailsTargeting",
        title: "Initiated emails using this Data Extension",
        not_found: "No initiated emails found using this Data Extension.",
    },
    RelationCategory {
        id: "journeysUsingDE",
        title: "Journeys using this Data Extension",
        not_found: "No journeys found using this Data Extension.",
    },
    RelationCategory {
        id: "scriptsIncluding",
        title: "Scripts including this Data Extension",
        not_found: "No scripts found including this Data Extension.",
    },
    RelationCategory {
        id: "pagesIncluding",
        title: "CloudPages including this Data Extension",
        not_found: "No CloudPages found including this Data Extension.",
    },
];

const CLOUD_PAGE_CATEGORIES: &[RelationCategory] = &[
    RelationCategory {
        id: "emailsUsingCloudPage",
        title: "Emails using this CloudPage",
        not_found: "No emails found using this CloudPage.",
    },
    RelationCategory {
        id: "cloudPagesUsingCloudPage",
        title: "CloudPages using this CloudPage",
        not_found: "No CloudPages found using this CloudPage.",
    },
];

const EMAIL_CATEGORIES: &[RelationCategory] = &[
    RelationCategory {
        id: "journeysUsingEmail",
        title: "Journeys using this Email",
        not_found: "No journeys found using this Email.",
    },
    RelationCategory {
        id: "initiatedEmailsUsing",
        title: "User-Initiated Emails using this Email",
        not_found: "No User-Initiated Emails found using this Email.",
    },
    RelationCategory {
        id: "triggeredSends",
        title: "Triggered Sends using this Email",
        not_found: "No Triggered Sends found using this Email.",
    },
];

static DATA_EXTENSION: AssetTypeDescriptor = AssetTypeDescriptor {
    endpoint: "/data-extension-detail",
    key_selectors: &[IdentifierKind::Name, IdentifierKind::CustomerKey],
    categories: DATA_EXTENSION_CATEGORIES,
};

static CLOUD_PAGE: AssetTypeDescriptor = AssetTypeDescriptor {
    endpoint: "/cloud-page-detail",
    key_selectors: &[],
    categories: CLOUD_PAGE_CATEGORIES,
};

static EMAIL: AssetTypeDescriptor = AssetTypeDescriptor {
    endpoint: "/email-detail",
    key_selectors: &[IdentifierKind::Id, IdentifierKind::Name],
    categories: EMAIL_CATEGORIES,
};

static ACTIVITY: AssetTypeDescriptor = AssetTypeDescriptor {
    endpoint: "/automation-activity-detail",
    key_selectors: &[],
    categories: &[],
};

impl AssetType {
    /// Parses a raw selector value. Matching is case-insensitive and ignores
    /// whitespace, so `"Import Activities"` and `"importactivities"` agree.
    pub fn parse(raw: &str) -> Result<Self, UnknownAssetType> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "dataextensions" => Ok(AssetType::DataExtension),
            "cloudpages" => Ok(AssetType::CloudPage),
            "emails" => Ok(AssetType::Email),
            "queries" => Ok(AssetType::Activity(ActivityKind::Query)),
            "scripts" => Ok(AssetType::Activity(ActivityKind::Script)),
            "importactivities" => Ok(AssetType::Activity(ActivityKind::ImportActivity)),
            "filteractivities" => Ok(AssetType::Activity(ActivityKind::FilterActivity)),
            _ => Err(UnknownAssetType(raw.to_string())),
        }
    }

    pub fn descriptor(self) -> &'static AssetTypeDescriptor {
        match self {
            AssetType::DataExtension => &DATA_EXTENSION,
            AssetType::CloudPage => &CLOUD_PAGE,
            AssetType::Email => &EMAIL,
            AssetType::Activity(_) => &ACTIVITY,
        }
    }

    /// Label shown above the results pane.
    pub fn display_label(self) -> &'static str {
        match self {
            AssetType::DataExtension => "Data Extensions",
            AssetType::CloudPage => "CloudPages",
            AssetType::Email => "Emails",
            AssetType::Activity(kind) => kind.label(),
        }
    }

    /// Singular label used in user-facing error messages.
    pub fn error_label(self) -> &'static str {
        match self {
            AssetType::DataExtension => "Data Extension",
            AssetType::CloudPage => "CloudPage",
            AssetType::Email => "Email",
            AssetType::Activity(_) => "Activity",
        }
    }
}

/// Registry contract: raw selector value to descriptor in one step.
pub fn describe(raw: &str) -> Result<&'static AssetTypeDescriptor, UnknownAssetType> {
    AssetType::parse(raw).map(AssetType::descriptor)
}
