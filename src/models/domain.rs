//! Feature domains that share the category/selection model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feature domain of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Business rule families with free-text user rules
    #[serde(rename = "business-rules")]
    BusinessRules,
    /// Actions & interactions (13 interaction categories)
    #[serde(rename = "actions")]
    ActionsInteractions,
    /// Animation effects
    #[serde(rename = "animations")]
    AnimationEffects,
    /// UI/UX design guidelines
    #[serde(rename = "design-guidelines")]
    DesignGuidelines,
}

impl Domain {
    /// All domains in display order.
    pub const ALL: [Self; 4] = [
        Self::BusinessRules,
        Self::ActionsInteractions,
        Self::AnimationEffects,
        Self::DesignGuidelines,
    ];

    /// Stable identifier used in file names, URLs and the CLI.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::BusinessRules => "business-rules",
            Self::ActionsInteractions => "actions",
            Self::AnimationEffects => "animations",
            Self::DesignGuidelines => "design-guidelines",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BusinessRules => "Business Rules",
            Self::ActionsInteractions => "Actions & Interactions",
            Self::AnimationEffects => "Animation Effects",
            Self::DesignGuidelines => "Design Guidelines",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "business-rules" | "rules" => Ok(Self::BusinessRules),
            "actions" | "actions-interactions" | "interactions" => Ok(Self::ActionsInteractions),
            "animations" | "animation-effects" => Ok(Self::AnimationEffects),
            "design-guidelines" | "design" | "uiux" => Ok(Self::DesignGuidelines),
            _ => Err(format!(
                "Unknown domain '{s}'. Expected one of: business-rules, actions, animations, design-guidelines"
            )),
        }
    }
}
