use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the six mutually exclusive content panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Skills,
    Learning,
    Projects,
    Linkedin,
    Checklist,
}

impl Tab {
    /// All tabs in navigation order.
    pub const ALL: [Tab; 6] = [
        Tab::Overview,
        Tab::Skills,
        Tab::Learning,
        Tab::Projects,
        Tab::Linkedin,
        Tab::Checklist,
    ];

    /// Stable lowercase identifier, as accepted by `FromStr`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Skills => "skills",
            Tab::Learning => "learning",
            Tab::Projects => "projects",
            Tab::Linkedin => "linkedin",
            Tab::Checklist => "checklist",
        }
    }

    /// Navigation label: the id with its first letter upper-cased.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Skills => "Skills",
            Tab::Learning => "Learning",
            Tab::Projects => "Projects",
            Tab::Linkedin => "Linkedin",
            Tab::Checklist => "Checklist",
        }
    }

    /// Heading shown at the top of the tab's panel.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Tab::Overview => "Career Journey Overview",
            Tab::Skills => "Skills Assessment",
            Tab::Learning => "Learning Resources",
            Tab::Projects => "Portfolio Projects",
            Tab::Linkedin => "LinkedIn Strategy",
            Tab::Checklist => "Action Plan",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}
