use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Collapsible category within the skills panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SkillCategory {
    #[serde(rename = "Technical Skills")]
    Technical,
    #[serde(rename = "Soft Skills")]
    Soft,
    #[serde(rename = "Domain Knowledge")]
    Domain,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Domain,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Domain => "domain",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical Skills",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::Domain => "Domain Knowledge",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SkillCategory {
    type Err = Error;

    /// Accepts either the short id (`soft`) or the full label (`Soft Skills`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SkillCategory::ALL
            .into_iter()
            .find(|section| {
                section.id().eq_ignore_ascii_case(needle)
                    || section.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}
