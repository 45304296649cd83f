use serde::Serialize;

use crate::model::{ChecklistItem, ChecklistProgress, CompletionRatio, SkillCategory, Tab};

/// The interactive state of the roadmap page.
///
/// Three independent pieces: the active tab, at most one expanded skills
/// category, and the checklist flags. Every transition is total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapState {
    active_tab: Tab,
    expanded_section: Option<SkillCategory>,
    #[serde(rename = "progressItems")]
    progress: ChecklistProgress,
}

impl RoadmapState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state that starts on `tab` instead of the overview.
    #[must_use]
    pub fn with_active_tab(tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    #[must_use]
    pub fn expanded_section(&self) -> Option<SkillCategory> {
        self.expanded_section
    }

    #[must_use]
    pub fn is_expanded(&self, section: SkillCategory) -> bool {
        self.expanded_section == Some(section)
    }

    #[must_use]
    pub fn progress(&self) -> &ChecklistProgress {
        &self.progress
    }

    #[must_use]
    pub fn is_done(&self, item: ChecklistItem) -> bool {
        self.progress.is_done(item)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Expands `section`, replacing any other expansion. Collapses it if it
    /// was already the expanded one.
    pub fn toggle_expanded(&mut self, section: SkillCategory) {
        self.expanded_section = if self.expanded_section == Some(section) {
            None
        } else {
            Some(section)
        };
    }

    /// Flips the flag for `item` and returns its new value.
    pub fn toggle_checklist_item(&mut self, item: ChecklistItem) -> bool {
        self.progress.toggle(item)
    }

    #[must_use]
    pub fn completion_ratio(&self) -> CompletionRatio {
        self.progress.ratio()
    }
}
