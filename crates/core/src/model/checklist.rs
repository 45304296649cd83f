use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

//
// ─── ITEMS ─────────────────────────────────────────────────────────────────────
//

/// One entry of the nine-item action plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChecklistItem {
    ReviewResume,
    UpdateLinkedIn,
    CompleteSkillsAssessment,
    StartLearningPath,
    NetworkWithPMs,
    BeginSideProject,
    PrepareInterviewStories,
    CreatePortfolio,
    ApplyToJobs,
}

impl ChecklistItem {
    pub const COUNT: usize = 9;

    /// All items in action-plan order.
    pub const ALL: [ChecklistItem; Self::COUNT] = [
        ChecklistItem::ReviewResume,
        ChecklistItem::UpdateLinkedIn,
        ChecklistItem::CompleteSkillsAssessment,
        ChecklistItem::StartLearningPath,
        ChecklistItem::NetworkWithPMs,
        ChecklistItem::BeginSideProject,
        ChecklistItem::PrepareInterviewStories,
        ChecklistItem::CreatePortfolio,
        ChecklistItem::ApplyToJobs,
    ];

    /// The camelCase key used on the command line and in JSON output.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ChecklistItem::ReviewResume => "reviewResume",
            ChecklistItem::UpdateLinkedIn => "updateLinkedIn",
            ChecklistItem::CompleteSkillsAssessment => "completeSkillsAssessment",
            ChecklistItem::StartLearningPath => "startLearningPath",
            ChecklistItem::NetworkWithPMs => "networkWithPMs",
            ChecklistItem::BeginSideProject => "beginSideProject",
            ChecklistItem::PrepareInterviewStories => "prepareInterviewStories",
            ChecklistItem::CreatePortfolio => "createPortfolio",
            ChecklistItem::ApplyToJobs => "applyToJobs",
        }
    }

    /// Human label derived from the key, e.g. `reviewResume` -> "Review Resume".
    #[must_use]
    pub fn label(self) -> String {
        humanize_key(self.key())
    }

    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            ChecklistItem::ReviewResume
            | ChecklistItem::UpdateLinkedIn
            | ChecklistItem::CompleteSkillsAssessment => Phase::Preparation,
            ChecklistItem::StartLearningPath
            | ChecklistItem::NetworkWithPMs
            | ChecklistItem::BeginSideProject => Phase::Development,
            ChecklistItem::PrepareInterviewStories
            | ChecklistItem::CreatePortfolio
            | ChecklistItem::ApplyToJobs => Phase::Application,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChecklistItem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ChecklistItem::ALL
            .into_iter()
            .find(|item| item.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::UnknownChecklistItem(s.to_string()))
    }
}

fn humanize_key(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Groups of three checklist items shown as one block each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Preparation,
    Development,
    Application,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Preparation, Phase::Development, Phase::Application];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Phase::Preparation => "Preparation Phase",
            Phase::Development => "Development Phase",
            Phase::Application => "Application Phase",
        }
    }

    #[must_use]
    pub fn items(self) -> [ChecklistItem; 3] {
        match self {
            Phase::Preparation => [
                ChecklistItem::ReviewResume,
                ChecklistItem::UpdateLinkedIn,
                ChecklistItem::CompleteSkillsAssessment,
            ],
            Phase::Development => [
                ChecklistItem::StartLearningPath,
                ChecklistItem::NetworkWithPMs,
                ChecklistItem::BeginSideProject,
            ],
            Phase::Application => [
                ChecklistItem::PrepareInterviewStories,
                ChecklistItem::CreatePortfolio,
                ChecklistItem::ApplyToJobs,
            ],
        }
    }
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Completion flag for every checklist item. All flags start cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChecklistProgress {
    done: [bool; ChecklistItem::COUNT],
}

impl ChecklistProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_done(&self, item: ChecklistItem) -> bool {
        self.done[item.index()]
    }

    /// Flips the flag for `item` and returns its new value.
    pub fn toggle(&mut self, item: ChecklistItem) -> bool {
        let flag = &mut self.done[item.index()];
        *flag = !*flag;
        *flag
    }

    /// Items paired with their flags, in action-plan order.
    pub fn iter(&self) -> impl Iterator<Item = (ChecklistItem, bool)> + '_ {
        ChecklistItem::ALL
            .into_iter()
            .map(|item| (item, self.is_done(item)))
    }

    #[must_use]
    pub fn ratio(&self) -> CompletionRatio {
        let done = self.done.iter().filter(|flag| **flag).count();
        CompletionRatio::new(done as u32, ChecklistItem::COUNT as u32)
    }
}

impl Serialize for ChecklistProgress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ChecklistItem::COUNT))?;
        for (item, done) in self.iter() {
            map.serialize_entry(item.key(), &done)?;
        }
        map.end()
    }
}

/// Count of completed checklist items over the fixed total.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionRatio {
    pub done: u32,
    pub total: u32,
}

impl CompletionRatio {
    #[must_use]
    pub fn new(done: u32, total: u32) -> Self {
        Self { done, total }
    }

    /// Completion in percent, in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.done) / f64::from(self.total) * 100.0
    }
}

impl fmt::Display for CompletionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.done, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_split_on_upper_case_letters() {
        assert_eq!(ChecklistItem::ReviewResume.label(), "Review Resume");
        assert_eq!(
            ChecklistItem::CompleteSkillsAssessment.label(),
            "Complete Skills Assessment"
        );
        assert_eq!(ChecklistItem::UpdateLinkedIn.label(), "Update Linked In");
        assert_eq!(ChecklistItem::NetworkWithPMs.label(), "Network With P Ms");
    }

    #[test]
    fn phases_cover_every_item_once_in_order() {
        let flattened: Vec<ChecklistItem> =
            Phase::ALL.into_iter().flat_map(Phase::items).collect();
        assert_eq!(flattened, ChecklistItem::ALL.to_vec());
        for phase in Phase::ALL {
            for item in phase.items() {
                assert_eq!(item.phase(), phase);
            }
        }
    }

    #[test]
    fn keys_parse_back_to_items() {
        for item in ChecklistItem::ALL {
            assert_eq!(item.key().parse::<ChecklistItem>(), Ok(item));
        }
        assert!(matches!(
            "walkTheDog".parse::<ChecklistItem>(),
            Err(Error::UnknownChecklistItem(_))
        ));
    }

    #[test]
    fn toggle_flips_only_the_given_item() {
        let mut progress = ChecklistProgress::new();
        assert!(progress.toggle(ChecklistItem::BeginSideProject));
        for (item, done) in progress.iter() {
            assert_eq!(done, item == ChecklistItem::BeginSideProject);
        }
        assert!(!progress.toggle(ChecklistItem::BeginSideProject));
        assert_eq!(progress, ChecklistProgress::new());
    }

    #[test]
    fn ratio_counts_done_items() {
        let mut progress = ChecklistProgress::new();
        assert_eq!(progress.ratio(), CompletionRatio::new(0, 9));
        progress.toggle(ChecklistItem::ApplyToJobs);
        progress.toggle(ChecklistItem::CreatePortfolio);
        progress.toggle(ChecklistItem::ReviewResume);
        let ratio = progress.ratio();
        assert_eq!(ratio, CompletionRatio::new(3, 9));
        assert!((ratio.percent() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(ratio.to_string(), "3 of 9");
    }

    #[test]
    fn progress_serializes_as_key_map() {
        let mut progress = ChecklistProgress::new();
        progress.toggle(ChecklistItem::NetworkWithPMs);
        let value = serde_json::to_value(progress).unwrap();
        assert_eq!(value["networkWithPMs"], serde_json::Value::Bool(true));
        assert_eq!(value["reviewResume"], serde_json::Value::Bool(false));
        assert_eq!(value.as_object().unwrap().len(), ChecklistItem::COUNT);
    }
}
