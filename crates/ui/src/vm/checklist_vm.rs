use roadmap_core::{ChecklistItem, ChecklistProgress, CompletionRatio, Phase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistRowVm {
    pub item: ChecklistItem,
    pub label: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseVm {
    pub title: &'static str,
    pub rows: Vec<ChecklistRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub bar_style: String,
    pub summary: String,
}

impl From<CompletionRatio> for ProgressVm {
    fn from(ratio: CompletionRatio) -> Self {
        let percent = ratio.percent();
        Self {
            bar_style: format!("width: {percent}%"),
            summary: format!("{ratio} tasks complete"),
        }
    }
}

#[must_use]
pub fn map_checklist_phases(progress: &ChecklistProgress) -> Vec<PhaseVm> {
    Phase::ALL
        .into_iter()
        .map(|phase| PhaseVm {
            title: phase.title(),
            rows: phase
                .items()
                .into_iter()
                .map(|item| ChecklistRowVm {
                    item,
                    label: item.label(),
                    done: progress.is_done(item),
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub fn map_progress(progress: &ChecklistProgress) -> ProgressVm {
    ProgressVm::from(progress.ratio())
}
