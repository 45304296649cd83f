use dioxus::prelude::*;
use roadmap_core::{ChecklistItem, RoadmapState, Tab};

use crate::vm::{
    ChecklistRowVm, PhaseVm, ProgressVm, RoadmapIntent, map_checklist_phases, map_progress,
};

use super::icons::{CheckIcon, LightbulbIcon};
use super::panel::PanelCard;

#[component]
pub(super) fn ChecklistPanel(state: RoadmapState, dispatch: Callback<RoadmapIntent>) -> Element {
    let phases = map_checklist_phases(state.progress());
    let progress = map_progress(state.progress());
    let on_toggle = move |item: ChecklistItem| dispatch.call(RoadmapIntent::ToggleChecklistItem(item));

    rsx! {
        PanelCard { tab: Tab::Checklist,
            div { class: "phases",
                for phase in phases {
                    PhaseBlock { key: "{phase.title}", phase: phase.clone(), on_toggle }
                }
                CompletionProgress { progress }
            }
        }
    }
}

#[component]
fn PhaseBlock(phase: PhaseVm, on_toggle: EventHandler<ChecklistItem>) -> Element {
    rsx! {
        div { class: "phase",
            div { class: "phase__header",
                h3 { "{phase.title}" }
            }
            div { class: "phase__rows",
                for row in phase.rows {
                    ChecklistRow { key: "{row.item.key()}", row: row.clone(), on_toggle }
                }
            }
        }
    }
}

#[component]
fn ChecklistRow(row: ChecklistRowVm, on_toggle: EventHandler<ChecklistItem>) -> Element {
    let item = row.item;
    rsx! {
        div {
            class: if row.done { "checklist-row checklist-row--done" } else { "checklist-row" },
            button {
                class: if row.done { "check-toggle check-toggle--on" } else { "check-toggle" },
                r#type: "button",
                onclick: move |_| on_toggle.call(item),
                if row.done {
                    CheckIcon {}
                }
            }
            div { class: "checklist-row__body",
                h4 { "{row.label}" }
                p { "Add details, deadline, and notes..." }
            }
        }
    }
}

#[component]
fn CompletionProgress(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "completion",
            div { class: "completion__header",
                LightbulbIcon {}
                h3 { "Completion Progress" }
            }
            div { class: "completion__track",
                div { class: "completion__fill", style: "{progress.bar_style}" }
            }
            div { class: "completion__summary", "{progress.summary}" }
        }
    }
}
