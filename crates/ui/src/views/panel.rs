use dioxus::prelude::*;
use roadmap_core::{RoadmapState, Tab};

use crate::vm::RoadmapIntent;

use super::checklist::ChecklistPanel;
use super::icons::TabIcon;
use super::learning::LearningPanel;
use super::linkedin::LinkedinPanel;
use super::overview::OverviewPanel;
use super::projects::ProjectsPanel;
use super::skills::SkillsPanel;

/// Renders exactly the panel for the active tab.
#[component]
pub fn TabPanel(state: RoadmapState, dispatch: Callback<RoadmapIntent>) -> Element {
    match state.active_tab() {
        Tab::Overview => rsx! { OverviewPanel {} },
        Tab::Skills => rsx! { SkillsPanel { state, dispatch } },
        Tab::Learning => rsx! { LearningPanel {} },
        Tab::Projects => rsx! { ProjectsPanel {} },
        Tab::Linkedin => rsx! { LinkedinPanel {} },
        Tab::Checklist => rsx! { ChecklistPanel { state, dispatch } },
    }
}

#[component]
pub(super) fn PanelCard(tab: Tab, children: Element) -> Element {
    rsx! {
        section { class: "panel panel--{tab.id()}",
            div { class: "panel__heading",
                span { class: "panel__icon",
                    TabIcon { tab }
                }
                h2 { "{tab.heading()}" }
            }
            {children}
        }
    }
}
