use dioxus::prelude::*;
use roadmap_core::{RoadmapState, SkillCategory, Tab};

use crate::vm::{RoadmapIntent, SkillExampleVm, map_skill_categories, skill_examples};

use super::icons::{PlusIcon, TrashIcon};
use super::panel::PanelCard;

#[component]
pub(super) fn SkillsPanel(state: RoadmapState, dispatch: Callback<RoadmapIntent>) -> Element {
    let categories = map_skill_categories(&state);
    rsx! {
        PanelCard { tab: Tab::Skills,
            div { class: "accordion",
                for vm in categories {
                    SkillAccordionSection {
                        key: "{vm.category.id()}",
                        category: vm.category,
                        label: vm.label,
                        expanded: vm.expanded,
                        on_toggle: move |category: SkillCategory| dispatch.call(RoadmapIntent::ToggleSection(category)),
                    }
                }
            }
        }
    }
}

#[component]
fn SkillAccordionSection(
    category: SkillCategory,
    label: &'static str,
    expanded: bool,
    on_toggle: EventHandler<SkillCategory>,
) -> Element {
    rsx! {
        div { class: "accordion-section", id: "skills-{category.id()}",
            button {
                class: if expanded {
                    "accordion-header accordion-header--open"
                } else {
                    "accordion-header"
                },
                r#type: "button",
                onclick: move |_| on_toggle.call(category),
                h3 { "{label}" }
                span { class: if expanded { "caret caret--open" } else { "caret" } }
            }
            if expanded {
                div { class: "accordion-body",
                    div { class: "accordion-body__intro",
                        p { "Rate your proficiency and identify skills to develop for your target role." }
                        button { class: "add-button", r#type: "button",
                            PlusIcon {}
                            span { "Add skill" }
                        }
                    }
                    for skill in skill_examples() {
                        SkillRow { key: "{skill.name}", skill: skill.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillRow(skill: SkillExampleVm) -> Element {
    rsx! {
        div { class: "skill-row",
            div { class: "skill-row__main",
                h4 { "{skill.name}" }
                div { class: "skill-row__meter",
                    div { class: "meter",
                        div { class: "meter__fill", style: "{skill.bar_style}" }
                    }
                    span { class: "skill-row__level", "{skill.level_percent}%" }
                }
            }
            button { class: "icon-button", r#type: "button",
                TrashIcon {}
            }
            p { class: "skill-row__notes", "Notes on current level and improvement plans..." }
        }
    }
}
