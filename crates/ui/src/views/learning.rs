use dioxus::prelude::*;
use roadmap_core::Tab;

use crate::vm::{ResourceTypeVm, learning_resource_types};

use super::icons::PlusIcon;
use super::panel::PanelCard;

#[component]
pub(super) fn LearningPanel() -> Element {
    rsx! {
        PanelCard { tab: Tab::Learning,
            div { class: "resource-grid",
                for resource in learning_resource_types() {
                    ResourceCard { key: "{resource.title}", resource: resource.clone() }
                }
            }
        }
    }
}

// Checkboxes here are uncontrolled; only the action plan is tracked.
#[component]
fn ResourceCard(resource: ResourceTypeVm) -> Element {
    rsx! {
        div { class: "resource-card",
            h3 { "{resource.title}" }
            p { "Track your learning materials and progress." }
            div { class: "resource-card__entries",
                for entry in resource.entries.iter() {
                    div { key: "{entry}", class: "resource-entry",
                        input { r#type: "checkbox", class: "resource-entry__check" }
                        div { class: "resource-entry__body",
                            h4 { "{entry}" }
                            p { "Brief description and notes..." }
                        }
                    }
                }
                button { class: "add-button", r#type: "button",
                    PlusIcon {}
                    span { "{resource.add_label}" }
                }
            }
        }
    }
}
