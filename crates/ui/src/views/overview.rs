use dioxus::prelude::*;
use roadmap_core::Tab;

use super::icons::PlusIcon;
use super::panel::PanelCard;

#[component]
pub(super) fn OverviewPanel() -> Element {
    rsx! {
        PanelCard { tab: Tab::Overview,
            div { class: "overview-grid",
                div { class: "overview-card overview-card--current",
                    h3 { "Current Position" }
                    p { "Enter details about your current role, responsibilities, and the skills you've developed." }
                    div { class: "placeholder",
                        p { "Add your current position details..." }
                    }
                }
                div { class: "overview-card overview-card--target",
                    h3 { "Target Role" }
                    p { "Define the role you're aiming for, including title, responsibilities, and industry." }
                    div { class: "placeholder",
                        p { "Add your target role details..." }
                    }
                }
                div { class: "overview-card overview-card--timeline",
                    h3 { "Journey Timeline" }
                    p { "Create a timeline with key milestones to track your progress." }
                    div { class: "timeline",
                        for step in 1..=3 {
                            div { key: "{step}", class: "timeline__step",
                                span { class: "timeline__dot" }
                                div { class: "timeline__body",
                                    h4 { "Milestone {step}" }
                                    p { "Add description, target date, and success metrics..." }
                                }
                            }
                        }
                        button { class: "add-button", r#type: "button",
                            PlusIcon {}
                            span { "Add milestone" }
                        }
                    }
                }
            }
        }
    }
}
