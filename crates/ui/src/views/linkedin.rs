use dioxus::prelude::*;
use roadmap_core::Tab;

use super::icons::{LightbulbIcon, PlusIcon};
use super::panel::PanelCard;

const CONTENT_IDEAS: [&str; 3] = [
    "Share industry insights",
    "Document learning journey",
    "Create how-to content",
];

const TARGET_GROUPS: [&str; 3] = ["Industry leaders", "Hiring managers", "Peers in target role"];

#[component]
pub(super) fn LinkedinPanel() -> Element {
    rsx! {
        PanelCard { tab: Tab::Linkedin,
            div { class: "linkedin-sections",
                div { class: "linkedin-card linkedin-card--profile",
                    h3 { "Profile Optimization" }
                    ProfileField {
                        title: "Headline",
                        hint: "Your headline should clearly communicate your career aspirations.",
                        placeholder: "Enter your optimized headline...",
                    }
                    ProfileField {
                        title: "About Section",
                        hint: "Tell your career story and highlight your transition journey.",
                        placeholder: "Enter your about section content...",
                    }
                    div { class: "profile-field",
                        h4 { "Featured Section" }
                        p { "Showcase projects and content relevant to your target role." }
                        button { class: "add-button", r#type: "button",
                            PlusIcon {}
                            span { "Add featured item" }
                        }
                    }
                }
                div { class: "linkedin-card linkedin-card--content",
                    h3 { "Content Strategy" }
                    p { "Plan regular content posts to establish yourself in your target field." }
                    for idea in CONTENT_IDEAS {
                        div { key: "{idea}", class: "idea-row",
                            span { class: "idea-row__icon",
                                LightbulbIcon {}
                            }
                            div {
                                h4 { "{idea}" }
                                p { "Add specific post ideas and schedule..." }
                            }
                        }
                    }
                }
                div { class: "linkedin-card linkedin-card--network",
                    h3 { "Networking Plan" }
                    p { "Identify and connect with professionals in your target field." }
                    div { class: "profile-field",
                        h4 { "Target Connections" }
                        div { class: "target-grid",
                            for target in TARGET_GROUPS {
                                div { key: "{target}", class: "target-card",
                                    p { class: "target-card__title", "{target}" }
                                    p { "Add specific names and connection strategies..." }
                                }
                            }
                            button { class: "add-button", r#type: "button",
                                PlusIcon {}
                                span { "Add target group" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileField(title: &'static str, hint: &'static str, placeholder: &'static str) -> Element {
    rsx! {
        div { class: "profile-field",
            h4 { "{title}" }
            p { "{hint}" }
            div { class: "placeholder", "{placeholder}" }
        }
    }
}
