use dioxus::prelude::*;
use roadmap_core::Tab;

use super::icons::PlusIcon;
use super::panel::PanelCard;

#[component]
pub(super) fn ProjectsPanel() -> Element {
    rsx! {
        PanelCard { tab: Tab::Projects,
            p { class: "panel__lead", "Create projects that showcase the skills relevant to your target role." }
            div { class: "project-grid",
                for project in 1..=4 {
                    ProjectCard { key: "{project}", number: project }
                }
                div { class: "project-card project-card--new",
                    button { class: "add-button add-button--large", r#type: "button",
                        PlusIcon {}
                        span { "Add New Project" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(number: u32) -> Element {
    rsx! {
        div { class: "project-card",
            div { class: "project-card__banner", "PROJECT {number}" }
            div { class: "project-card__body",
                h3 { "Project Title" }
                div { class: "chips",
                    span { class: "chip chip--blue", "Skill 1" }
                    span { class: "chip chip--purple", "Skill 2" }
                    span { class: "chip chip--indigo", "Skill 3" }
                }
                p { "Brief description of the project and its relevance to your career goals..." }
                div { class: "project-card__footer",
                    div { class: "project-card__status",
                        "Status: "
                        span { class: "status status--in-progress", "In Progress" }
                    }
                    button { class: "link-button", r#type: "button", "Edit Details" }
                }
            }
        }
    }
}
