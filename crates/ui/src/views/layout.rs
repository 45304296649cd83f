use dioxus::prelude::*;

#[component]
pub(super) fn PageHeader() -> Element {
    rsx! {
        header { class: "roadmap-header",
            h1 { "Career Roadmap" }
            p { "Your personalized path to professional success" }
        }
    }
}

#[component]
pub(super) fn PageFooter() -> Element {
    rsx! {
        footer { class: "roadmap-footer",
            p { "Made with ❤️ for your career journey" }
            p { class: "roadmap-footer__updated", "Last updated: April 2025" }
        }
    }
}
