use dioxus::prelude::*;
use roadmap_core::Tab;

#[component]
pub(super) fn TabIcon(tab: Tab) -> Element {
    let path = match tab {
        Tab::Overview => "M4 20V10M10 20V4M16 20v-6M22 20H2",
        Tab::Skills => "M12 15a6 6 0 1 0 0-12 6 6 0 0 0 0 12zM8.2 13.9 7 22l5-3 5 3-1.2-8.1",
        Tab::Learning => "M2 4h7a3 3 0 0 1 3 3v13a2 2 0 0 0-2-2H2zM22 4h-7a3 3 0 0 0-3 3v13a2 2 0 0 1 2-2h8z",
        Tab::Projects => "M16 18l6-6-6-6M8 6l-6 6 6 6",
        Tab::Linkedin => "M4 9h4v11H4zM6 4a2 2 0 1 1 0 4 2 2 0 0 1 0-4zM12 9h4v2a4 4 0 0 1 6 3v6h-4v-6a2 2 0 0 0-4 0v6h-4z",
        Tab::Checklist => "M22 11.1V12a10 10 0 1 1-5.9-9.1M22 4 12 14l-3-3",
    };
    rsx! {
        Icon { path }
    }
}

#[component]
pub(super) fn PlusIcon() -> Element {
    rsx! {
        Icon { path: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 8v8M8 12h8" }
    }
}

#[component]
pub(super) fn CheckIcon() -> Element {
    rsx! {
        Icon { path: "M20 6 9 17l-5-5" }
    }
}

#[component]
pub(super) fn LightbulbIcon() -> Element {
    rsx! {
        Icon { path: "M9 18h6M10 22h4M12 2a7 7 0 0 0-4 12.7V16h8v-1.3A7 7 0 0 0 12 2z" }
    }
}

#[component]
pub(super) fn TrashIcon() -> Element {
    rsx! {
        Icon { path: "M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6" }
    }
}

#[component]
fn Icon(path: &'static str) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.8",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: path }
        }
    }
}
