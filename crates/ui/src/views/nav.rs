use dioxus::prelude::*;
use roadmap_core::Tab;

use crate::vm::TabButtonVm;

use super::icons::TabIcon;

#[component]
pub(super) fn TabBar(tabs: Vec<TabButtonVm>, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "tab-bar",
            for vm in tabs {
                TabButton {
                    key: "{vm.tab.id()}",
                    tab: vm.tab,
                    label: vm.label,
                    active: vm.active,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab, label: &'static str, active: bool, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        button {
            class: if active { "tab-button tab-button--active" } else { "tab-button" },
            r#type: "button",
            onclick: move |_| on_select.call(tab),
            span { class: "tab-button__icon",
                TabIcon { tab }
            }
            span { class: "tab-button__label", "{label}" }
        }
    }
}
