use roadmap_core::{RoadmapState, Tab};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabButtonVm {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

#[must_use]
pub fn map_tab_buttons(state: &RoadmapState) -> Vec<TabButtonVm> {
    let active = state.active_tab();
    Tab::ALL
        .into_iter()
        .map(|tab| TabButtonVm {
            tab,
            label: tab.label(),
            active: tab == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_button_is_active() {
        let state = RoadmapState::with_active_tab(Tab::Learning);
        let buttons = map_tab_buttons(&state);
        assert_eq!(buttons.len(), 6);
        let active: Vec<_> = buttons.iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, Tab::Learning);
        assert_eq!(buttons[0].label, "Overview");
    }
}
