use roadmap_core::{ChecklistItem, RoadmapState, SkillCategory, Tab};

/// A single user interaction with the roadmap page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadmapIntent {
    SelectTab(Tab),
    ToggleSection(SkillCategory),
    ToggleChecklistItem(ChecklistItem),
}

pub fn apply_intent(state: &mut RoadmapState, intent: RoadmapIntent) {
    match intent {
        RoadmapIntent::SelectTab(tab) => state.select_tab(tab),
        RoadmapIntent::ToggleSection(section) => state.toggle_expanded(section),
        RoadmapIntent::ToggleChecklistItem(item) => {
            state.toggle_checklist_item(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_route_to_state_transitions() {
        let mut state = RoadmapState::new();
        apply_intent(&mut state, RoadmapIntent::SelectTab(Tab::Skills));
        apply_intent(&mut state, RoadmapIntent::ToggleSection(SkillCategory::Technical));
        apply_intent(
            &mut state,
            RoadmapIntent::ToggleChecklistItem(ChecklistItem::CreatePortfolio),
        );

        assert_eq!(state.active_tab(), Tab::Skills);
        assert_eq!(state.expanded_section(), Some(SkillCategory::Technical));
        assert!(state.is_done(ChecklistItem::CreatePortfolio));
        assert_eq!(state.completion_ratio().done, 1);
    }
}
