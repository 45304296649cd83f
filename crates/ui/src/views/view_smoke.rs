use roadmap_core::{ChecklistItem, CompletionRatio, RoadmapState, SkillCategory, Tab};

use crate::vm::RoadmapIntent;

use super::test_harness::setup_page_harness;

fn panel_marker(tab: Tab) -> String {
    format!("class=\"panel panel--{}\"", tab.id())
}

fn assert_only_panel(html: &str, shown: Tab) {
    for tab in Tab::ALL {
        let marker = panel_marker(tab);
        if tab == shown {
            assert!(html.contains(&marker), "missing {marker} in {html}");
        } else {
            assert!(!html.contains(&marker), "unexpected {marker} in {html}");
        }
    }
}

#[test]
fn initial_render_shows_overview_only() {
    let harness = setup_page_harness(RoadmapState::new());
    let html = harness.render();
    assert_only_panel(&html, Tab::Overview);
    assert_eq!(html.matches("tab-button--active").count(), 1);
    assert!(html.contains("Milestone 3"), "missing timeline in {html}");
    assert_eq!(harness.state().completion_ratio(), CompletionRatio::new(0, 9));
}

#[test]
fn configured_start_tab_is_rendered() {
    let harness = setup_page_harness(RoadmapState::with_active_tab(Tab::Linkedin));
    let html = harness.render();
    assert_only_panel(&html, Tab::Linkedin);
    assert!(html.contains("Add target group"), "missing networking plan in {html}");
}

#[test]
fn selecting_each_tab_shows_exactly_that_panel() {
    let mut harness = setup_page_harness(RoadmapState::new());
    for tab in Tab::ALL {
        harness.dispatch(RoadmapIntent::SelectTab(tab));
        assert_eq!(harness.state().active_tab(), tab);
        assert_only_panel(&harness.render(), tab);
    }
}

#[test]
fn skills_accordion_keeps_one_section_open() {
    let mut harness = setup_page_harness(RoadmapState::with_active_tab(Tab::Skills));
    let html = harness.render();
    assert!(html.contains("Technical Skills"), "missing category in {html}");
    assert!(!html.contains("Add skill"), "collapsed section rendered body in {html}");

    harness.dispatch(RoadmapIntent::ToggleSection(SkillCategory::Technical));
    let html = harness.render();
    assert_eq!(html.matches("Add skill").count(), 1);
    assert!(html.contains("Skill Example 2"), "missing skill rows in {html}");

    harness.dispatch(RoadmapIntent::ToggleSection(SkillCategory::Soft));
    let html = harness.render();
    assert_eq!(html.matches("Add skill").count(), 1);
    assert_eq!(harness.state().expanded_section(), Some(SkillCategory::Soft));

    harness.dispatch(RoadmapIntent::ToggleSection(SkillCategory::Soft));
    let html = harness.render();
    assert!(!html.contains("Add skill"), "section did not collapse in {html}");
}

#[test]
fn checklist_progress_follows_toggles() {
    let mut harness = setup_page_harness(RoadmapState::with_active_tab(Tab::Checklist));
    let html = harness.render();
    assert!(html.contains("0 of 9 tasks complete"), "missing ratio in {html}");
    assert!(html.contains("Network With P Ms"), "missing item label in {html}");

    harness.dispatch(RoadmapIntent::ToggleChecklistItem(ChecklistItem::ReviewResume));
    harness.dispatch(RoadmapIntent::ToggleChecklistItem(ChecklistItem::UpdateLinkedIn));
    let html = harness.render();
    assert!(html.contains("2 of 9 tasks complete"), "missing ratio in {html}");
    assert_eq!(html.matches("checklist-row--done").count(), 2);

    harness.dispatch(RoadmapIntent::ToggleChecklistItem(ChecklistItem::ReviewResume));
    let html = harness.render();
    assert!(html.contains("1 of 9 tasks complete"), "missing ratio in {html}");
    assert_eq!(harness.state().completion_ratio(), CompletionRatio::new(1, 9));
}

#[test]
fn checklist_survives_tab_switches() {
    let mut harness = setup_page_harness(RoadmapState::with_active_tab(Tab::Checklist));
    harness.dispatch(RoadmapIntent::ToggleChecklistItem(ChecklistItem::ApplyToJobs));
    harness.dispatch(RoadmapIntent::SelectTab(Tab::Projects));
    assert_only_panel(&harness.render(), Tab::Projects);
    harness.dispatch(RoadmapIntent::SelectTab(Tab::Checklist));
    let html = harness.render();
    assert!(html.contains("1 of 9 tasks complete"), "missing ratio in {html}");
}

#[test]
fn learning_panel_lists_resource_examples() {
    let harness = setup_page_harness(RoadmapState::with_active_tab(Tab::Learning));
    let html = harness.render();
    assert!(html.contains("Example Course 1"), "missing course in {html}");
    assert!(html.contains("Example Podcast 2"), "missing podcast in {html}");
    assert!(html.contains("Add book"), "missing add button in {html}");
    assert_eq!(html.matches("type=\"checkbox\"").count(), 8);
}
