use std::sync::Arc;

use dioxus::prelude::*;
use roadmap_core::RoadmapState;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::RoadmapPage;

struct StaticApp {
    state: RoadmapState,
}

impl UiApp for StaticApp {
    fn window_title(&self) -> String {
        "Career Roadmap".to_string()
    }

    fn initial_state(&self) -> RoadmapState {
        self.state
    }
}

#[component]
fn StaticRoot(ctx: AppContext) -> Element {
    use_context_provider(|| ctx);
    rsx! { RoadmapPage {} }
}

/// Renders the page body for `state` to an HTML string.
#[must_use]
pub fn render_static(state: &RoadmapState) -> String {
    let app: Arc<dyn UiApp> = Arc::new(StaticApp { state: *state });
    let mut dom = VirtualDom::new_with_props(
        StaticRoot,
        StaticRootProps {
            ctx: build_app_context(&app),
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[cfg(test)]
mod tests {
    use roadmap_core::{ChecklistItem, SkillCategory, Tab};

    use super::*;

    #[test]
    fn renders_header_and_footer_for_default_state() {
        let html = render_static(&RoadmapState::new());
        assert!(html.contains("Career Roadmap"), "missing title in {html}");
        assert!(html.contains("Last updated: April 2025"), "missing footer in {html}");
        assert!(html.contains("Career Journey Overview"), "missing overview in {html}");
    }

    #[test]
    fn renders_given_state_not_defaults() {
        let mut state = RoadmapState::with_active_tab(Tab::Checklist);
        state.toggle_checklist_item(ChecklistItem::ApplyToJobs);
        state.toggle_expanded(SkillCategory::Soft);
        let html = render_static(&state);
        assert!(html.contains("1 of 9 tasks complete"), "missing ratio in {html}");
        assert!(!html.contains("Soft Skills"), "skills panel leaked into {html}");
    }
}
