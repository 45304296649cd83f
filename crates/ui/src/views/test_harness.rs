use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use roadmap_core::RoadmapState;

use crate::context::{UiApp, build_app_context};
use crate::vm::RoadmapIntent;

use super::RoadmapPage;
use super::page::RoadmapTestHandles;

struct TestApp {
    initial_state: RoadmapState,
}

impl UiApp for TestApp {
    fn window_title(&self) -> String {
        "Career Roadmap".to_string()
    }

    fn initial_state(&self) -> RoadmapState {
        self.initial_state
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    initial_state: RoadmapState,
    handles: RoadmapTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn RoadmapPageHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        initial_state: props.initial_state,
    });
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { RoadmapPage {} }
}

pub struct PageHarness {
    pub dom: VirtualDom,
    handles: RoadmapTestHandles,
}

impl PageHarness {
    /// Sends `intent` through the page's dispatcher and re-renders.
    pub fn dispatch(&mut self, intent: RoadmapIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn state(&self) -> RoadmapState {
        let state = self.handles.state();
        self.dom.in_runtime(|| *state.peek())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_page_harness(initial_state: RoadmapState) -> PageHarness {
    let handles = RoadmapTestHandles::default();
    let mut dom = VirtualDom::new_with_props(
        RoadmapPageHarness,
        HarnessProps {
            initial_state,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    PageHarness { dom, handles }
}
