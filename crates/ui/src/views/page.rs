use dioxus::prelude::*;
use roadmap_core::Tab;

use crate::context::AppContext;
use crate::vm::{RoadmapIntent, map_tab_buttons};

use super::actions::use_roadmap_dispatcher;
use super::layout::{PageFooter, PageHeader};
use super::nav::TabBar;
use super::panel::TabPanel;

#[cfg(test)]
use roadmap_core::RoadmapState;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole roadmap page: header, tab bar, the active panel, footer.
#[component]
pub fn RoadmapPage() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_signal(|| ctx.initial_state());
    let dispatcher = use_roadmap_dispatcher(state);
    let dispatch = dispatcher.dispatch;

    #[cfg(test)]
    use_hook(|| {
        if let Some(handles) = try_consume_context::<RoadmapTestHandles>() {
            handles.register(dispatch, state);
        }
    });

    let current = state();
    let tabs = map_tab_buttons(&current);

    rsx! {
        div { class: "roadmap",
            PageHeader {}
            TabBar {
                tabs,
                on_select: move |tab: Tab| dispatch.call(RoadmapIntent::SelectTab(tab)),
            }
            main { class: "roadmap-main",
                TabPanel { state: current, dispatch }
            }
            PageFooter {}
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RoadmapTestHandles {
    dispatch: Rc<RefCell<Option<Callback<RoadmapIntent>>>>,
    state: Rc<RefCell<Option<Signal<RoadmapState>>>>,
}

#[cfg(test)]
impl RoadmapTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<RoadmapIntent>, state: Signal<RoadmapState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<RoadmapIntent> {
        (*self.dispatch.borrow()).expect("roadmap dispatch registered")
    }

    pub(crate) fn state(&self) -> Signal<RoadmapState> {
        (*self.state.borrow()).expect("roadmap state registered")
    }
}
