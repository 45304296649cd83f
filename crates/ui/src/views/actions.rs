use dioxus::prelude::*;
use roadmap_core::RoadmapState;

use crate::vm::{RoadmapIntent, apply_intent};

#[derive(Clone, Copy)]
pub struct RoadmapDispatcher {
    pub dispatch: Callback<RoadmapIntent>,
}

/// Routes every interaction on the page through one callback that owns the
/// write to `state`.
pub fn use_roadmap_dispatcher(state: Signal<RoadmapState>) -> RoadmapDispatcher {
    let mut state = state;
    let dispatch = use_callback(move |intent: RoadmapIntent| {
        tracing::debug!(?intent, "roadmap intent");
        let mut current = state.write();
        apply_intent(&mut current, intent);
        let ratio = current.completion_ratio();
        tracing::debug!(
            tab = %current.active_tab(),
            expanded = ?current.expanded_section(),
            done = ratio.done,
            total = ratio.total,
            "roadmap state updated"
        );
    });
    RoadmapDispatcher { dispatch }
}
