use std::sync::Arc;

use roadmap_core::RoadmapState;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn window_title(&self) -> String;

    /// State the page starts from. A fresh launch always begins here; nothing
    /// is carried over between runs.
    fn initial_state(&self) -> RoadmapState;
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    window_title: String,
    initial_state: RoadmapState,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            window_title: app.window_title(),
            initial_state: app.initial_state(),
        }
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn initial_state(&self) -> RoadmapState {
        self.initial_state
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
