pub mod error;
pub mod model;
pub mod state;

pub use error::Error;
pub use model::{ChecklistItem, ChecklistProgress, CompletionRatio, Phase, SkillCategory, Tab};
pub use state::RoadmapState;
