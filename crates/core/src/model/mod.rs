mod checklist;
mod section;
mod tab;

pub use checklist::{ChecklistItem, ChecklistProgress, CompletionRatio, Phase};
pub use section::SkillCategory;
pub use tab::Tab;
