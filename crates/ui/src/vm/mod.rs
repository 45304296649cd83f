mod checklist_vm;
mod content_vm;
mod intent;
mod tab_vm;

pub use checklist_vm::{
    ChecklistRowVm, PhaseVm, ProgressVm, map_checklist_phases, map_progress,
};
pub use content_vm::{
    ResourceTypeVm, SkillCategoryVm, SkillExampleVm, learning_resource_types,
    map_skill_categories, skill_examples,
};
pub use intent::{RoadmapIntent, apply_intent};
pub use tab_vm::{TabButtonVm, map_tab_buttons};
