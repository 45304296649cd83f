use roadmap_core::{RoadmapState, SkillCategory};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCategoryVm {
    pub category: SkillCategory,
    pub label: &'static str,
    pub expanded: bool,
}

#[must_use]
pub fn map_skill_categories(state: &RoadmapState) -> Vec<SkillCategoryVm> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| SkillCategoryVm {
            category,
            label: category.label(),
            expanded: state.is_expanded(category),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillExampleVm {
    pub name: String,
    pub level_percent: u32,
    pub bar_style: String,
}

/// Placeholder skills shown inside an expanded category.
#[must_use]
pub fn skill_examples() -> Vec<SkillExampleVm> {
    (1..=3)
        .map(|n| {
            let level_percent = n * 25;
            SkillExampleVm {
                name: format!("Skill Example {n}"),
                level_percent,
                bar_style: format!("width: {level_percent}%"),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceTypeVm {
    pub title: &'static str,
    pub entries: Vec<String>,
    pub add_label: String,
}

impl ResourceTypeVm {
    fn new(title: &'static str) -> Self {
        let singular = title.strip_suffix('s').unwrap_or(title);
        Self {
            title,
            entries: (1..=2).map(|n| format!("Example {singular} {n}")).collect(),
            add_label: format!("Add {}", singular.to_lowercase()),
        }
    }
}

#[must_use]
pub fn learning_resource_types() -> Vec<ResourceTypeVm> {
    ["Courses", "Books", "Podcasts", "Communities"]
        .into_iter()
        .map(ResourceTypeVm::new)
        .collect()
}
