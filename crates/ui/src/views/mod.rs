mod actions;
mod checklist;
mod icons;
mod layout;
mod learning;
mod linkedin;
mod nav;
mod overview;
mod page;
mod panel;
mod projects;
mod skills;

pub use actions::{RoadmapDispatcher, use_roadmap_dispatcher};
pub use page::RoadmapPage;
pub use panel::TabPanel;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
