pub mod classifier;
pub mod handlers;

pub use classifier::{split_skills, SkillBuckets, SkillKind};
