//! Skill classifier — splits free-text skills into technical and soft buckets.
//!
//! A skill is technical when it contains one of the keywords below or is itself
//! contained in one (so "Git" matches "github"). Keywords are chosen so they do
//! not occur inside common soft-skill words ("rustlang" rather than "rust",
//! which would hit "trustworthy").

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Technical,
    Soft,
}

impl SkillKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillKind::Technical => "technical",
            SkillKind::Soft => "soft",
        }
    }

    pub fn from_db(value: &str) -> Self {
        if value == SkillKind::Technical.as_str() {
            SkillKind::Technical
        } else {
            SkillKind::Soft
        }
    }
}

const TECHNICAL_KEYWORDS: &[&str] = &[
    // languages
    "javascript",
    "typescript",
    "python",
    "java",
    "kotlin",
    "swift",
    "rustlang",
    "golang",
    "c++",
    "c#",
    ".net",
    "php",
    "ruby",
    "scala",
    "solidity",
    "matlab",
    "html",
    "css",
    "sass",
    "sql",
    "bash",
    // frameworks and libraries
    "react",
    "react native",
    "angular",
    "vue",
    "svelte",
    "next.js",
    "tailwind",
    "node.js",
    "express.js",
    "django",
    "flask",
    "spring boot",
    "laravel",
    "flutter",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
    "jest",
    "cypress",
    "selenium",
    "webpack",
    "graphql",
    "rest api",
    // platforms, data stores and tools
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "firebase",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "terraform",
    "ansible",
    "jenkins",
    "linux",
    "github",
    "gitlab",
    "android",
    "ios",
    "unity engine",
    "hadoop",
    "spark",
    "kafka",
    "tableau",
    "power bi",
    "microsoft excel",
    "figma",
    "photoshop",
    "illustrator",
    "blockchain",
    "seo",
    // methods and disciplines
    "ci/cd",
    "devops",
    "agile",
    "scrum",
    "testing",
    "machine learning",
    "deep learning",
    "data analysis",
];

/// Classifies a single, already-trimmed, non-empty skill.
///
/// Empty input is the caller's concern; see [`split_skills`].
pub fn classify(skill: &str) -> SkillKind {
    let lower = skill.to_lowercase();
    let technical = TECHNICAL_KEYWORDS
        .iter()
        .any(|k| lower.contains(k) || k.contains(lower.as_str()));
    if technical {
        SkillKind::Technical
    } else {
        SkillKind::Soft
    }
}

/// Classified skills, each bucket in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBuckets {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

/// Trims, drops blank entries, removes case-insensitive duplicates (first wins),
/// and classifies the rest.
pub fn split_skills<S: AsRef<str>>(skills: &[S]) -> SkillBuckets {
    let mut seen: Vec<String> = Vec::new();
    let mut buckets = SkillBuckets::default();

    for raw in skills {
        let skill = raw.as_ref().trim();
        if skill.is_empty() {
            continue;
        }
        let key = skill.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        match classify(skill) {
            SkillKind::Technical => buckets.technical_skills.push(skill.to_string()),
            SkillKind::Soft => buckets.soft_skills.push(skill.to_string()),
        }
    }

    buckets
}
