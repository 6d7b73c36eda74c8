//! Theme catalog, per-role theme recommendations, and skill-based theme suggestion.

use serde::Serialize;

use crate::design::roles::FRESHER_ROLE_ID;

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ThemePreview {
    pub bg: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub preview: ThemePreview,
}

pub static THEMES: &[Theme] = &[
    Theme {
        id: "classic",
        name: "Classic",
        description: "Timeless elegance with professional blue tones",
        preview: ThemePreview {
            bg: "bg-gradient-to-br from-blue-50 to-indigo-100",
            primary: "bg-blue-600",
            secondary: "bg-indigo-500",
            accent: "bg-blue-400",
        },
    },
    Theme {
        id: "modern",
        name: "Modern",
        description: "Clean and contemporary with purple accents",
        preview: ThemePreview {
            bg: "bg-gradient-to-br from-purple-50 to-pink-100",
            primary: "bg-purple-600",
            secondary: "bg-pink-500",
            accent: "bg-purple-400",
        },
    },
    Theme {
        id: "minimal",
        name: "Minimal",
        description: "Simple and focused with neutral tones",
        preview: ThemePreview {
            bg: "bg-gradient-to-br from-gray-50 to-slate-100",
            primary: "bg-slate-700",
            secondary: "bg-gray-600",
            accent: "bg-slate-500",
        },
    },
    Theme {
        id: "dark",
        name: "Dark",
        description: "Bold and dramatic with dark backgrounds",
        preview: ThemePreview {
            bg: "bg-gradient-to-br from-gray-900 to-slate-800",
            primary: "bg-cyan-500",
            secondary: "bg-blue-400",
            accent: "bg-cyan-300",
        },
    },
    Theme {
        id: "vibrant",
        name: "Vibrant",
        description: "Energetic and colorful with bright accents",
        preview: ThemePreview {
            bg: "bg-gradient-to-br from-orange-50 to-red-100",
            primary: "bg-orange-600",
            secondary: "bg-red-500",
            accent: "bg-yellow-500",
        },
    },
];

pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

// ────────────────────────────────────────────────────────────────────────────
// Role → ranked recommendations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRecommendation {
    pub theme_id: &'static str,
    pub label: &'static str,
    pub reason: &'static str,
}

const fn rec(
    theme_id: &'static str,
    label: &'static str,
    reason: &'static str,
) -> ThemeRecommendation {
    ThemeRecommendation {
        theme_id,
        label,
        reason,
    }
}

type RoleThemes = (&'static str, &'static [ThemeRecommendation]);

static ROLE_THEMES: &[RoleThemes] = &[
    (
        "frontend-developer",
        &[
            rec("modern", "Modern", "Showcases UI/UX sensibility"),
            rec("dark", "Dark", "Trendy developer aesthetic"),
            rec("vibrant", "Vibrant", "Highlights creativity"),
        ],
    ),
    (
        "backend-developer",
        &[
            rec("dark", "Dark", "Terminal-inspired developer theme"),
            rec("minimal", "Minimal", "Code-focused clean layout"),
            rec("classic", "Classic", "Professional and structured"),
        ],
    ),
    (
        "fullstack-developer",
        &[
            rec("modern", "Modern", "Versatile and balanced"),
            rec("dark", "Dark", "Developer-friendly aesthetic"),
            rec("classic", "Classic", "Professional showcase"),
        ],
    ),
    (
        "uiux-designer",
        &[
            rec("vibrant", "Vibrant", "Creative and bold"),
            rec("modern", "Modern", "Clean design showcase"),
            rec("minimal", "Minimal", "Focus on content"),
        ],
    ),
    (
        "mobile-developer",
        &[
            rec("modern", "Modern", "App-inspired design"),
            rec("dark", "Dark", "Sleek mobile aesthetic"),
            rec("vibrant", "Vibrant", "App store vibe"),
        ],
    ),
    (
        "data-analyst",
        &[
            rec("classic", "Classic", "Professional data presentation"),
            rec("minimal", "Minimal", "Clean chart-friendly layout"),
            rec("dark", "Dark", "Analytics dashboard feel"),
        ],
    ),
    (
        "data-scientist",
        &[
            rec("dark", "Dark", "Research-style presentation"),
            rec("classic", "Classic", "Academic professionalism"),
            rec("minimal", "Minimal", "Clean data focus"),
        ],
    ),
    (
        "devops-engineer",
        &[
            rec("dark", "Dark", "Infrastructure dashboard feel"),
            rec("minimal", "Minimal", "Clean and efficient"),
            rec("classic", "Classic", "Professional and structured"),
        ],
    ),
    (
        "cloud-engineer",
        &[
            rec("modern", "Modern", "Cloud-inspired design"),
            rec("dark", "Dark", "Tech-forward aesthetic"),
            rec("classic", "Classic", "Enterprise professional"),
        ],
    ),
    (
        "cybersecurity-analyst",
        &[
            rec("dark", "Dark", "Security-focused aesthetic"),
            rec("minimal", "Minimal", "Clean and precise"),
            rec("classic", "Classic", "Trust-building design"),
        ],
    ),
    (
        "software-tester",
        &[
            rec("classic", "Classic", "Structured and reliable"),
            rec("minimal", "Minimal", "Focused and clean"),
            rec("modern", "Modern", "QA-professional look"),
        ],
    ),
    (
        "aiml-engineer",
        &[
            rec("dark", "Dark", "AI-inspired futuristic feel"),
            rec("modern", "Modern", "Tech innovation look"),
            rec("vibrant", "Vibrant", "Creative ML showcase"),
        ],
    ),
    (
        "graphic-designer",
        &[
            rec("vibrant", "Vibrant", "Bold creative showcase"),
            rec("modern", "Modern", "Design portfolio style"),
            rec("minimal", "Minimal", "Let work speak for itself"),
        ],
    ),
    (
        "digital-marketer",
        &[
            rec("vibrant", "Vibrant", "Marketing energy"),
            rec("modern", "Modern", "Brand-savvy look"),
            rec("classic", "Classic", "Corporate professional"),
        ],
    ),
    (
        "business-analyst",
        &[
            rec("classic", "Classic", "Corporate professional"),
            rec("minimal", "Minimal", "Data-driven clarity"),
            rec("modern", "Modern", "Contemporary business"),
        ],
    ),
    (
        FRESHER_ROLE_ID,
        &[
            rec("minimal", "Minimal", "Clean and academic"),
            rec("classic", "Classic", "Professional first impression"),
            rec("modern", "Modern", "Fresh and contemporary"),
        ],
    ),
];

fn fresher_themes() -> &'static [ThemeRecommendation] {
    ROLE_THEMES
        .iter()
        .find(|(id, _)| *id == FRESHER_ROLE_ID)
        .map(|(_, themes)| *themes)
        .unwrap_or(&[])
}

/// Ranked themes for a role; unknown roles get the entry-level list.
pub fn recommended_themes(role_id: &str) -> &'static [ThemeRecommendation] {
    ROLE_THEMES
        .iter()
        .find(|(id, _)| *id == role_id)
        .map(|(_, themes)| *themes)
        .unwrap_or_else(fresher_themes)
}

/// The theme selected when the user does not pick one.
pub fn default_theme(role_id: &str) -> &'static str {
    recommended_themes(role_id)
        .first()
        .map(|r| r.theme_id)
        .unwrap_or("minimal")
}

// ────────────────────────────────────────────────────────────────────────────
// Skill-based suggestion
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Data,
    Devops,
    Design,
}

impl SkillCategory {
    /// Declaration order doubles as the tie-break priority.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Data,
        SkillCategory::Devops,
        SkillCategory::Design,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Frontend => &[
                "react", "vue", "angular", "tailwind", "css", "html", "javascript", "typescript",
                "next.js", "svelte",
            ],
            SkillCategory::Backend => &[
                "node", "python", "java", "spring", "django", "express", "go", "rust", "php",
                "ruby",
            ],
            SkillCategory::Data => &[
                "python",
                "ml",
                "machine learning",
                "tensorflow",
                "pytorch",
                "pandas",
                "numpy",
                "r",
                "statistics",
                "data",
            ],
            SkillCategory::Devops => &[
                "aws", "docker", "kubernetes", "terraform", "ci/cd", "jenkins", "azure", "gcp",
                "linux",
            ],
            SkillCategory::Design => &[
                "figma",
                "sketch",
                "photoshop",
                "illustrator",
                "ui",
                "ux",
                "design",
                "adobe",
            ],
        }
    }

    pub fn role_id(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend-developer",
            SkillCategory::Backend => "backend-developer",
            SkillCategory::Data => "data-scientist",
            SkillCategory::Devops => "devops-engineer",
            SkillCategory::Design => "uiux-designer",
        }
    }

    fn matches(&self, skill_lower: &str) -> bool {
        self.keywords().iter().any(|k| skill_lower.contains(k))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryScore {
    pub category: SkillCategory,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeSuggestion {
    /// `None` when no skill matched any category.
    pub category: Option<SkillCategory>,
    pub role_id: &'static str,
    pub scores: Vec<CategoryScore>,
    pub themes: &'static [ThemeRecommendation],
}

/// Scores skills per category and returns the winning category's role themes.
///
/// Ties go to the category declared first. No match at all returns the
/// entry-level list.
pub fn suggest_themes(skills: &[String]) -> ThemeSuggestion {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let scores: Vec<CategoryScore> = SkillCategory::ALL
        .iter()
        .map(|category| CategoryScore {
            category: *category,
            score: lowered.iter().filter(|s| category.matches(s)).count() as u32,
        })
        .collect();

    let mut winner: Option<&CategoryScore> = None;
    for candidate in &scores {
        if candidate.score > winner.map_or(0, |w| w.score) {
            winner = Some(candidate);
        }
    }

    match winner.map(|w| w.category) {
        Some(category) => ThemeSuggestion {
            category: Some(category),
            role_id: category.role_id(),
            themes: recommended_themes(category.role_id()),
            scores,
        },
        None => ThemeSuggestion {
            category: None,
            role_id: FRESHER_ROLE_ID,
            themes: fresher_themes(),
            scores,
        },
    }
}
