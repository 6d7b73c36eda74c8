//! Role Registry and per-role base design.
//!
//! Both tables are immutable and keyed by role id. Unknown ids resolve to the
//! generic full-stack profile; they are never an error.

use serde::Serialize;

use crate::design::variant::{AnimationStyle, Layout};

pub const DEFAULT_ROLE_ID: &str = "fullstack-developer";
pub const FRESHER_ROLE_ID: &str = "fresher";

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    About,
    Projects,
    Skills,
    Education,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Achievements,
        Section::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Achievements => "Achievements & Certifications",
            Section::Contact => "Contact",
        }
    }
}

/// A total order over all six sections.
pub type SectionOrder = [Section; 6];

use Section::*;

const BUILDER_ORDER: SectionOrder = [About, Projects, Skills, Education, Achievements, Contact];
const SYSTEMS_ORDER: SectionOrder = [About, Skills, Projects, Education, Achievements, Contact];
const CREATIVE_ORDER: SectionOrder = [About, Projects, Skills, Achievements, Education, Contact];
const ACADEMIC_ORDER: SectionOrder = [About, Education, Projects, Skills, Achievements, Contact];
const OPERATIONS_ORDER: SectionOrder = [About, Skills, Projects, Achievements, Education, Contact];
const CREDENTIAL_ORDER: SectionOrder = [About, Skills, Achievements, Projects, Education, Contact];
const RESULTS_ORDER: SectionOrder = [About, Achievements, Projects, Skills, Education, Contact];

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct JobRole {
    pub id: &'static str,
    pub label: &'static str,
    /// Icon name in the client's icon set.
    pub icon: &'static str,
    pub category: &'static str,
}

const fn role(
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    category: &'static str,
) -> JobRole {
    JobRole {
        id,
        label,
        icon,
        category,
    }
}

pub static JOB_ROLES: &[JobRole] = &[
    role("frontend-developer", "Frontend Developer", "Monitor", "Development"),
    role("backend-developer", "Backend Developer", "Server", "Development"),
    role("fullstack-developer", "Full Stack Developer", "Layers", "Development"),
    role("uiux-designer", "UI/UX Designer", "Palette", "Design"),
    role("mobile-developer", "Mobile App Developer", "Smartphone", "Development"),
    role("data-analyst", "Data Analyst", "BarChart3", "Data"),
    role("data-scientist", "Data Scientist", "BrainCircuit", "Data"),
    role("devops-engineer", "DevOps Engineer", "Container", "Infrastructure"),
    role("cloud-engineer", "Cloud Engineer", "Cloud", "Infrastructure"),
    role("cybersecurity-analyst", "Cybersecurity Analyst", "Shield", "Security"),
    role("software-tester", "Software Tester", "Bug", "Development"),
    role("aiml-engineer", "AI/ML Engineer", "Bot", "Data"),
    role("graphic-designer", "Graphic Designer", "PenTool", "Design"),
    role("digital-marketer", "Digital Marketer", "Megaphone", "Marketing"),
    role("business-analyst", "Business Analyst", "Briefcase", "Business"),
    role(FRESHER_ROLE_ID, "Fresher (No Experience)", "GraduationCap", "Entry Level"),
];

pub fn find_role(id: &str) -> Option<&'static JobRole> {
    JOB_ROLES.iter().find(|r| r.id == id)
}

pub fn is_fresher(role_id: &str) -> bool {
    role_id == FRESHER_ROLE_ID
}

// ────────────────────────────────────────────────────────────────────────────
// Base design per role
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RoleDesignConfig {
    pub role_id: &'static str,
    pub hero_style: &'static str,
    pub card_style: &'static str,
    pub badge_style: &'static str,
    pub section_bg: &'static str,
    pub hero_animation: AnimationStyle,
    pub default_layout: Layout,
    pub particle_effect: bool,
    pub grid_overlay: bool,
    pub section_order: SectionOrder,
}

pub static ROLE_DESIGN_CONFIGS: &[RoleDesignConfig] = &[
    RoleDesignConfig {
        role_id: "frontend-developer",
        hero_style: "text-white relative overflow-hidden",
        card_style: "bg-white/5 border border-cyan-500/20 rounded-2xl backdrop-blur-md hover:border-cyan-400/50 transition-all",
        badge_style: "bg-cyan-500/10 text-cyan-300 border border-cyan-500/30 rounded-full",
        section_bg: "bg-slate-950/60",
        hero_animation: AnimationStyle::Slide,
        default_layout: Layout::TopHeader,
        particle_effect: true,
        grid_overlay: false,
        section_order: BUILDER_ORDER,
    },
    RoleDesignConfig {
        role_id: "backend-developer",
        hero_style: "text-green-100 relative font-mono",
        card_style: "bg-black/40 border border-green-500/20 rounded-lg hover:border-green-400/40 transition-colors",
        badge_style: "bg-green-500/10 text-green-300 border border-green-500/30 rounded font-mono",
        section_bg: "bg-black/50",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::Sidebar,
        particle_effect: false,
        grid_overlay: true,
        section_order: SYSTEMS_ORDER,
    },
    RoleDesignConfig {
        role_id: "fullstack-developer",
        hero_style: "text-white relative",
        card_style: "bg-white/5 border border-white/10 rounded-xl backdrop-blur-sm hover:bg-white/10 transition-all",
        badge_style: "bg-blue-500/10 text-blue-300 border border-blue-500/30 rounded-full",
        section_bg: "bg-gray-950/60",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::TopHeader,
        particle_effect: true,
        grid_overlay: true,
        section_order: BUILDER_ORDER,
    },
    RoleDesignConfig {
        role_id: "uiux-designer",
        hero_style: "text-white relative overflow-hidden",
        card_style: "bg-white/10 border border-pink-400/20 rounded-3xl shadow-xl hover:-translate-y-1 transition-transform",
        badge_style: "bg-pink-500/10 text-pink-200 border border-pink-400/30 rounded-full",
        section_bg: "bg-fuchsia-950/20",
        hero_animation: AnimationStyle::Scale,
        default_layout: Layout::Split,
        particle_effect: true,
        grid_overlay: false,
        section_order: CREATIVE_ORDER,
    },
    RoleDesignConfig {
        role_id: "mobile-developer",
        hero_style: "text-white relative",
        card_style: "bg-white/5 border border-indigo-400/20 rounded-[2rem] hover:border-indigo-300/50 transition-all",
        badge_style: "bg-indigo-500/10 text-indigo-200 border border-indigo-400/30 rounded-full",
        section_bg: "bg-indigo-950/30",
        hero_animation: AnimationStyle::Slide,
        default_layout: Layout::CardStack,
        particle_effect: false,
        grid_overlay: false,
        section_order: BUILDER_ORDER,
    },
    RoleDesignConfig {
        role_id: "data-analyst",
        hero_style: "text-sky-50 relative",
        card_style: "bg-slate-900/70 border border-sky-500/20 rounded-lg hover:border-sky-400/40 transition-colors",
        badge_style: "bg-sky-500/10 text-sky-200 border border-sky-500/30 rounded-md",
        section_bg: "bg-slate-950/70",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::TopHeader,
        particle_effect: false,
        grid_overlay: true,
        section_order: SYSTEMS_ORDER,
    },
    RoleDesignConfig {
        role_id: "data-scientist",
        hero_style: "text-white relative",
        card_style: "bg-slate-900/60 border border-violet-500/20 rounded-xl hover:border-violet-400/40 transition-all",
        badge_style: "bg-violet-500/10 text-violet-200 border border-violet-500/30 rounded-md",
        section_bg: "bg-violet-950/20",
        hero_animation: AnimationStyle::BlurReveal,
        default_layout: Layout::Split,
        particle_effect: true,
        grid_overlay: true,
        section_order: ACADEMIC_ORDER,
    },
    RoleDesignConfig {
        role_id: "devops-engineer",
        hero_style: "text-orange-50 relative font-mono",
        card_style: "bg-zinc-900/70 border border-orange-500/20 rounded-lg hover:border-orange-400/40 transition-colors",
        badge_style: "bg-orange-500/10 text-orange-200 border border-orange-500/30 rounded font-mono",
        section_bg: "bg-zinc-950/70",
        hero_animation: AnimationStyle::Slide,
        default_layout: Layout::Sidebar,
        particle_effect: false,
        grid_overlay: true,
        section_order: OPERATIONS_ORDER,
    },
    RoleDesignConfig {
        role_id: "cloud-engineer",
        hero_style: "text-white relative",
        card_style: "bg-sky-950/40 border border-sky-400/20 rounded-2xl backdrop-blur hover:border-sky-300/40 transition-all",
        badge_style: "bg-sky-400/10 text-sky-100 border border-sky-400/30 rounded-full",
        section_bg: "bg-sky-950/20",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::TopHeader,
        particle_effect: true,
        grid_overlay: false,
        section_order: OPERATIONS_ORDER,
    },
    RoleDesignConfig {
        role_id: "cybersecurity-analyst",
        hero_style: "text-red-50 relative font-mono",
        card_style: "bg-black/60 border border-red-500/20 rounded-md hover:border-red-400/50 transition-colors",
        badge_style: "bg-red-500/10 text-red-200 border border-red-500/30 rounded font-mono",
        section_bg: "bg-black/60",
        hero_animation: AnimationStyle::BlurReveal,
        default_layout: Layout::Sidebar,
        particle_effect: false,
        grid_overlay: true,
        section_order: CREDENTIAL_ORDER,
    },
    RoleDesignConfig {
        role_id: "software-tester",
        hero_style: "text-white relative",
        card_style: "bg-slate-900/60 border border-lime-500/20 rounded-lg hover:border-lime-400/40 transition-colors",
        badge_style: "bg-lime-500/10 text-lime-200 border border-lime-500/30 rounded-md",
        section_bg: "bg-slate-950/60",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::TopHeader,
        particle_effect: false,
        grid_overlay: true,
        section_order: BUILDER_ORDER,
    },
    RoleDesignConfig {
        role_id: "aiml-engineer",
        hero_style: "text-white relative overflow-hidden",
        card_style: "bg-purple-950/30 border border-purple-400/20 rounded-2xl backdrop-blur-md hover:border-purple-300/50 transition-all",
        badge_style: "bg-purple-500/10 text-purple-200 border border-purple-400/30 rounded-full",
        section_bg: "bg-purple-950/20",
        hero_animation: AnimationStyle::BlurReveal,
        default_layout: Layout::Split,
        particle_effect: true,
        grid_overlay: true,
        section_order: ACADEMIC_ORDER,
    },
    RoleDesignConfig {
        role_id: "graphic-designer",
        hero_style: "text-white relative overflow-hidden",
        card_style: "bg-white/10 border border-amber-300/20 rounded-3xl shadow-2xl hover:rotate-1 transition-transform",
        badge_style: "bg-amber-400/10 text-amber-100 border border-amber-300/30 rounded-full",
        section_bg: "bg-rose-950/20",
        hero_animation: AnimationStyle::Scale,
        default_layout: Layout::CardStack,
        particle_effect: true,
        grid_overlay: false,
        section_order: CREATIVE_ORDER,
    },
    RoleDesignConfig {
        role_id: "digital-marketer",
        hero_style: "text-white relative",
        card_style: "bg-white/5 border border-orange-400/20 rounded-2xl hover:shadow-orange-500/20 hover:shadow-lg transition-all",
        badge_style: "bg-orange-400/10 text-orange-100 border border-orange-400/30 rounded-full",
        section_bg: "bg-orange-950/20",
        hero_animation: AnimationStyle::Scale,
        default_layout: Layout::TopHeader,
        particle_effect: true,
        grid_overlay: false,
        section_order: RESULTS_ORDER,
    },
    RoleDesignConfig {
        role_id: "business-analyst",
        hero_style: "text-slate-50 relative",
        card_style: "bg-slate-900/70 border border-slate-400/20 rounded-lg hover:border-slate-300/40 transition-colors",
        badge_style: "bg-slate-400/10 text-slate-100 border border-slate-400/30 rounded-md",
        section_bg: "bg-slate-950/70",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::Split,
        particle_effect: false,
        grid_overlay: false,
        section_order: CREDENTIAL_ORDER,
    },
    RoleDesignConfig {
        role_id: FRESHER_ROLE_ID,
        hero_style: "text-white relative",
        card_style: "bg-white/5 border border-teal-400/20 rounded-xl hover:border-teal-300/40 transition-all",
        badge_style: "bg-teal-500/10 text-teal-200 border border-teal-400/30 rounded-full",
        section_bg: "bg-teal-950/20",
        hero_animation: AnimationStyle::Fade,
        default_layout: Layout::TopHeader,
        particle_effect: false,
        grid_overlay: false,
        section_order: ACADEMIC_ORDER,
    },
];

/// Returns the base design for `role_id`, falling back to the full-stack profile.
pub fn design_config(role_id: &str) -> &'static RoleDesignConfig {
    ROLE_DESIGN_CONFIGS
        .iter()
        .find(|c| c.role_id == role_id)
        .or_else(|| ROLE_DESIGN_CONFIGS.iter().find(|c| c.role_id == DEFAULT_ROLE_ID))
        .unwrap_or(&ROLE_DESIGN_CONFIGS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_registered_role_has_its_own_config() {
        for role in JOB_ROLES {
            assert_eq!(design_config(role.id).role_id, role.id);
        }
        assert_eq!(JOB_ROLES.len(), ROLE_DESIGN_CONFIGS.len());
    }

    #[test]
    fn test_unknown_role_falls_back_to_fullstack() {
        assert_eq!(design_config("astronaut").role_id, DEFAULT_ROLE_ID);
        assert_eq!(design_config("").role_id, DEFAULT_ROLE_ID);
    }

    #[test]
    fn test_section_orders_are_permutations() {
        for config in ROLE_DESIGN_CONFIGS {
            let unique: HashSet<_> = config.section_order.iter().collect();
            assert_eq!(unique.len(), Section::ALL.len(), "role {}", config.role_id);
        }
    }

    #[test]
    fn test_registry_ids_unique() {
        let ids: HashSet<_> = JOB_ROLES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), JOB_ROLES.len());
        assert_eq!(JOB_ROLES.len(), 16);
    }

    #[test]
    fn test_fresher_detection() {
        assert!(is_fresher("fresher"));
        assert!(!is_fresher("frontend-developer"));
        assert_eq!(find_role("fresher").unwrap().category, "Entry Level");
    }
}
