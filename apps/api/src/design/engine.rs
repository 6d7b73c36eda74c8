//! Design Resolution Engine — merges a role's base design with a portfolio's variant.
//!
//! Merge rules:
//! - background: role hero token and variant background token, both kept
//! - heading/body: variant typography weight only
//! - accent primary/glow/gradient: variant color accent only
//! - card/badge/section background, particles, grid: role config only
//! - animation and layout: variant when present, else the role default
//!
//! `resolve` is a pure function of its inputs and is recomputed on every render.

use serde::Serialize;

use crate::design::roles::{design_config, RoleDesignConfig};
use crate::design::variant::{BackgroundStyle, ColorAccent, DesignVariant, TypographyWeight};

const DEFAULT_ACCENT: ColorAccent = ColorAccent::Neon;
const DEFAULT_BACKGROUND: BackgroundStyle = BackgroundStyle::Gradient;
const DEFAULT_TYPOGRAPHY: TypographyWeight = TypographyWeight::Regular;

/// Flat style tokens consumed by the section renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDesign {
    pub background: String,
    pub heading: String,
    pub body: String,
    pub accent_primary: String,
    pub accent_glow: String,
    pub accent_gradient: String,
    pub card: String,
    pub badge: String,
    pub section_background: String,
    pub animation: String,
    pub show_particles: bool,
    pub show_grid: bool,
    pub layout: String,
}

/// Resolves the design for `role_id`. Unknown roles use the default role config.
pub fn resolve(role_id: &str, variant: Option<&DesignVariant>) -> ResolvedDesign {
    resolve_with_config(design_config(role_id), variant)
}

pub fn resolve_with_config(
    config: &RoleDesignConfig,
    variant: Option<&DesignVariant>,
) -> ResolvedDesign {
    let accent = variant.map_or(DEFAULT_ACCENT, |v| v.color_accent).tokens();
    let background = variant.map_or(DEFAULT_BACKGROUND, |v| v.background_style);
    let typography = variant
        .map_or(DEFAULT_TYPOGRAPHY, |v| v.typography_weight)
        .tokens();
    let animation = variant.map_or(config.hero_animation, |v| v.animation_style);
    let layout = variant.map_or(config.default_layout, |v| v.layout);

    ResolvedDesign {
        background: format!("{} {}", config.hero_style, background.css()),
        heading: typography.heading.to_string(),
        body: typography.body.to_string(),
        accent_primary: accent.primary.to_string(),
        accent_glow: accent.glow.to_string(),
        accent_gradient: accent.gradient.to_string(),
        card: config.card_style.to_string(),
        badge: config.badge_style.to_string(),
        section_background: config.section_bg.to_string(),
        animation: animation.as_str().to_string(),
        show_particles: config.particle_effect,
        show_grid: config.grid_overlay,
        layout: layout.as_str().to_string(),
    }
}
