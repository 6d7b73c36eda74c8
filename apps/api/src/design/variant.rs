//! Design variants — the five independent visual axes assigned once per portfolio.
//!
//! A variant is drawn uniformly per axis (4 × 6 × 4 × 6 × 3 = 1728 combinations,
//! no exclusion rules) and persisted verbatim with the profile. Re-renders and
//! edits must reuse the stored value, so nothing in the render path calls the
//! generator.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ────────────────────────────────────────────────────────────────────────────
// Axes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Sidebar,
    TopHeader,
    Split,
    CardStack,
}

impl Layout {
    pub const ALL: [Layout; 4] = [
        Layout::Sidebar,
        Layout::TopHeader,
        Layout::Split,
        Layout::CardStack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Sidebar => "sidebar",
            Layout::TopHeader => "top-header",
            Layout::Split => "split",
            Layout::CardStack => "card-stack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorAccent {
    Neon,
    Pastel,
    DarkPro,
    GradientTech,
    Aurora,
    Ember,
}

/// Accent tokens contributed by a color accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTokens {
    pub primary: &'static str,
    pub glow: &'static str,
    pub gradient: &'static str,
}

impl ColorAccent {
    pub const ALL: [ColorAccent; 6] = [
        ColorAccent::Neon,
        ColorAccent::Pastel,
        ColorAccent::DarkPro,
        ColorAccent::GradientTech,
        ColorAccent::Aurora,
        ColorAccent::Ember,
    ];

    pub fn tokens(&self) -> AccentTokens {
        match self {
            ColorAccent::Neon => AccentTokens {
                primary: "text-cyan-400",
                glow: "shadow-[0_0_40px_rgba(34,211,238,0.4)]",
                gradient: "from-cyan-400 via-blue-500 to-purple-600",
            },
            ColorAccent::Pastel => AccentTokens {
                primary: "text-rose-300",
                glow: "shadow-[0_0_30px_rgba(251,207,232,0.3)]",
                gradient: "from-rose-300 via-pink-300 to-violet-300",
            },
            ColorAccent::DarkPro => AccentTokens {
                primary: "text-emerald-400",
                glow: "shadow-[0_0_30px_rgba(52,211,153,0.3)]",
                gradient: "from-emerald-400 via-teal-500 to-cyan-600",
            },
            ColorAccent::GradientTech => AccentTokens {
                primary: "text-violet-400",
                glow: "shadow-[0_0_35px_rgba(167,139,250,0.35)]",
                gradient: "from-violet-400 via-purple-500 to-fuchsia-600",
            },
            ColorAccent::Aurora => AccentTokens {
                primary: "text-green-300",
                glow: "shadow-[0_0_40px_rgba(134,239,172,0.3)]",
                gradient: "from-green-300 via-teal-400 to-blue-500",
            },
            ColorAccent::Ember => AccentTokens {
                primary: "text-amber-400",
                glow: "shadow-[0_0_35px_rgba(251,191,36,0.3)]",
                gradient: "from-amber-400 via-orange-500 to-red-600",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    Fade,
    Slide,
    Scale,
    BlurReveal,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 4] = [
        AnimationStyle::Fade,
        AnimationStyle::Slide,
        AnimationStyle::Scale,
        AnimationStyle::BlurReveal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::Fade => "fade",
            AnimationStyle::Slide => "slide",
            AnimationStyle::Scale => "scale",
            AnimationStyle::BlurReveal => "blur-reveal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    Gradient,
    Mesh,
    Grid,
    Glass,
    Aurora,
    Minimal,
}

impl BackgroundStyle {
    pub const ALL: [BackgroundStyle; 6] = [
        BackgroundStyle::Gradient,
        BackgroundStyle::Mesh,
        BackgroundStyle::Grid,
        BackgroundStyle::Glass,
        BackgroundStyle::Aurora,
        BackgroundStyle::Minimal,
    ];

    pub fn css(&self) -> &'static str {
        match self {
            BackgroundStyle::Gradient => "bg-gradient-to-br from-gray-950 via-slate-900 to-gray-950",
            BackgroundStyle::Mesh => {
                "bg-gray-950 bg-[radial-gradient(ellipse_80%_80%_at_50%_-20%,rgba(120,119,198,0.15),transparent)]"
            }
            BackgroundStyle::Grid => {
                "bg-gray-950 bg-[linear-gradient(rgba(255,255,255,0.02)_1px,transparent_1px),linear-gradient(90deg,rgba(255,255,255,0.02)_1px,transparent_1px)] bg-[size:60px_60px]"
            }
            BackgroundStyle::Glass => {
                "bg-gradient-to-br from-slate-900/95 via-gray-900/90 to-slate-950/95 backdrop-blur-3xl"
            }
            BackgroundStyle::Aurora => {
                "bg-gray-950 bg-[radial-gradient(ellipse_at_top,rgba(120,119,198,0.12),transparent_50%),radial-gradient(ellipse_at_bottom_right,rgba(59,130,246,0.08),transparent_50%)]"
            }
            BackgroundStyle::Minimal => "bg-gray-950",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyWeight {
    Light,
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyTokens {
    pub heading: &'static str,
    pub body: &'static str,
}

impl TypographyWeight {
    pub const ALL: [TypographyWeight; 3] = [
        TypographyWeight::Light,
        TypographyWeight::Regular,
        TypographyWeight::Bold,
    ];

    pub fn tokens(&self) -> TypographyTokens {
        match self {
            TypographyWeight::Light => TypographyTokens {
                heading: "font-light tracking-wide",
                body: "font-light",
            },
            TypographyWeight::Regular => TypographyTokens {
                heading: "font-bold",
                body: "font-normal",
            },
            TypographyWeight::Bold => TypographyTokens {
                heading: "font-extrabold tracking-tight",
                body: "font-medium",
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Variant
// ────────────────────────────────────────────────────────────────────────────

/// Persisted as the `design_variant` JSON column, e.g.
/// `{"layout":"split","colorAccent":"dark-pro","animationStyle":"fade",...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignVariant {
    pub layout: Layout,
    pub color_accent: ColorAccent,
    pub animation_style: AnimationStyle,
    pub background_style: BackgroundStyle,
    pub typography_weight: TypographyWeight,
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

/// Draws one value per axis, independently and uniformly.
pub fn generate_variant<R: Rng + ?Sized>(rng: &mut R) -> DesignVariant {
    DesignVariant {
        layout: pick(rng, &Layout::ALL),
        color_accent: pick(rng, &ColorAccent::ALL),
        animation_style: pick(rng, &AnimationStyle::ALL),
        background_style: pick(rng, &BackgroundStyle::ALL),
        typography_weight: pick(rng, &TypographyWeight::ALL),
    }
}

/// Injectable random source for new portfolios.
///
/// Production seeds from OS entropy; `VARIANT_SEED` pins the sequence.
pub struct VariantGenerator {
    rng: Mutex<StdRng>,
}

impl VariantGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn generate(&self) -> DesignVariant {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_variant(&mut *rng)
    }
}

/// Reads a stored `design_variant` blob. Anything that does not match the
/// variant shape is treated as absent so rendering falls back to defaults.
pub fn parse_stored_variant(raw: Option<&serde_json::Value>) -> Option<DesignVariant> {
    let raw = raw?;
    if raw.is_null() {
        return None;
    }
    match serde_json::from_value::<DesignVariant>(raw.clone()) {
        Ok(variant) => Some(variant),
        Err(e) => {
            warn!("Ignoring malformed design_variant ({e}): {raw}");
            None
        }
    }
}
