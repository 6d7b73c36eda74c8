use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

use crate::design::engine::{resolve, ResolvedDesign};
use crate::design::roles::{design_config, find_role, JobRole, Section, JOB_ROLES};
use crate::design::themes::{
    recommended_themes, suggest_themes, Theme, ThemeRecommendation, ThemeSuggestion, THEMES,
};
use crate::design::variant::{
    AnimationStyle, BackgroundStyle, ColorAccent, DesignVariant, Layout, TypographyWeight,
};
use crate::errors::AppError;

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [JobRole]> {
    Json(JOB_ROLES)
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<&'static [Theme]> {
    Json(THEMES)
}

/// GET /api/v1/roles/:id/themes
pub async fn handle_role_themes(
    Path(role_id): Path<String>,
) -> Result<Json<&'static [ThemeRecommendation]>, AppError> {
    let role = find_role(&role_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown role '{role_id}'")))?;
    Ok(Json(recommended_themes(role.id)))
}

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub skills: Vec<String>,
}

/// POST /api/v1/themes/suggest
pub async fn handle_suggest_themes(Json(req): Json<SuggestRequest>) -> Json<ThemeSuggestion> {
    Json(suggest_themes(&req.skills))
}

/// Variant axes as raw query parameters. Values are parsed leniently: any
/// missing or unrecognized axis means the role defaults are used instead.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantQuery {
    pub layout: Option<String>,
    pub color_accent: Option<String>,
    pub animation_style: Option<String>,
    pub background_style: Option<String>,
    pub typography_weight: Option<String>,
}

/// Parses one axis by its wire name, e.g. `dark-pro` for `ColorAccent::DarkPro`.
fn parse_axis<T: DeserializeOwned>(axis: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    match serde_json::from_value(serde_json::Value::String(raw.to_string())) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unknown {axis} '{raw}' in design preview query");
            None
        }
    }
}

impl VariantQuery {
    fn is_empty(&self) -> bool {
        self.layout.is_none()
            && self.color_accent.is_none()
            && self.animation_style.is_none()
            && self.background_style.is_none()
            && self.typography_weight.is_none()
    }

    fn variant(&self) -> Option<DesignVariant> {
        if self.is_empty() {
            return None;
        }
        let layout = parse_axis::<Layout>("layout", self.layout.as_deref());
        let color_accent = parse_axis::<ColorAccent>("colorAccent", self.color_accent.as_deref());
        let animation_style =
            parse_axis::<AnimationStyle>("animationStyle", self.animation_style.as_deref());
        let background_style =
            parse_axis::<BackgroundStyle>("backgroundStyle", self.background_style.as_deref());
        let typography_weight =
            parse_axis::<TypographyWeight>("typographyWeight", self.typography_weight.as_deref());

        match (layout, color_accent, animation_style, background_style, typography_weight) {
            (
                Some(layout),
                Some(color_accent),
                Some(animation_style),
                Some(background_style),
                Some(typography_weight),
            ) => Some(DesignVariant {
                layout,
                color_accent,
                animation_style,
                background_style,
                typography_weight,
            }),
            _ => {
                warn!("Incomplete variant in design preview query, using role defaults: {self:?}");
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DesignPreviewResponse {
    pub role_id: String,
    pub known_role: bool,
    pub variant: Option<DesignVariant>,
    pub design: ResolvedDesign,
    pub section_order: Vec<Section>,
}

/// GET /api/v1/design/:role
/// Resolves tokens for a role, optionally with an explicit variant. Unknown
/// roles resolve with the fallback profile rather than failing.
pub async fn handle_design_preview(
    Path(role_id): Path<String>,
    Query(query): Query<VariantQuery>,
) -> Json<DesignPreviewResponse> {
    let variant = query.variant();
    let design = resolve(&role_id, variant.as_ref());
    Json(DesignPreviewResponse {
        known_role: find_role(&role_id).is_some(),
        section_order: design_config(&role_id).section_order.to_vec(),
        role_id,
        variant,
        design,
    })
}
