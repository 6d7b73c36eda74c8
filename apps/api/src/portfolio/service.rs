//! Portfolio save and page assembly.
//!
//! Saving is always a full replacement of the user's portfolio. The design
//! variant is the one exception: it is drawn once, on the first save, and
//! every later save carries the stored value forward.

use tracing::{info, warn};
use uuid::Uuid;

use crate::design::engine::resolve;
use crate::design::roles::{design_config, find_role, is_fresher};
use crate::design::themes::{default_theme, find_theme};
use crate::design::variant::VariantGenerator;
use crate::errors::AppError;
use crate::portfolio::models::{NewPortfolio, ProfileRecord, ProfileRow, SavePortfolioRequest};
use crate::portfolio::validation::validate_profile;
use crate::render::sections::{build_page, PortfolioPage};
use crate::skills::split_skills;
use crate::store::{load_content, PortfolioStore};

pub fn share_url(base_url: &str, profile_id: Uuid) -> String {
    format!("{}/p/{profile_id}", base_url.trim_end_matches('/'))
}

/// Provided theme if the catalog knows it, else the role's top recommendation.
fn pick_theme(requested: Option<&str>, role_id: &str) -> String {
    match requested.map(str::trim).filter(|t| !t.is_empty()) {
        Some(theme) if find_theme(theme).is_some() => theme.to_string(),
        Some(theme) => {
            warn!("Unknown theme '{theme}', using default for role {role_id}");
            default_theme(role_id).to_string()
        }
        None => default_theme(role_id).to_string(),
    }
}

pub async fn save_portfolio(
    store: &dyn PortfolioStore,
    variants: &VariantGenerator,
    req: SavePortfolioRequest,
    base_url: &str,
) -> Result<ProfileRecord, AppError> {
    validate_profile(&req.profile)?;

    let job_role = req.job_role.trim().to_string();
    if find_role(&job_role).is_none() {
        warn!("Saving portfolio with unregistered role '{job_role}'");
    }

    let skills = split_skills(&req.skills);

    let existing = store.find_profile_by_user(req.user_id).await?;
    let design_variant = match existing.as_ref().and_then(ProfileRow::variant) {
        Some(variant) => variant,
        None => {
            let variant = variants.generate();
            info!("Generated design variant for user {}: {variant:?}", req.user_id);
            variant
        }
    };

    let theme = pick_theme(req.theme.as_deref(), &job_role);

    let portfolio = NewPortfolio {
        user_id: req.user_id,
        profile: req.profile,
        is_fresher: is_fresher(&job_role),
        job_role,
        theme,
        design_variant,
        skills,
        projects: req.projects,
        education: req.education,
        achievements: req.achievements,
    };

    let profile = store.replace_portfolio(&portfolio).await?;
    Ok(ProfileRecord {
        share_url: share_url(base_url, profile.id),
        technical_skills: portfolio.skills.technical_skills,
        soft_skills: portfolio.skills.soft_skills,
        profile,
    })
}

/// The caller's own profile record, if they have saved one.
pub async fn find_own_profile(
    store: &dyn PortfolioStore,
    user_id: Uuid,
    base_url: &str,
) -> Result<ProfileRecord, AppError> {
    let profile = store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No portfolio for user {user_id}")))?;
    let content = load_content(store, profile).await?;
    Ok(ProfileRecord {
        share_url: share_url(base_url, content.profile.id),
        technical_skills: content.skills.technical_skills,
        soft_skills: content.skills.soft_skills,
        profile: content.profile,
    })
}

/// Fetches a portfolio and lays it out with the owner's role and variant.
pub async fn load_portfolio_page(
    store: &dyn PortfolioStore,
    profile_id: Uuid,
) -> Result<PortfolioPage, AppError> {
    let profile = store
        .find_profile(profile_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {profile_id} not found")))?;

    let variant = profile.variant();
    let role_id = profile.job_role.clone();
    let content = load_content(store, profile).await?;

    let design = resolve(&role_id, variant.as_ref());
    Ok(build_page(
        &design_config(&role_id).section_order,
        design,
        &content,
    ))
}
