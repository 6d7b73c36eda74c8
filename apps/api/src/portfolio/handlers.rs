use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::{ProfileRecord, SavePortfolioRequest};
use crate::portfolio::service::{find_own_profile, load_portfolio_page, save_portfolio};
use crate::portfolio::wizard::{next_step, previous_step, wizard_steps, StepEvent, WizardStep};
use crate::render::{render_page_html, PortfolioPage};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct WizardQuery {
    pub role: String,
}

#[derive(Serialize)]
pub struct WizardPlanResponse {
    pub role: String,
    pub steps: Vec<WizardStep>,
}

/// GET /api/v1/wizard/steps?role=
pub async fn handle_wizard_steps(Query(params): Query<WizardQuery>) -> Json<WizardPlanResponse> {
    Json(WizardPlanResponse {
        steps: wizard_steps(&params.role),
        role: params.role,
    })
}

#[derive(Deserialize)]
pub struct WizardMoveQuery {
    pub role: String,
    pub current: WizardStep,
    #[serde(default)]
    pub event: StepEvent,
}

#[derive(Serialize)]
pub struct WizardMoveResponse {
    pub role: String,
    pub current: WizardStep,
    pub next: Option<WizardStep>,
    pub previous: Option<WizardStep>,
}

/// GET /api/v1/wizard/next?role=&current=&event=
/// `next` is null on the last step; `previous` is null on the first.
pub async fn handle_wizard_next(
    Query(params): Query<WizardMoveQuery>,
) -> Json<WizardMoveResponse> {
    Json(WizardMoveResponse {
        next: next_step(&params.role, params.current, params.event),
        previous: previous_step(&params.role, params.current),
        current: params.current,
        role: params.role,
    })
}

/// POST /api/v1/portfolios
pub async fn handle_save_portfolio(
    State(state): State<AppState>,
    Json(req): Json<SavePortfolioRequest>,
) -> Result<Json<ProfileRecord>, AppError> {
    let record = save_portfolio(
        state.store.as_ref(),
        &state.variants,
        req,
        &state.config.public_base_url,
    )
    .await?;
    info!("Portfolio {} published at {}", record.profile.id, record.share_url);
    Ok(Json(record))
}

/// GET /api/v1/portfolios/me?user_id=
pub async fn handle_get_own_portfolio(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileRecord>, AppError> {
    let record = find_own_profile(
        state.store.as_ref(),
        params.user_id,
        &state.config.public_base_url,
    )
    .await?;
    Ok(Json(record))
}

/// GET /api/v1/portfolios/:id
pub async fn handle_get_portfolio_page(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<PortfolioPage>, AppError> {
    Ok(Json(load_portfolio_page(state.store.as_ref(), profile_id).await?))
}

/// GET /p/:id
/// Public share page. No authentication.
pub async fn handle_share_page(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let page = load_portfolio_page(state.store.as_ref(), profile_id).await?;
    Ok(Html(render_page_html(&page)))
}
