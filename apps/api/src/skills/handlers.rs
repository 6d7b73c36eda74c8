use axum::Json;
use serde::Deserialize;

use crate::skills::classifier::{split_skills, SkillBuckets};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub skills: Vec<String>,
}

/// POST /api/v1/skills/classify
pub async fn handle_classify(Json(req): Json<ClassifyRequest>) -> Json<SkillBuckets> {
    Json(split_skills(&req.skills))
}
