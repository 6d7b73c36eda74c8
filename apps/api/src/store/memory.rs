//! In-memory store used by handler and service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::{
    Achievement, Education, NewPortfolio, ProfileRow, Project, SkillRow,
};
use crate::skills::SkillKind;
use crate::store::PortfolioStore;

#[derive(Default)]
struct Tables {
    profiles: HashMap<Uuid, ProfileRow>,
    skills: HashMap<Uuid, Vec<SkillRow>>,
    projects: HashMap<Uuid, Vec<Project>>,
    education: HashMap<Uuid, Vec<Education>>,
    achievements: HashMap<Uuid, Vec<Achievement>>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored variant blob, bypassing write-once.
    pub fn corrupt_variant(&self, user_id: Uuid, raw: serde_json::Value) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(profile) = tables.profiles.get_mut(&user_id) {
            profile.design_variant = Some(raw);
        }
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn find_profile(&self, profile_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.profiles.values().find(|p| p.id == profile_id).cloned())
    }

    async fn find_profile_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(self.tables.lock().unwrap().profiles.get(&user_id).cloned())
    }

    async fn replace_portfolio(&self, portfolio: &NewPortfolio) -> Result<ProfileRow, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let user_id = portfolio.user_id;
        let fields = portfolio.profile.clone();
        let now = Utc::now();
        let existing = tables.profiles.get(&user_id).cloned();

        let profile = ProfileRow {
            id: existing.as_ref().map_or_else(Uuid::new_v4, |p| p.id),
            user_id,
            full_name: fields.full_name,
            profession: fields.profession,
            bio: fields.bio,
            email: fields.email,
            phone: fields.phone,
            location: fields.location,
            linkedin_url: fields.linkedin_url,
            github_url: fields.github_url,
            website_url: fields.website_url,
            profile_image_url: fields.profile_image_url,
            job_role: portfolio.job_role.clone(),
            theme: portfolio.theme.clone(),
            is_fresher: portfolio.is_fresher,
            design_variant: existing
                .as_ref()
                .and_then(|p| p.design_variant.clone())
                .or_else(|| serde_json::to_value(portfolio.design_variant).ok()),
            created_at: existing.as_ref().map_or(now, |p| p.created_at),
            updated_at: now,
        };
        tables.profiles.insert(user_id, profile.clone());

        let skills = portfolio
            .skills
            .technical_skills
            .iter()
            .map(|name| SkillRow {
                name: name.clone(),
                kind: SkillKind::Technical.as_str().to_string(),
            })
            .chain(portfolio.skills.soft_skills.iter().map(|name| SkillRow {
                name: name.clone(),
                kind: SkillKind::Soft.as_str().to_string(),
            }))
            .collect();
        tables.skills.insert(user_id, skills);
        tables.projects.insert(user_id, portfolio.projects.clone());
        tables.education.insert(user_id, portfolio.education.clone());
        tables
            .achievements
            .insert(user_id, portfolio.achievements.clone());

        Ok(profile)
    }

    async fn skills(&self, user_id: Uuid) -> Result<Vec<SkillRow>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.skills.get(&user_id).cloned().unwrap_or_default())
    }

    async fn projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.projects.get(&user_id).cloned().unwrap_or_default())
    }

    async fn education(&self, user_id: Uuid) -> Result<Vec<Education>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.education.get(&user_id).cloned().unwrap_or_default())
    }

    async fn achievements(&self, user_id: Uuid) -> Result<Vec<Achievement>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.achievements.get(&user_id).cloned().unwrap_or_default())
    }
}
