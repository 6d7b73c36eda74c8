//! Portfolio storage collaborator.
//!
//! `AppState` carries an `Arc<dyn PortfolioStore>`; production uses
//! [`postgres::PgPortfolioStore`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::{
    Achievement, Education, NewPortfolio, PortfolioContent, ProfileRow, Project, SkillRow,
};
use crate::skills::{SkillBuckets, SkillKind};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn find_profile(&self, profile_id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    async fn find_profile_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError>;

    /// Writes the profile and replaces every related record for the user.
    /// A variant already on file is kept; the one passed in is only used for
    /// a first save.
    async fn replace_portfolio(&self, portfolio: &NewPortfolio) -> Result<ProfileRow, AppError>;

    async fn skills(&self, user_id: Uuid) -> Result<Vec<SkillRow>, AppError>;

    async fn projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError>;

    async fn education(&self, user_id: Uuid) -> Result<Vec<Education>, AppError>;

    async fn achievements(&self, user_id: Uuid) -> Result<Vec<Achievement>, AppError>;
}

/// Loads a profile's related records concurrently and joins them.
pub async fn load_content(
    store: &dyn PortfolioStore,
    profile: ProfileRow,
) -> Result<PortfolioContent, AppError> {
    let user_id = profile.user_id;
    let (skills, projects, education, achievements) = tokio::try_join!(
        store.skills(user_id),
        store.projects(user_id),
        store.education(user_id),
        store.achievements(user_id),
    )?;

    Ok(PortfolioContent {
        profile,
        skills: bucket_skill_rows(skills),
        projects,
        education,
        achievements,
    })
}

fn bucket_skill_rows(rows: Vec<SkillRow>) -> SkillBuckets {
    let mut buckets = SkillBuckets::default();
    for row in rows {
        match SkillKind::from_db(&row.kind) {
            SkillKind::Technical => buckets.technical_skills.push(row.name),
            SkillKind::Soft => buckets.soft_skills.push(row.name),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_skill_rows_preserves_order() {
        let rows = vec![
            SkillRow {
                name: "Rust".to_string(),
                kind: "technical".to_string(),
            },
            SkillRow {
                name: "Mentoring".to_string(),
                kind: "soft".to_string(),
            },
            SkillRow {
                name: "SQL".to_string(),
                kind: "technical".to_string(),
            },
        ];
        let buckets = bucket_skill_rows(rows);
        assert_eq!(buckets.technical_skills, vec!["Rust", "SQL"]);
        assert_eq!(buckets.soft_skills, vec!["Mentoring"]);
    }

    #[test]
    fn test_skill_kind_round_trips_through_rows() {
        for kind in [SkillKind::Technical, SkillKind::Soft] {
            assert_eq!(SkillKind::from_db(kind.as_str()), kind);
        }
        assert_eq!(SkillKind::from_db("unknown"), SkillKind::Soft);
    }
}
