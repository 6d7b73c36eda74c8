use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::design::variant::{parse_stored_variant, DesignVariant};
use crate::skills::SkillBuckets;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub profession: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub website_url: String,
    pub profile_image_url: String,
    pub job_role: String,
    pub theme: String,
    pub is_fresher: bool,
    pub design_variant: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    /// The stored variant, or `None` if absent or malformed.
    pub fn variant(&self) -> Option<DesignVariant> {
        parse_stored_variant(self.design_variant.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillRow {
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub project_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

/// Personal-info step of the wizard. Also the shape a parsed résumé prefills.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub full_name: String,
    pub profession: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub website_url: String,
    pub profile_image_url: String,
}

/// POST /api/v1/portfolios body. Every save is a full replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct SavePortfolioRequest {
    pub user_id: Uuid,
    pub job_role: String,
    #[serde(default)]
    pub theme: Option<String>,
    pub profile: ProfileFields,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Fully prepared portfolio handed to the store.
#[derive(Debug, Clone)]
pub struct NewPortfolio {
    pub user_id: Uuid,
    pub profile: ProfileFields,
    pub job_role: String,
    pub theme: String,
    pub is_fresher: bool,
    pub design_variant: DesignVariant,
    pub skills: SkillBuckets,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

/// A profile with its related records, as read back for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioContent {
    pub profile: ProfileRow,
    pub skills: SkillBuckets,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
}

/// Profile record as returned to clients after a save or lookup.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    #[serde(flatten)]
    pub profile: ProfileRow,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub share_url: String,
}
