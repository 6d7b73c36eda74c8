//! Résumé ingestion: extract text from an upload, have it parsed into the
//! fields the setup wizard prefills, and shape the result for the client.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::design::themes::{suggest_themes, ThemeSuggestion};
use crate::errors::AppError;
use crate::portfolio::models::{Education, ProfileFields, Project};
use crate::portfolio::wizard::{next_step, StepEvent, WizardStep};
use crate::skills::{split_skills, SkillBuckets};

pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;

/// Largest accepted upload.
pub const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeFile {
    /// Lowercased extension, if the file name has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        (!stem.is_empty() && !ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub description: String,
}

/// Fields extracted from a résumé. Anything the document lacks is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profession: String,
    pub location: String,
    pub linkedin_url: String,
    pub skills: Vec<String>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}

#[async_trait]
pub trait ResumeParser: Send + Sync {
    /// Parses an uploaded résumé. Unreadable input is `AppError::ResumeParse`.
    async fn parse(&self, user_id: Uuid, file: &ResumeFile) -> Result<ParsedResume, AppError>;
}

/// What the wizard receives after a successful import.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeImport {
    pub profile: ProfileFields,
    pub skills: SkillBuckets,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub theme_suggestion: ThemeSuggestion,
    pub next_step: WizardStep,
}

/// Shapes a parsed résumé for the wizard of `role_id`.
pub fn build_import(parsed: ParsedResume, role_id: &str) -> ResumeImport {
    let skills = split_skills(&parsed.skills);
    let all_skills: Vec<String> = skills
        .technical_skills
        .iter()
        .chain(&skills.soft_skills)
        .cloned()
        .collect();

    ResumeImport {
        profile: ProfileFields {
            full_name: parsed.full_name.trim().to_string(),
            profession: parsed.profession.trim().to_string(),
            bio: parsed.bio.trim().to_string(),
            email: parsed.email.trim().to_string(),
            phone: parsed.phone.trim().to_string(),
            location: parsed.location.trim().to_string(),
            linkedin_url: parsed.linkedin_url.trim().to_string(),
            ..ProfileFields::default()
        },
        theme_suggestion: suggest_themes(&all_skills),
        skills,
        education: parsed
            .education
            .into_iter()
            .filter(|e| !e.degree.trim().is_empty() || !e.institution.trim().is_empty())
            .collect(),
        experience: parsed
            .experience
            .into_iter()
            .filter(|e| !e.title.trim().is_empty())
            .collect(),
        projects: parsed
            .projects
            .into_iter()
            .filter(|p| !p.title.trim().is_empty())
            .collect(),
        next_step: next_step(role_id, WizardStep::Resume, StepEvent::ResumeUploaded)
            .unwrap_or(WizardStep::PersonalInfo),
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Returns a fixed result, or fails as an unreadable document.
    pub struct StubParser {
        pub result: Option<ParsedResume>,
    }

    #[async_trait]
    impl ResumeParser for StubParser {
        async fn parse(&self, _user_id: Uuid, file: &ResumeFile) -> Result<ParsedResume, AppError> {
            self.result
                .clone()
                .ok_or_else(|| AppError::ResumeParse(format!("could not read '{}'", file.file_name)))
        }
    }
}
