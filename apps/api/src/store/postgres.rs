use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::{
    Achievement, Education, NewPortfolio, ProfileRow, Project, SkillRow,
};
use crate::skills::SkillKind;
use crate::store::PortfolioStore;

/// Idempotent schema, applied at startup.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS profiles (
        id                UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id           UUID NOT NULL UNIQUE,
        full_name         TEXT NOT NULL,
        profession        TEXT NOT NULL,
        bio               TEXT NOT NULL,
        email             TEXT NOT NULL,
        phone             TEXT NOT NULL DEFAULT '',
        location          TEXT NOT NULL DEFAULT '',
        linkedin_url      TEXT NOT NULL DEFAULT '',
        github_url        TEXT NOT NULL DEFAULT '',
        website_url       TEXT NOT NULL DEFAULT '',
        profile_image_url TEXT NOT NULL DEFAULT '',
        job_role          TEXT NOT NULL,
        theme             TEXT NOT NULL,
        is_fresher        BOOLEAN NOT NULL DEFAULT FALSE,
        design_variant    JSONB,
        created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at        TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id       UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id  UUID NOT NULL,
        position INT NOT NULL,
        name     TEXT NOT NULL,
        kind     TEXT NOT NULL CHECK (kind IN ('technical', 'soft'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id     UUID NOT NULL,
        position    INT NOT NULL,
        title       TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        tech_stack  TEXT[] NOT NULL DEFAULT '{}',
        project_url TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS education (
        id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id     UUID NOT NULL,
        position    INT NOT NULL,
        degree      TEXT NOT NULL,
        institution TEXT NOT NULL,
        year        TEXT NOT NULL DEFAULT '',
        gpa         TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS achievements (
        id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id     UUID NOT NULL,
        position    INT NOT NULL,
        title       TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT ''
    )
    "#,
];

const CHILD_TABLES: [&str; 4] = ["skills", "projects", "education", "achievements"];

pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    /// Connects, then makes sure the tables exist.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await?;
        }

        info!("PostgreSQL connection pool established, schema ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    async fn find_profile(&self, profile_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE id = $1")
                .bind(profile_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_profile_by_user(&self, user_id: Uuid) -> Result<Option<ProfileRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRow>("SELECT * FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn replace_portfolio(&self, portfolio: &NewPortfolio) -> Result<ProfileRow, AppError> {
        let user_id = portfolio.user_id;
        let fields = &portfolio.profile;
        let variant = serde_json::to_value(portfolio.design_variant)
            .map_err(|e| AppError::Internal(e.into()))?;

        let mut tx = self.pool.begin().await?;

        // Variant is write-once: an existing value always survives the upsert.
        let profile = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles
                (user_id, full_name, profession, bio, email, phone, location,
                 linkedin_url, github_url, website_url, profile_image_url,
                 job_role, theme, is_fresher, design_variant)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                profession = EXCLUDED.profession,
                bio = EXCLUDED.bio,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                linkedin_url = EXCLUDED.linkedin_url,
                github_url = EXCLUDED.github_url,
                website_url = EXCLUDED.website_url,
                profile_image_url = EXCLUDED.profile_image_url,
                job_role = EXCLUDED.job_role,
                theme = EXCLUDED.theme,
                is_fresher = EXCLUDED.is_fresher,
                design_variant = COALESCE(profiles.design_variant, EXCLUDED.design_variant),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&fields.full_name)
        .bind(&fields.profession)
        .bind(&fields.bio)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(&fields.location)
        .bind(&fields.linkedin_url)
        .bind(&fields.github_url)
        .bind(&fields.website_url)
        .bind(&fields.profile_image_url)
        .bind(&portfolio.job_role)
        .bind(&portfolio.theme)
        .bind(portfolio.is_fresher)
        .bind(&variant)
        .fetch_one(&mut *tx)
        .await?;

        // Full replace: delete every related record, then reinsert.
        for table in CHILD_TABLES {
            sqlx::query(&format!("DELETE FROM {table} WHERE user_id = $1"))
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        let skills = portfolio
            .skills
            .technical_skills
            .iter()
            .map(|s| (s, SkillKind::Technical.as_str()))
            .chain(
                portfolio
                    .skills
                    .soft_skills
                    .iter()
                    .map(|s| (s, SkillKind::Soft.as_str())),
            );
        for (position, (name, kind)) in skills.enumerate() {
            sqlx::query("INSERT INTO skills (user_id, position, name, kind) VALUES ($1, $2, $3, $4)")
                .bind(user_id)
                .bind(position as i32)
                .bind(name)
                .bind(kind)
                .execute(&mut *tx)
                .await?;
        }

        for (position, project) in portfolio.projects.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO projects (user_id, position, title, description, tech_stack, project_url)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user_id)
            .bind(position as i32)
            .bind(&project.title)
            .bind(&project.description)
            .bind(&project.tech_stack)
            .bind(&project.project_url)
            .execute(&mut *tx)
            .await?;
        }

        for (position, edu) in portfolio.education.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO education (user_id, position, degree, institution, year, gpa)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(user_id)
            .bind(position as i32)
            .bind(&edu.degree)
            .bind(&edu.institution)
            .bind(&edu.year)
            .bind(&edu.gpa)
            .execute(&mut *tx)
            .await?;
        }

        for (position, achievement) in portfolio.achievements.iter().enumerate() {
            sqlx::query(
                "INSERT INTO achievements (user_id, position, title, description) VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id)
            .bind(position as i32)
            .bind(&achievement.title)
            .bind(&achievement.description)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(
            "Saved portfolio {} for user {user_id} (role {}, theme {})",
            profile.id, portfolio.job_role, portfolio.theme
        );
        Ok(profile)
    }

    async fn skills(&self, user_id: Uuid) -> Result<Vec<SkillRow>, AppError> {
        Ok(sqlx::query_as::<_, SkillRow>(
            "SELECT name, kind FROM skills WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn projects(&self, user_id: Uuid) -> Result<Vec<Project>, AppError> {
        Ok(sqlx::query_as::<_, Project>(
            r#"
            SELECT title, description, tech_stack, project_url
            FROM projects
            WHERE user_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn education(&self, user_id: Uuid) -> Result<Vec<Education>, AppError> {
        Ok(sqlx::query_as::<_, Education>(
            "SELECT degree, institution, year, gpa FROM education WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn achievements(&self, user_id: Uuid) -> Result<Vec<Achievement>, AppError> {
        Ok(sqlx::query_as::<_, Achievement>(
            "SELECT title, description FROM achievements WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
