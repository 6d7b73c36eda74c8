//! Section Renderer — turns resolved design tokens, a role's section order and
//! the user's content into an ordered page plan.
//!
//! A section is emitted only when its backing content is non-empty; the nav is
//! derived from the same list, so an empty section never leaves a dangling link
//! or a gap in the ordering.

use url::Url;
use serde::Serialize;
use tracing::warn;

use crate::design::engine::ResolvedDesign;
use crate::design::roles::{Section, SectionOrder};
use crate::portfolio::models::{Achievement, Education, PortfolioContent, Project};

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub section: Section,
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub kind: &'static str,
    pub label: &'static str,
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    About {
        bio: String,
    },
    Projects {
        projects: Vec<Project>,
    },
    Skills {
        technical: Vec<String>,
        soft: Vec<String>,
    },
    Education {
        entries: Vec<Education>,
    },
    Achievements {
        entries: Vec<Achievement>,
    },
    Contact {
        links: Vec<ContactLink>,
    },
}

/// Class tokens applied to one rendered section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStyle {
    pub container: String,
    pub heading: String,
    pub body: String,
    pub card: String,
    pub badge: String,
    pub accent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub section: Section,
    pub title: &'static str,
    pub style: SectionStyle,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub full_name: String,
    pub profession: String,
    pub location: String,
    pub profile_image_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioPage {
    pub profile_id: uuid::Uuid,
    pub job_role: String,
    pub theme: String,
    pub hero: Hero,
    pub design: ResolvedDesign,
    pub nav: Vec<NavLink>,
    pub sections: Vec<RenderedSection>,
}

impl PortfolioPage {
    pub fn section_ids(&self) -> Vec<Section> {
        self.sections.iter().map(|s| s.section).collect()
    }
}

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

fn section_style(design: &ResolvedDesign) -> SectionStyle {
    SectionStyle {
        container: format!(
            "{} animate-{}",
            design.section_background, design.animation
        ),
        heading: format!("{} {}", design.heading, design.accent_primary),
        body: design.body.clone(),
        card: format!("{} {}", design.card, design.accent_glow),
        badge: design.badge.clone(),
        accent: design.accent_gradient.clone(),
    }
}

/// Normalizes a user-supplied link for use in `href`/`src`. Only http(s)
/// survives; a bare host like `github.com/ada` is read as https.
pub fn web_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{raw}")).ok()?
        }
        Err(_) => return None,
    };
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Some(url.to_string()),
        scheme => {
            warn!("Dropping link with disallowed scheme '{scheme}'");
            None
        }
    }
}

fn contact_links(content: &PortfolioContent) -> Vec<ContactLink> {
    let p = &content.profile;
    let email = p.email.trim();
    let phone = p.phone.trim();
    let candidates = [
        ("email", "Email", email, (!email.is_empty()).then(|| format!("mailto:{email}"))),
        ("phone", "Phone", phone, (!phone.is_empty()).then(|| format!("tel:{phone}"))),
        ("linkedin", "LinkedIn", p.linkedin_url.trim(), web_url(&p.linkedin_url)),
        ("github", "GitHub", p.github_url.trim(), web_url(&p.github_url)),
        ("website", "Website", p.website_url.trim(), web_url(&p.website_url)),
    ];
    candidates
        .into_iter()
        .filter_map(|(kind, label, text, href)| {
            href.map(|href| ContactLink {
                kind,
                label,
                href,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Builds the body for `section`, or `None` when it has nothing to show.
fn section_body(section: Section, content: &PortfolioContent) -> Option<SectionBody> {
    match section {
        Section::About => non_blank(&content.profile.bio).then(|| SectionBody::About {
            bio: content.profile.bio.trim().to_string(),
        }),
        Section::Projects => {
            let projects: Vec<Project> = content
                .projects
                .iter()
                .filter(|p| non_blank(&p.title))
                .map(|p| Project {
                    project_url: web_url(&p.project_url).unwrap_or_default(),
                    ..p.clone()
                })
                .collect();
            (!projects.is_empty()).then_some(SectionBody::Projects { projects })
        }
        Section::Skills => {
            let skills = &content.skills;
            (!skills.technical_skills.is_empty() || !skills.soft_skills.is_empty()).then(|| {
                SectionBody::Skills {
                    technical: skills.technical_skills.clone(),
                    soft: skills.soft_skills.clone(),
                }
            })
        }
        Section::Education => {
            let entries: Vec<Education> = content
                .education
                .iter()
                .filter(|e| non_blank(&e.degree) || non_blank(&e.institution))
                .cloned()
                .collect();
            (!entries.is_empty()).then_some(SectionBody::Education { entries })
        }
        Section::Achievements => {
            let entries: Vec<Achievement> = content
                .achievements
                .iter()
                .filter(|a| non_blank(&a.title))
                .cloned()
                .collect();
            (!entries.is_empty()).then_some(SectionBody::Achievements { entries })
        }
        Section::Contact => {
            let links = contact_links(content);
            (!links.is_empty()).then_some(SectionBody::Contact { links })
        }
    }
}

/// Lays out the page: sections in `order`, empty ones dropped, nav derived
/// from what remains.
pub fn build_page(
    order: &SectionOrder,
    design: ResolvedDesign,
    content: &PortfolioContent,
) -> PortfolioPage {
    let style = section_style(&design);

    let sections: Vec<RenderedSection> = order
        .iter()
        .filter_map(|section| {
            section_body(*section, content).map(|body| RenderedSection {
                section: *section,
                title: section.title(),
                style: style.clone(),
                body,
            })
        })
        .collect();

    let nav = sections
        .iter()
        .map(|s| NavLink {
            section: s.section,
            label: s.title,
            href: format!("#{}", s.section.as_str()),
        })
        .collect();

    let profile = &content.profile;
    PortfolioPage {
        profile_id: profile.id,
        job_role: profile.job_role.clone(),
        theme: profile.theme.clone(),
        hero: Hero {
            full_name: profile.full_name.clone(),
            profession: profile.profession.clone(),
            location: profile.location.clone(),
            profile_image_url: web_url(&profile.profile_image_url).unwrap_or_default(),
        },
        design,
        nav,
        sections,
    }
}
