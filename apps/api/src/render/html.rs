//! Share-page HTML writer.
//!
//! Pure and deterministic: the same page plan always yields the same bytes.
//! Every piece of user content is escaped; design tokens land in `class`
//! attributes only.

use crate::render::sections::{PortfolioPage, RenderedSection, SectionBody};

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    /// Writes `text` escaped.
    fn text<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(&esc(s));
    }

    fn finish(self) -> String {
        self.buf
    }
}

pub fn render_page_html(page: &PortfolioPage) -> String {
    let mut w = Html::new();
    let design = &page.design;

    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    w.push("<title>");
    w.text(&page.hero.full_name);
    if !page.hero.profession.trim().is_empty() {
        w.push(" | ");
        w.text(&page.hero.profession);
    }
    w.push("</title></head>");

    w.push("<body class=\"");
    w.text(&design.background);
    w.push("\" data-theme=\"");
    w.text(&page.theme);
    w.push("\" data-role=\"");
    w.text(&page.job_role);
    w.push("\">");

    if design.show_particles {
        w.push("<div class=\"particles\" aria-hidden=\"true\"></div>");
    }
    if design.show_grid {
        w.push("<div class=\"grid-overlay\" aria-hidden=\"true\"></div>");
    }

    w.push("<div class=\"layout layout-");
    w.text(&design.layout);
    w.push("\">");

    write_nav(&mut w, page);
    write_hero(&mut w, page);

    w.push("<main>");
    for section in &page.sections {
        write_section(&mut w, section);
    }
    w.push("</main>");

    w.push("</div></body></html>");
    w.finish()
}

fn write_nav(w: &mut Html, page: &PortfolioPage) {
    if page.nav.is_empty() {
        return;
    }
    w.push("<nav><ul>");
    for link in &page.nav {
        w.push("<li><a href=\"");
        w.text(&link.href);
        w.push("\">");
        w.text(link.label);
        w.push("</a></li>");
    }
    w.push("</ul></nav>");
}

fn write_hero(w: &mut Html, page: &PortfolioPage) {
    let design = &page.design;
    let hero = &page.hero;

    w.push("<header class=\"hero animate-");
    w.text(&design.animation);
    w.push("\">");
    if !hero.profile_image_url.trim().is_empty() {
        w.push("<img class=\"avatar\" src=\"");
        w.text(hero.profile_image_url.trim());
        w.push("\" alt=\"");
        w.text(&hero.full_name);
        w.push("\">");
    }
    w.push("<h1 class=\"");
    w.text(format!("{} {}", design.heading, design.accent_gradient));
    w.push("\">");
    w.text(&hero.full_name);
    w.push("</h1><p class=\"");
    w.text(&design.body);
    w.push("\">");
    w.text(&hero.profession);
    w.push("</p>");
    if !hero.location.trim().is_empty() {
        w.push("<p class=\"location\">");
        w.text(&hero.location);
        w.push("</p>");
    }
    w.push("</header>");
}

fn write_badges(w: &mut Html, class: &str, items: &[String]) {
    w.push("<ul class=\"badges\">");
    for item in items {
        w.push("<li class=\"");
        w.text(class);
        w.push("\">");
        w.text(item);
        w.push("</li>");
    }
    w.push("</ul>");
}

fn write_section(w: &mut Html, section: &RenderedSection) {
    let style = &section.style;
    let id = section.section.as_str();

    w.push("<section id=\"");
    w.push(id);
    w.push("\" class=\"");
    w.text(&style.container);
    w.push("\" aria-labelledby=\"h-");
    w.push(id);
    w.push("\"><h2 id=\"h-");
    w.push(id);
    w.push("\" class=\"");
    w.text(&style.heading);
    w.push("\">");
    w.text(section.title);
    w.push("</h2>");

    match &section.body {
        SectionBody::About { bio } => {
            w.push("<p class=\"");
            w.text(&style.body);
            w.push("\">");
            w.text(bio);
            w.push("</p>");
        }
        SectionBody::Projects { projects } => {
            for project in projects {
                w.push("<article class=\"");
                w.text(&style.card);
                w.push("\"><h3>");
                w.text(&project.title);
                w.push("</h3>");
                if !project.description.trim().is_empty() {
                    w.push("<p>");
                    w.text(&project.description);
                    w.push("</p>");
                }
                if !project.tech_stack.is_empty() {
                    write_badges(w, &style.badge, &project.tech_stack);
                }
                if !project.project_url.trim().is_empty() {
                    w.push("<a href=\"");
                    w.text(project.project_url.trim());
                    w.push("\">View project</a>");
                }
                w.push("</article>");
            }
        }
        SectionBody::Skills { technical, soft } => {
            if !technical.is_empty() {
                w.push("<h3>Technical</h3>");
                write_badges(w, &style.badge, technical);
            }
            if !soft.is_empty() {
                w.push("<h3>Soft skills</h3>");
                write_badges(w, &style.badge, soft);
            }
        }
        SectionBody::Education { entries } => {
            for edu in entries {
                w.push("<article class=\"");
                w.text(&style.card);
                w.push("\"><h3>");
                w.text(&edu.degree);
                w.push("</h3><p>");
                w.text(&edu.institution);
                w.push("</p>");
                let meta: Vec<&str> = [edu.year.trim(), edu.gpa.trim()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect();
                if !meta.is_empty() {
                    w.push("<p class=\"meta\">");
                    w.text(meta.join(" · "));
                    w.push("</p>");
                }
                w.push("</article>");
            }
        }
        SectionBody::Achievements { entries } => {
            w.push("<ul>");
            for achievement in entries {
                w.push("<li><strong>");
                w.text(&achievement.title);
                w.push("</strong>");
                if !achievement.description.trim().is_empty() {
                    w.push(" ");
                    w.text(&achievement.description);
                }
                w.push("</li>");
            }
            w.push("</ul>");
        }
        SectionBody::Contact { links } => {
            w.push("<ul class=\"contact\">");
            for link in links {
                w.push("<li data-kind=\"");
                w.push(link.kind);
                w.push("\"><a href=\"");
                w.text(&link.href);
                w.push("\">");
                w.text(&link.text);
                w.push("</a></li>");
            }
            w.push("</ul>");
        }
    }

    w.push("</section>");
}

fn esc<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::engine::resolve;
    use crate::design::roles::design_config;
    use crate::render::sections::build_page;
    use crate::render::sections::tests::make_content;

    fn render(content: &crate::portfolio::models::PortfolioContent) -> String {
        let config = design_config(&content.profile.job_role);
        let page = build_page(
            &config.section_order,
            resolve(&content.profile.job_role, None),
            content,
        );
        render_page_html(&page)
    }

    #[test]
    fn test_escapes_user_content() {
        let mut content = make_content();
        content.profile.bio = "<script>alert('x')</script> & more".to_string();
        let html = render(&content);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_script_urls_are_not_linked() {
        let mut content = make_content();
        content.profile.website_url = "javascript:alert(document.cookie)".to_string();
        content.projects[0].project_url = "javascript:alert(1)".to_string();
        let html = render(&content);
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"https://github.com/ada\""));
        assert!(!html.contains("View project"));
    }

    #[test]
    fn test_sections_follow_page_order() {
        let html = render(&make_content());
        let about = html.find("id=\"about\"").unwrap();
        let projects = html.find("id=\"projects\"").unwrap();
        let contact = html.find("id=\"contact\"").unwrap();
        assert!(about < projects && projects < contact);
        assert!(!html.contains("id=\"achievements\""));
        assert!(!html.contains("href=\"#achievements\""));
    }

    #[test]
    fn test_output_is_deterministic() {
        let content = make_content();
        assert_eq!(render(&content), render(&content));
    }

    #[test]
    fn test_design_tokens_applied() {
        let content = make_content();
        let design = resolve(&content.profile.job_role, None);
        let html = render(&content);
        assert!(html.contains(&format!("class=\"layout layout-{}\"", design.layout)));
        assert!(html.contains(&format!("animate-{}", design.animation)));
    }

    #[test]
    fn test_esc() {
        assert_eq!(esc("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
    }
}
