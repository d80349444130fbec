// src/render/page.rs
//! HTML layout for the CV page: header, navigation, summary, experience,
//! education, skills, projects and certifications, in that fixed order.

use crate::state::{ChromeVisibility, Theme};
use crate::types::cv_data::{CvDocument, SectionLabels};

/// Escape text interpolated into markup.
fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Placeholder body used by the Loading and Error states.
pub fn render_placeholder(message: &str) -> String {
    format!(
        "<div class=\"container\">\n  <p>{}</p>\n</div>\n",
        escape(message)
    )
}

/// Full Ready-state layout.
pub fn render_page(
    document: &CvDocument,
    labels: &SectionLabels,
    theme: Theme,
    chrome: ChromeVisibility,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(&format!("<div class=\"app {}\">\n", theme.css_class()));
    render_header(&mut html, document, chrome);

    html.push_str("<main class=\"container\">\n");
    if chrome.nav {
        render_nav(&mut html, labels);
    }
    if document.has_summary() {
        render_summary(&mut html, document);
    }
    render_experience(&mut html, document, labels);
    render_education(&mut html, document, labels);
    render_skills(&mut html, document, labels);
    if document.has_projects() {
        render_projects(&mut html, document, labels);
    }
    if document.has_certifications() {
        render_certifications(&mut html, document, labels);
    }
    html.push_str("</main>\n");

    html.push_str("</div>\n");
    html
}

fn render_header(html: &mut String, document: &CvDocument, chrome: ChromeVisibility) {
    html.push_str("<header class=\"header\">\n<div class=\"container\">\n");
    html.push_str("<div class=\"header-content\">\n<div>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&document.personal.name)));
    if let Some(location) = &document.personal.location {
        html.push_str(&format!(
            "<p class=\"contact-info\">{}</p>\n",
            escape(location)
        ));
    }
    html.push_str("</div>\n");

    if chrome.header_actions {
        html.push_str("<div class=\"header-actions\">\n");
        html.push_str("<button class=\"download-btn\" data-action=\"export\">Download PDF</button>\n");
        html.push_str("<select data-action=\"language\">\n");
        html.push_str("<option value=\"en\">English</option>\n");
        html.push_str("<option value=\"fr\">Fran&ccedil;ais</option>\n");
        html.push_str("<option value=\"it\">Italiano</option>\n");
        html.push_str("</select>\n");
        html.push_str("<button data-action=\"theme\">Theme</button>\n");
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</div>\n</header>\n");
}

fn render_nav(html: &mut String, labels: &SectionLabels) {
    // Navigation always lists all five sections, even when a section below
    // is omitted for lack of content; a dangling anchor is acceptable.
    html.push_str("<nav class=\"nav\">\n");
    for (anchor, label) in [
        ("experience", &labels.experience),
        ("education", &labels.education),
        ("skills", &labels.skills),
        ("projects", &labels.projects),
        ("certifications", &labels.certifications),
    ] {
        html.push_str(&format!(
            "<a href=\"#{}\">{}</a>\n",
            anchor,
            escape(label)
        ));
    }
    html.push_str("</nav>\n");
}

fn render_summary(html: &mut String, document: &CvDocument) {
    html.push_str("<section class=\"summary\">\n");
    if let Some(summary) = &document.summary {
        html.push_str(&format!("<p>{}</p>\n", escape(summary)));
    }
    html.push_str("</section>\n");
}

fn render_technologies(html: &mut String, technologies: &[String]) {
    html.push_str("<div class=\"technologies\">\n");
    // The technology string itself is the per-badge key; duplicates within
    // one entry are a data-quality problem the validator reports.
    for tech in technologies {
        html.push_str(&format!(
            "<span class=\"tech-badge\">{}</span>\n",
            escape(tech)
        ));
    }
    html.push_str("</div>\n");
}

fn render_experience(html: &mut String, document: &CvDocument, labels: &SectionLabels) {
    html.push_str("<section class=\"section\">\n");
    html.push_str(&format!(
        "<h2 id=\"experience\">{}</h2>\n",
        escape(&labels.experience)
    ));
    for exp in &document.experience {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!(
            "<h3>{} <span class=\"company\">@ {}</span></h3>\n",
            escape(&exp.title),
            escape(&exp.company)
        ));
        let meta = match &exp.location {
            Some(location) => format!("{} | {}", exp.period, location),
            None => exp.period.clone(),
        };
        html.push_str(&format!("<p class=\"meta\">{}</p>\n", escape(&meta)));
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape(&exp.description)
        ));
        if let Some(technologies) = &exp.technologies {
            if !technologies.is_empty() {
                render_technologies(html, technologies);
            }
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_education(html: &mut String, document: &CvDocument, labels: &SectionLabels) {
    html.push_str("<section class=\"section\">\n");
    html.push_str(&format!(
        "<h2 id=\"education\">{}</h2>\n",
        escape(&labels.education)
    ));
    for edu in &document.education {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&edu.degree)));
        let meta = match (&edu.school, edu.graduation_year) {
            (Some(school), Some(year)) => format!("{} ({})", school, year),
            (Some(school), None) => school.clone(),
            (None, Some(year)) => year.to_string(),
            (None, None) => String::new(),
        };
        if !meta.is_empty() {
            html.push_str(&format!("<p class=\"meta\">{}</p>\n", escape(&meta)));
        }
        if let Some(description) = &edu.description {
            html.push_str(&format!(
                "<p class=\"description\">{}</p>\n",
                escape(description)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_skills(html: &mut String, document: &CvDocument, labels: &SectionLabels) {
    html.push_str("<section class=\"section\">\n");
    html.push_str(&format!(
        "<h2 id=\"skills\">{}</h2>\n",
        escape(&labels.skills)
    ));
    html.push_str("<div class=\"skills-grid\">\n");
    for group in &document.skills {
        html.push_str("<div class=\"skill-category\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&group.category)));
        html.push_str("<ul>\n");
        for item in &group.items {
            html.push_str(&format!("<li>{}</li>\n", escape(item)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</div>\n</section>\n");
}

fn render_projects(html: &mut String, document: &CvDocument, labels: &SectionLabels) {
    let projects = document.projects.as_deref().unwrap_or_default();

    html.push_str("<section class=\"section\">\n");
    html.push_str(&format!(
        "<h2 id=\"projects\">{}</h2>\n",
        escape(&labels.projects)
    ));
    for project in projects {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&project.title)));
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape(&project.description)
        ));
        if let Some(technologies) = &project.technologies {
            if !technologies.is_empty() {
                render_technologies(html, technologies);
            }
        }
        if let Some(url) = &project.url {
            // New browsing context without opener back-reference.
            html.push_str(&format!(
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>\n",
                escape(url),
                escape(url)
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

fn render_certifications(html: &mut String, document: &CvDocument, labels: &SectionLabels) {
    let certifications = document.certifications.as_deref().unwrap_or_default();

    html.push_str("<section class=\"section\">\n");
    html.push_str(&format!(
        "<h2 id=\"certifications\">{}</h2>\n",
        escape(&labels.certifications)
    ));
    for cert in certifications {
        html.push_str("<div class=\"entry\">\n");
        html.push_str(&format!("<h3>{}</h3>\n", escape(&cert.title)));
        let meta = match cert.issued_date {
            Some(date) => format!("{} | {}", cert.issuer, date),
            None => cert.issuer.clone(),
        };
        html.push_str(&format!("<p class=\"meta\">{}</p>\n", escape(&meta)));
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");
}

// ===== Standalone Export Document =====

const STYLESHEET: &str = r#"
body {
  font-family: 'Inter', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  line-height: 1.6;
  color: #1a1a1a;
  margin: 0;
  background: #ffffff;
}
.container { max-width: 900px; margin: 0 auto; padding: 0 20px; }
.header { border-bottom: 3px solid #2563eb; padding: 20px 0; }
.header-content { display: flex; justify-content: space-between; align-items: center; }
h1 { color: #1e293b; margin: 0 0 8px 0; font-size: 32px; font-weight: 700; }
.contact-info { color: #64748b; font-size: 14px; margin: 0; }
.nav { display: flex; gap: 20px; padding: 16px 0; }
.nav a { color: #2563eb; text-decoration: none; font-weight: 500; }
h2 {
  color: #0f172a; font-size: 18px; font-weight: 600;
  margin: 35px 0 15px 0; text-transform: uppercase; letter-spacing: 1px;
  border-bottom: 2px solid #e2e8f0; padding-bottom: 8px;
}
.entry { margin-bottom: 20px; page-break-inside: avoid; }
.entry h3 { font-size: 16px; color: #1e293b; margin: 0 0 4px 0; }
.company { font-weight: 500; font-size: 14px; color: #2563eb; }
.meta { color: #64748b; font-size: 13px; margin: 0 0 8px 0; }
.description { font-size: 14px; color: #374151; margin: 0; }
.skills-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
.skill-category h3 {
  font-size: 14px; color: #1e293b; margin-bottom: 8px;
  text-transform: uppercase; letter-spacing: 0.5px;
}
.skill-category ul { font-size: 13px; color: #64748b; margin: 0; padding-left: 18px; }
.technologies { margin-top: 8px; }
.tech-badge {
  background: #2563eb; color: white; padding: 2px 8px; border-radius: 12px;
  font-size: 11px; font-weight: 500; margin-right: 6px; display: inline-block;
}
a { color: #2563eb; text-decoration: none; }
.app.dark { background: #0f172a; color: #e2e8f0; }
.app.dark h1, .app.dark h2, .app.dark .entry h3 { color: #e2e8f0; }
"#;

/// Wrap a rendered body into a standalone document for the PDF engine,
/// injecting the page geometry rule the export configuration prescribes.
pub fn export_document(body: &str, page_rule: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n\
         <style>\n{}\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        STYLESHEET, page_rule, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <lead>"), "R&amp;D &lt;lead&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_placeholder_names_no_sections() {
        let html = render_placeholder("Loading...");
        assert!(html.contains("Loading..."));
        assert!(!html.contains("<nav"));
        assert!(!html.contains("<section"));
    }
}
