//! Standalone portfolio document renderer.
//!
//! Produces a complete, self-contained HTML page (doctype, head with CDN
//! stylesheet and font references, body) from a [`PortfolioRecord`] and its
//! resolved style. Sections are conditional on their data being present.
//! All user-supplied text is HTML-escaped before interpolation, in text and
//! attribute positions alike.

use chrono::Datelike;

use crate::record::{PortfolioRecord, ProjectEntry};
use crate::style::{self, ResolvedStyle, accent_text_color};

/// Render a record as a complete standalone HTML document.
///
/// The record's style selection is resolved against the catalog first, so
/// unknown style values silently degrade to defaults. The footer copyright
/// year comes from the system clock; everything else is a pure function of
/// the record.
pub fn to_html_page(record: &PortfolioRecord) -> String {
    let resolved = style::resolve(&record.style);
    render_document(record, &resolved, chrono::Local::now().year())
}

/// Compute the suggested download filename for a rendered portfolio.
///
/// The name is lowercased with whitespace runs collapsed to single hyphens;
/// an empty name falls back to `portfolio.html`.
///
/// ```
/// assert_eq!(folio_render::download_filename("Ada Lovelace"), "ada-lovelace.html");
/// assert_eq!(folio_render::download_filename(""), "portfolio.html");
/// ```
pub fn download_filename(name: &str) -> String {
    let slug = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "portfolio.html".to_string()
    } else {
        format!("{slug}.html")
    }
}

fn render_document(record: &PortfolioRecord, resolved: &ResolvedStyle, year: i32) -> String {
    let title = if record.name.is_empty() {
        "My Portfolio".to_string()
    } else {
        format!("{}'s Portfolio", record.name)
    };

    let mut body = String::new();
    body.push_str(&render_header(record, resolved));
    if !record.bio.is_empty() {
        body.push_str(&render_about(record, resolved));
    }
    if record.has_contact() {
        body.push_str(&render_contact(record, resolved));
    }
    if !record.skills.is_empty() {
        body.push_str(&render_skills(record, resolved));
    }
    if !record.projects.is_empty() {
        body.push_str(&render_projects(record, resolved));
    }
    body.push_str(&render_footer(record, year));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="generator" content="folio-render">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="{font_import}" rel="stylesheet">
    <style>{css}</style>
</head>
<body class="text-gray-800">
<div class="{container}">
{body}</div>
</body>
</html>
"#,
        title = escape_html(&title),
        font_import = resolved.font.import,
        css = document_css(resolved),
        container = resolved.layout.container,
        body = body,
    )
}

/// Inline stylesheet: resolved font stack, accent classes, and the entrance
/// animation keyframes. Catalog values are trusted constants; no user text
/// reaches this block.
fn document_css(resolved: &ResolvedStyle) -> String {
    let color = resolved.color;
    let mut css = String::new();
    css.push_str(&format!(
        "body {{ font-family: {}; background-color: #f9fafb; }}\n",
        resolved.font.stack
    ));
    css.push_str(".whitespace-pre-line { white-space: pre-line; }\n");
    css.push_str(&format!(".folio-link {{ color: {}; }}\n", color.primary));
    css.push_str(&format!(".folio-heading {{ color: {}; }}\n", color.secondary));
    css.push_str(&format!(
        ".folio-tag {{ background-color: {}; color: {}; }}\n",
        color.primary,
        accent_text_color(color.primary)
    ));
    let animation = resolved.animation;
    if animation.duration_ms > 0 {
        css.push_str(animation.keyframes);
        css.push('\n');
        css.push_str(&format!(
            ".folio-animate {{ animation: {} {}ms ease-out both; }}\n",
            animation.name, animation.duration_ms
        ));
    }
    css
}

fn render_header(record: &PortfolioRecord, resolved: &ResolvedStyle) -> String {
    let color = resolved.color;
    let name = non_empty(&record.name, "Your Name");
    let tagline = non_empty(&record.tagline, "Welcome to my portfolio");

    let portrait = if record.profile_pic_url.is_empty() {
        String::new()
    } else {
        format!(
            "        <img src=\"{}\" alt=\"{}\" class=\"w-28 h-28 md:w-32 md:h-32 rounded-full mx-auto mb-4 object-cover border-4 border-white shadow-lg\">\n",
            escape_html(&record.profile_pic_url),
            escape_html(name),
        )
    };

    format!(
        "<header class=\"bg-gradient-to-br {from} {to} text-white rounded-lg shadow-md mb-10 md:mb-12 folio-animate\">\n    <div class=\"px-4 py-12 md:py-16 text-center\">\n{portrait}        <h1 class=\"text-3xl md:text-4xl font-bold\">{name}</h1>\n        <p class=\"text-lg md:text-xl opacity-90 mt-1\">{tagline}</p>\n    </div>\n</header>\n",
        from = color.gradient_from,
        to = color.gradient_to,
        portrait = portrait,
        name = escape_html(name),
        tagline = escape_html(tagline),
    )
}

fn render_about(record: &PortfolioRecord, resolved: &ResolvedStyle) -> String {
    format!(
        "<section id=\"about\" class=\"mb-8 md:mb-10 {card} folio-animate\">\n    <h2 class=\"text-2xl font-semibold folio-heading mb-3 border-b pb-2\">About Me</h2>\n    <p class=\"text-gray-600 leading-relaxed whitespace-pre-line\">{bio}</p>\n</section>\n",
        card = resolved.layout.card,
        bio = escape_html(&record.bio),
    )
}

fn render_contact(record: &PortfolioRecord, resolved: &ResolvedStyle) -> String {
    let mut rows = String::new();
    if !record.email.is_empty() {
        rows.push_str(&format!(
            "        <li><strong class=\"font-medium\">Email:</strong> <a href=\"mailto:{email}\" class=\"folio-link hover:underline\">{email}</a></li>\n",
            email = escape_html(&record.email),
        ));
    }
    if !record.linkedin.is_empty() {
        rows.push_str(&contact_row("LinkedIn", &record.linkedin));
    }
    if !record.github.is_empty() {
        rows.push_str(&contact_row("GitHub", &record.github));
    }
    format!(
        "<section id=\"contact\" class=\"mb-8 md:mb-10 {card} folio-animate\">\n    <h2 class=\"text-2xl font-semibold folio-heading mb-3 border-b pb-2\">Contact</h2>\n    <ul class=\"list-none p-0 space-y-2\">\n{rows}    </ul>\n</section>\n",
        card = resolved.layout.card,
        rows = rows,
    )
}

fn contact_row(label: &str, url: &str) -> String {
    format!(
        "        <li><strong class=\"font-medium\">{label}:</strong> <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"folio-link hover:underline\">{text}</a></li>\n",
        label = label,
        href = escape_html(url),
        text = escape_html(display_link(url)),
    )
}

/// Visible label for a profile link: scheme and `www.` prefix stripped.
/// The href keeps the full value.
fn display_link(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

fn render_skills(record: &PortfolioRecord, resolved: &ResolvedStyle) -> String {
    let mut tags = String::new();
    for skill in &record.skills {
        tags.push_str(&format!(
            "        <span class=\"folio-tag px-3 py-1.5 rounded-full text-sm font-medium\">{}</span>\n",
            escape_html(skill),
        ));
    }
    format!(
        "<section id=\"skills\" class=\"mb-8 md:mb-10 {card} folio-animate\">\n    <h2 class=\"text-2xl font-semibold folio-heading mb-4 border-b pb-2\">Skills</h2>\n    <div class=\"flex flex-wrap gap-2\">\n{tags}    </div>\n</section>\n",
        card = resolved.layout.card,
        tags = tags,
    )
}

fn render_projects(record: &PortfolioRecord, resolved: &ResolvedStyle) -> String {
    let mut cards = String::new();
    for project in &record.projects {
        cards.push_str(&render_project_card(project, resolved));
    }
    format!(
        "<section id=\"projects\" class=\"folio-animate\">\n    <h2 class=\"text-2xl font-semibold folio-heading mb-6 border-b pb-2\">Projects</h2>\n    <div class=\"grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8\">\n{cards}    </div>\n</section>\n",
        cards = cards,
    )
}

fn render_project_card(project: &ProjectEntry, resolved: &ResolvedStyle) -> String {
    let title = non_empty(&project.title, "Untitled Project");

    let mut html = format!("        <div class=\"{}\">\n", resolved.layout.card);
    if !project.image_url.is_empty() {
        html.push_str(&format!(
            "            <img src=\"{}\" alt=\"{}\" class=\"w-full h-48 object-cover rounded-md mb-4\">\n",
            escape_html(&project.image_url),
            escape_html(title),
        ));
    }
    html.push_str(&format!(
        "            <h3 class=\"text-xl font-bold text-gray-800 mb-2\">{}</h3>\n",
        escape_html(title),
    ));
    if !project.description.is_empty() {
        html.push_str(&format!(
            "            <p class=\"text-gray-600 mb-3 text-sm whitespace-pre-line\">{}</p>\n",
            escape_html(&project.description),
        ));
    }
    if !project.technologies.is_empty() {
        html.push_str("            <div class=\"mb-3\">\n                <h4 class=\"text-xs font-semibold text-gray-500 uppercase mb-1\">Technologies</h4>\n                <div class=\"flex flex-wrap gap-1\">\n");
        for tech in &project.technologies {
            html.push_str(&format!(
                "                    <span class=\"folio-tag px-2 py-0.5 rounded-full text-xs\">{}</span>\n",
                escape_html(tech),
            ));
        }
        html.push_str("                </div>\n            </div>\n");
    }
    let mut links = String::new();
    if !project.live_url.is_empty() {
        links.push_str(&action_link(&project.live_url, "Live Demo"));
    }
    if !project.repo_url.is_empty() {
        links.push_str(&action_link(&project.repo_url, "Source Code"));
    }
    if !links.is_empty() {
        html.push_str(&format!(
            "            <div class=\"mt-4 flex space-x-3\">\n{links}            </div>\n",
        ));
    }
    html.push_str("        </div>\n");
    html
}

fn action_link(url: &str, label: &str) -> String {
    format!(
        "                <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"folio-link hover:underline text-sm font-medium\">{}</a>\n",
        escape_html(url),
        label,
    )
}

fn render_footer(record: &PortfolioRecord, year: i32) -> String {
    let name = non_empty(&record.name, "Your Name");
    format!(
        "<footer class=\"text-center mt-10 md:mt-16 py-6 border-t border-gray-200\">\n    <p class=\"text-sm text-gray-500\">&copy; {year} {name}. All rights reserved.</p>\n</footer>\n",
        year = year,
        name = escape_html(name),
    )
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Escape HTML special characters to prevent markup injection.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
