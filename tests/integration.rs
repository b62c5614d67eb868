//! End-to-end tests: build a record, render it, share it, decode it back.

use chrono::Datelike;
use pretty_assertions::assert_eq;

use folio_render::{
    PortfolioBuilder, PortfolioRecord, ProjectEntry, StyleSelection, share, share_url,
    shared_record, split_technologies, style,
};

fn sample_record() -> PortfolioRecord {
    PortfolioBuilder::new()
        .name("Ada Lovelace")
        .tagline("Analyst & Metaphysician")
        .bio("Wrote the first published algorithm for the Analytical Engine.")
        .profile_pic_url("https://example.com/ada.png")
        .email("ada@example.com")
        .linkedin("https://www.linkedin.com/in/ada")
        .github("https://github.com/ada")
        .skills(["Mathematics", "Analysis", "Poetry"])
        .project(ProjectEntry {
            title: "Analytical Engine Notes".into(),
            description: "Annotated translation, including Note G.".into(),
            image_url: "https://example.com/engine.png".into(),
            live_url: "https://engine.example".into(),
            repo_url: "https://github.com/ada/notes".into(),
            technologies: split_technologies("Brass, Punch cards, Algebra"),
        })
        .project(ProjectEntry {
            title: "Flyology".into(),
            description: "Early flight studies.".into(),
            ..Default::default()
        })
        .color_theme("purple")
        .layout_style("classic")
        .font_style("playfair")
        .animation_style("slide")
        .build()
}

#[test]
fn full_document_renders_every_section() {
    let html = sample_record().to_html_page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Ada Lovelace's Portfolio</title>"));
    assert!(html.contains("cdn.tailwindcss.com"));
    assert!(html.contains("fonts.googleapis.com"));
    assert!(html.contains("family=Playfair"));

    for id in ["about", "contact", "skills", "projects"] {
        assert_eq!(
            html.matches(&format!("id=\"{id}\"")).count(),
            1,
            "section '{id}' should appear exactly once"
        );
    }

    // Style selection flowed through: purple gradient, classic cards, slide-up.
    assert!(html.contains("from-purple-600"));
    assert!(html.contains("border-gray-300"));
    assert!(html.contains("@keyframes folio-slide-up"));

    // Project sub-blocks.
    assert!(html.contains("Analytical Engine Notes"));
    assert!(html.contains(">Live Demo</a>"));
    assert!(html.contains(">Source Code</a>"));
    assert!(html.contains(">Punch cards</span>"));

    // Footer carries the current year.
    let year = chrono::Local::now().year();
    assert!(html.contains(&format!("&copy; {year} Ada Lovelace")));
}

#[test]
fn minimal_document_omits_conditional_sections() {
    let html = PortfolioRecord::default().to_html_page();
    assert!(html.contains("Your Name"));
    for id in ["about", "contact", "skills", "projects"] {
        assert!(!html.contains(&format!("id=\"{id}\"")), "unexpected section '{id}'");
    }
}

#[test]
fn same_day_renders_are_byte_identical() {
    let record = sample_record();
    assert_eq!(record.to_html_page(), record.to_html_page());
}

#[test]
fn share_link_round_trip() {
    let record = sample_record();
    let url = share_url("https://folio.example/app", &record);
    assert!(url.contains("?data="));
    assert!(url.ends_with("#preview"));

    let decoded = shared_record(&url).expect("share URL should decode");
    assert_eq!(decoded, record);

    // The shared record renders the same document the original does.
    assert_eq!(decoded.to_html_page(), record.to_html_page());
}

#[test]
fn share_token_survives_unicode() {
    let record = PortfolioBuilder::new()
        .name("Åsa Löfström")
        .tagline("日本語のタグライン")
        .bio("Emoji résumé 🚀")
        .build();
    let decoded = share::decode(&record.share_token()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn malformed_share_urls_fall_back_to_interactive_mode() {
    assert!(shared_record("https://folio.example/app").is_none());
    assert!(shared_record("https://folio.example/app?data=garbage#preview").is_none());
    // Valid token, wrong fragment gate.
    let token = sample_record().share_token();
    assert!(shared_record(&format!("https://folio.example/app?data={token}")).is_none());
}

#[test]
fn unknown_style_values_render_with_defaults() {
    let record = PortfolioBuilder::new()
        .name("Ada")
        .style(StyleSelection {
            color_theme: "ultraviolet".into(),
            layout_style: "baroque".into(),
            font_style: "wingdings".into(),
            animation_style: "spin".into(),
        })
        .build();
    let html = record.to_html_page();
    assert!(html.contains("from-blue-600"), "default blue gradient expected");
    assert!(html.contains("family=Inter"), "default Inter font expected");
    assert!(html.contains("@keyframes folio-fade-in"), "default fade expected");
}

#[test]
fn every_catalog_combination_resolves() {
    for theme in style::available_color_themes() {
        for layout in style::available_layouts() {
            for font in style::available_fonts() {
                for animation in style::available_animations() {
                    let resolved = style::resolve(&StyleSelection {
                        color_theme: theme.to_string(),
                        layout_style: layout.to_string(),
                        font_style: font.to_string(),
                        animation_style: animation.to_string(),
                    });
                    assert!(!resolved.color.primary.is_empty());
                    assert!(!resolved.layout.container.is_empty());
                    assert!(!resolved.font.stack.is_empty());
                    assert!(!resolved.animation.name.is_empty());
                }
            }
        }
    }
}

#[test]
fn injection_attempt_is_neutralized_end_to_end() {
    let url = share_url(
        "https://folio.example/app",
        &PortfolioBuilder::new()
            .name("<img src=x onerror=alert(1)>")
            .bio("<script>steal()</script>")
            .build(),
    );
    let html = shared_record(&url).expect("decodes").to_html_page();
    assert!(!html.contains("<script>steal()"));
    assert!(!html.contains("<img src=x"));
    assert!(html.contains("&lt;script&gt;"));
}
