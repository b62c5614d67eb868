//! Portfolio record model and collection-time normalization.
//!
//! A [`PortfolioRecord`] is the single structured input to rendering. It is
//! constructed fresh from form state (via [`PortfolioBuilder`]) or decoded
//! from a share token immediately before rendering, and discarded after —
//! there is no persistence and no identity beyond field values.
//!
//! Field names serialize as camelCase so share tokens carry the same JSON
//! shape the interactive page produces.

use serde::{Deserialize, Serialize};

use crate::style::StyleSelection;

/// Everything the renderer needs to produce a portfolio page.
///
/// All text fields are free-form; absent means empty string. The renderer
/// performs no format validation — emptiness alone decides whether a section
/// appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioRecord {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub profile_pic_url: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Ordered, unique display strings. Uniqueness is enforced at collection
    /// time by [`PortfolioBuilder::skill`], not by the renderer.
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub style: StyleSelection,
}

impl PortfolioRecord {
    /// True if at least one contact channel is set. Drives the contact
    /// section's visibility.
    pub fn has_contact(&self) -> bool {
        !self.email.is_empty() || !self.linkedin.is_empty() || !self.github.is_empty()
    }
}

/// One project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub live_url: String,
    pub repo_url: String,
    /// Trimmed, non-empty tag strings. Usually derived from a comma-delimited
    /// input via [`split_technologies`].
    pub technologies: Vec<String>,
}

/// Split a comma-delimited technologies input into display tags.
///
/// Each segment is trimmed; empty segments are dropped.
///
/// ```
/// let tags = folio_render::record::split_technologies("React, Node.js, SQL");
/// assert_eq!(tags, vec!["React", "Node.js", "SQL"]);
/// ```
pub fn split_technologies(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// -----------------------------------------------------------------------
// PortfolioBuilder
// -----------------------------------------------------------------------

/// Fluent builder for constructing [`PortfolioRecord`]s programmatically.
///
/// Plays the role of the form-state collector: it trims input, keeps skills
/// unique, and drops empty additions, so the record handed to the renderer
/// is already normalized.
///
/// # Example
///
/// ```
/// use folio_render::PortfolioBuilder;
///
/// let record = PortfolioBuilder::new()
///     .name("Ada Lovelace")
///     .tagline("Analyst & Metaphysician")
///     .skill("Mathematics")
///     .skill("Mathematics") // duplicate, ignored
///     .build();
///
/// assert_eq!(record.skills.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    record: PortfolioRecord,
}

impl PortfolioBuilder {
    /// Create a builder over an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record (e.g. one decoded from a share token).
    pub fn from_record(record: PortfolioRecord) -> Self {
        Self { record }
    }

    // -- Personal fields ------------------------------------------------

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.trim().to_string();
        self
    }

    pub fn tagline(mut self, tagline: &str) -> Self {
        self.record.tagline = tagline.trim().to_string();
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.record.bio = bio.trim().to_string();
        self
    }

    pub fn profile_pic_url(mut self, url: &str) -> Self {
        self.record.profile_pic_url = url.trim().to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.email = email.trim().to_string();
        self
    }

    pub fn linkedin(mut self, url: &str) -> Self {
        self.record.linkedin = url.trim().to_string();
        self
    }

    pub fn github(mut self, url: &str) -> Self {
        self.record.github = url.trim().to_string();
        self
    }

    // -- Skills ---------------------------------------------------------

    /// Add one skill. Input is trimmed; empty and duplicate skills are
    /// ignored (first occurrence wins, order preserved).
    pub fn skill(mut self, skill: &str) -> Self {
        let skill = skill.trim();
        if !skill.is_empty() && !self.record.skills.iter().any(|s| s == skill) {
            self.record.skills.push(skill.to_string());
        }
        self
    }

    /// Add several skills, with the same trimming and dedup as [`skill`].
    ///
    /// [`skill`]: PortfolioBuilder::skill
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for s in skills {
            self = self.skill(s.as_ref());
        }
        self
    }

    // -- Projects -------------------------------------------------------

    /// Append a project entry.
    pub fn project(mut self, entry: ProjectEntry) -> Self {
        self.record.projects.push(entry);
        self
    }

    // -- Style ----------------------------------------------------------

    /// Set the whole style selection at once.
    pub fn style(mut self, style: StyleSelection) -> Self {
        self.record.style = style;
        self
    }

    pub fn color_theme(mut self, name: &str) -> Self {
        self.record.style.color_theme = name.to_string();
        self
    }

    pub fn layout_style(mut self, name: &str) -> Self {
        self.record.style.layout_style = name.to_string();
        self
    }

    pub fn font_style(mut self, name: &str) -> Self {
        self.record.style.font_style = name.to_string();
        self
    }

    pub fn animation_style(mut self, name: &str) -> Self {
        self.record.style.animation_style = name.to_string();
        self
    }

    /// Finish and return the record.
    pub fn build(self) -> PortfolioRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_technologies_trims_and_drops_empties() {
        assert_eq!(
            split_technologies("React, Node.js, SQL"),
            vec!["React", "Node.js", "SQL"]
        );
        assert_eq!(split_technologies("  Rust  ,, ,TypeScript"), vec!["Rust", "TypeScript"]);
        assert_eq!(split_technologies(""), Vec::<String>::new());
        assert_eq!(split_technologies(" , , "), Vec::<String>::new());
    }

    #[test]
    fn builder_trims_fields() {
        let record = PortfolioBuilder::new()
            .name("  Ada Lovelace  ")
            .email(" ada@example.com ")
            .build();
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.email, "ada@example.com");
    }

    #[test]
    fn builder_skill_dedup_preserves_order() {
        let record = PortfolioBuilder::new()
            .skill("Rust")
            .skill("Go")
            .skill(" Rust ")
            .skill("")
            .build();
        assert_eq!(record.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn builder_skills_batch() {
        let record = PortfolioBuilder::new()
            .skills(["Rust", "Go", "Rust"])
            .build();
        assert_eq!(record.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn has_contact_checks_all_channels() {
        assert!(!PortfolioRecord::default().has_contact());
        assert!(PortfolioBuilder::new().email("a@b.c").build().has_contact());
        assert!(PortfolioBuilder::new().linkedin("in/ada").build().has_contact());
        assert!(PortfolioBuilder::new().github("gh/ada").build().has_contact());
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = PortfolioBuilder::new()
            .profile_pic_url("https://example.com/me.png")
            .project(ProjectEntry {
                title: "Engine".into(),
                live_url: "https://engine.dev".into(),
                ..Default::default()
            })
            .build();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"profilePicUrl\""));
        assert!(json.contains("\"liveUrl\""));
        assert!(!json.contains("profile_pic_url"));
    }

    #[test]
    fn record_decodes_with_missing_fields() {
        // A token produced by an older page may omit fields entirely.
        let record: PortfolioRecord =
            serde_json::from_str(r#"{"name":"Ada","skills":["Math"]}"#).unwrap();
        assert_eq!(record.name, "Ada");
        assert_eq!(record.skills, vec!["Math"]);
        assert!(record.bio.is_empty());
        assert!(record.projects.is_empty());
    }
}
