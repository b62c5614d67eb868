//! `folio-render` — portfolio page generator.
//!
//! Collects personal/professional data into a [`PortfolioRecord`], resolves a
//! style selection against a fixed catalog, and renders a complete standalone
//! HTML document. Records also round-trip through URL-safe share tokens for
//! link-based sharing — no server, no persistence.
//!
//! # Quick start
//!
//! ```
//! use folio_render::PortfolioBuilder;
//!
//! let record = PortfolioBuilder::new()
//!     .name("Ada Lovelace")
//!     .bio("Wrote the first published algorithm.")
//!     .skill("Mathematics")
//!     .build();
//!
//! let html = record.to_html_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert_eq!(record.download_filename(), "ada-lovelace.html");
//! ```

pub mod record;
pub mod render_html;
#[cfg(feature = "axum")]
pub mod serve;
pub mod share;
pub mod style;

pub use record::{PortfolioBuilder, PortfolioRecord, ProjectEntry, split_technologies};
pub use render_html::{download_filename, to_html_page};
pub use share::{DecodeError, share_url, shared_record};
pub use style::{ResolvedStyle, StyleSelection};

impl PortfolioRecord {
    /// Render this record as a complete standalone HTML document.
    pub fn to_html_page(&self) -> String {
        render_html::to_html_page(self)
    }

    /// Serialize this record into a URL-safe share token.
    ///
    /// The token round-trips through [`share::decode`] field-for-field.
    pub fn share_token(&self) -> String {
        share::encode(self)
    }

    /// Suggested filename when offering the rendered document as a download.
    pub fn download_filename(&self) -> String {
        render_html::download_filename(&self.name)
    }
}
