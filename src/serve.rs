//! Optional Axum route handler for serving shared portfolio previews.
//!
//! Enable with `features = ["axum"]` in Cargo.toml.
//!
//! # Usage
//!
//! ```ignore
//! use axum::routing::get;
//!
//! let app = axum::Router::new()
//!     .route("/preview", get(folio_render::serve::portfolio_preview));
//! ```

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;
use tracing::warn;

use crate::record::PortfolioRecord;
use crate::{render_html, share};

/// Query parameters accepted by [`portfolio_preview`].
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Share token as produced by [`crate::share::encode`].
    data: Option<String>,
}

/// Serve a shared portfolio: decode `?data=<token>` and respond with the
/// rendered document.
///
/// A missing or malformed token falls back to rendering the default
/// placeholder page, mirroring the interactive page's behavior — never an
/// error response.
pub async fn portfolio_preview(Query(params): Query<PreviewParams>) -> Html<String> {
    let record = match params.data.as_deref() {
        Some(token) => match share::decode(token) {
            Ok(record) => record,
            Err(err) => {
                warn!("preview request with malformed share token: {err}");
                PortfolioRecord::default()
            }
        },
        None => PortfolioRecord::default(),
    };
    Html(render_html::to_html_page(&record))
}
