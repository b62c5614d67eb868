//! Share-link codec.
//!
//! A record serializes to JSON and then to URL-safe base64 (no padding), so
//! the token embeds directly as a URL query value with no further escaping.
//! `decode` inverts `encode` exactly: `decode(&encode(r)) == r` for every
//! valid record.
//!
//! A share URL has the shape `<base>?data=<token>#preview`. On load the page
//! consumes it with [`shared_record`], which treats any failure as "no shared
//! data" so the caller falls through to normal form-driven operation.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;
use tracing::warn;

use crate::record::PortfolioRecord;

/// Query parameter carrying the share token.
pub const SHARE_PARAM: &str = "data";

/// URL fragment that gates share-link consumption.
pub const SHARE_FRAGMENT: &str = "preview";

/// Why a share token failed to decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid share token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("invalid share token payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Serialize a record into a URL-safe share token.
pub fn encode(record: &PortfolioRecord) -> String {
    // Serializing a record is infallible: it is plain strings and vectors.
    let json = serde_json::to_string(record).expect("PortfolioRecord serializes to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a share token back into a record.
pub fn decode(token: &str) -> Result<PortfolioRecord, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Build a share URL: `<base>?data=<token>#preview`.
///
/// `base` is the page origin plus path, e.g. `https://example.com/folio`.
pub fn share_url(base: &str, record: &PortfolioRecord) -> String {
    format!("{base}?{SHARE_PARAM}={}#{SHARE_FRAGMENT}", encode(record))
}

/// Consume a share URL, if it is one.
///
/// Returns the decoded record only when the URL carries the `#preview`
/// fragment and a `data` query parameter that decodes cleanly. A malformed
/// token is logged and treated as "no shared data" — the caller falls back
/// to interactive mode; this never propagates an error.
pub fn shared_record(url: &str) -> Option<PortfolioRecord> {
    let token = share_token(url)?;
    match decode(token) {
        Ok(record) => Some(record),
        Err(err) => {
            warn!("discarding malformed share token: {err}");
            None
        }
    }
}

/// Extract the raw share token from a URL, gated on the `#preview` fragment.
fn share_token(url: &str) -> Option<&str> {
    let (rest, fragment) = url.split_once('#')?;
    if fragment != SHARE_FRAGMENT {
        return None;
    }
    let (_, query) = rest.split_once('?')?;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(SHARE_PARAM)?.strip_prefix('='))
        .filter(|token| !token.is_empty())
}
