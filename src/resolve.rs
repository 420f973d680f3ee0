//! Resolution of `href` references against the URL of the page they appear on.

use thiserror::Error;
use url::Url;

/// Why a reference could not be turned into an absolute URL.
///
/// Callers are expected to skip the reference; nothing here is recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid base URL: {0}")]
    InvalidBase(url::ParseError),

    #[error("invalid reference: {0}")]
    InvalidReference(url::ParseError),

    #[error("malformed percent-encoding in reference")]
    InvalidPercentEncoding,
}

/// Resolve `reference` against `base`, returning the absolute URL.
///
/// Absolute references come back normalized (lowercase scheme and host, default
/// port dropped). Network-path, path, query-only and fragment-only references are
/// merged with `base` the usual way.
pub fn resolve(reference: &str, base: &str) -> Result<String, ResolveError> {
    let base = Url::parse(base).map_err(ResolveError::InvalidBase)?;
    resolve_against(reference, &base)
}

/// Same as [`resolve`], for a base that has already been parsed.
pub fn resolve_against(reference: &str, base: &Url) -> Result<String, ResolveError> {
    if !has_valid_escapes(reference) {
        return Err(ResolveError::InvalidPercentEncoding);
    }
    base.join(reference)
        .map(String::from)
        .map_err(ResolveError::InvalidReference)
}

/// Every `%` must start a two-hex-digit escape. `Url::join` would pass bad ones through.
fn has_valid_escapes(reference: &str) -> bool {
    let bytes = reference.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(_, &b)| b == b'%')
        .all(|(i, _)| {
            bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        })
}
