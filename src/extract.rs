//! Anchor link extraction.

use std::io::{self, Read};

use log::{debug, trace, warn};
use url::Url;

use crate::resolve::resolve_against;
use crate::scan::{tokens, StartTag, Token};

/// Extract the absolute URL of every `<a href>` in `html`, in document order.
///
/// Each `href` is resolved against `base`. Anchors without an `href`, with an empty
/// one, or with one that fails to resolve are skipped. A read failure stops the scan
/// and keeps whatever was found before it. This never fails: a page that cannot be
/// parsed, or a malformed `base`, gives an empty list. The input is read to the end
/// in every case except a read failure.
pub fn extract_links<R: Read>(mut html: R, base: &str) -> Vec<String> {
    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            warn!("Cannot resolve links against base {base:?}: {e}");
            if let Err(e) = io::copy(&mut html, &mut io::sink()) {
                debug!("Failed to drain document for {base:?}: {e}");
            }
            return Vec::new();
        }
    };

    let mut links = Vec::new();
    for token in tokens(html) {
        let tag = match token {
            Ok(Token::StartTag(tag)) if tag.name.as_slice() == b"a" => tag,
            Ok(Token::Error(e)) => {
                trace!("Recoverable markup error in {base}: {e:?}");
                continue;
            }
            Ok(_) => continue,
            Err(e) => {
                warn!("Stopped scanning {base} after {} links: {e}", links.len());
                break;
            }
        };

        let Some(href) = href(&tag) else {
            continue;
        };
        match resolve_against(&href, &base_url) {
            Ok(url) => links.push(url),
            Err(e) => debug!("Skipping href {href:?} on {base}: {e}"),
        }
    }

    links
}

/// Value of the first `href` attribute of `tag`, or `None` when it is absent or empty.
pub fn href(tag: &StartTag) -> Option<String> {
    tag.attributes
        .iter()
        .find(|(name, _)| name.as_slice() == b"href")
        .map(|(_, value)| String::from_utf8_lossy(value).into_owned())
        .filter(|value| !value.is_empty())
}
