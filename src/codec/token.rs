//! Share tokens: a config snapshot packed into a URL fragment.
//!
//! Wire format: standard padded base64 over the UTF-8 bytes of the snapshot's JSON text.
//! Working on bytes keeps multi-byte characters intact without an extra escaping pass, and
//! the alphabet (`A-Z a-z 0-9 + / =`) is legal in a fragment as-is. Decoding is lenient: it
//! also takes unpadded or URL-safe base64, and undoes percent-encoding a browser or chat
//! client may have applied to the fragment.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};

use crate::config::model::StudioConfig;
use crate::config::patch::StudioPatch;
use crate::foundation::error::{StudioError, StudioResult};

/// Encode the shareable part of `cfg` (everything but `resolution`).
///
/// Returns an empty string if the snapshot cannot be serialized; never panics.
pub fn encode(cfg: &StudioConfig) -> String {
    match try_encode(&StudioPatch::shareable(cfg)) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(error = %e, "share token encoding failed");
            String::new()
        }
    }
}

/// Encode an arbitrary snapshot. `resolution` is dropped if present.
pub fn try_encode(snapshot: &StudioPatch) -> StudioResult<String> {
    let mut snapshot = snapshot.clone();
    snapshot.resolution = None;
    let json = serde_json::to_vec(&snapshot)?;
    Ok(STANDARD.encode(json))
}

/// Decode a token back into a (partial) snapshot.
///
/// Bad base64, bad UTF-8, bad JSON or a JSON value that is not an object yields `None`.
/// Individual fields of the wrong type are dropped, see [`StudioPatch::from_map`].
pub fn decode(token: &str) -> Option<StudioPatch> {
    match try_decode(token) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::debug!(error = %e, "share token rejected");
            None
        }
    }
}

/// Like [`decode`], keeping the reason for a failure.
pub fn try_decode(token: &str) -> StudioResult<StudioPatch> {
    let token = token.trim();
    let token = token.strip_prefix('#').unwrap_or(token);
    if token.is_empty() {
        return Err(StudioError::codec("empty token"));
    }

    let token = if token.contains('%') {
        urlencoding::decode(token)
            .map_err(|e| StudioError::codec(format!("bad percent-encoding: {e}")))?
            .into_owned()
    } else {
        token.to_owned()
    };

    let bytes = [STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD]
        .iter()
        .find_map(|engine| engine.decode(token.as_bytes()).ok())
        .ok_or_else(|| StudioError::codec("token is not base64"))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| StudioError::codec("token payload is not UTF-8"))?;

    let mut snapshot = StudioPatch::from_json(&text)?;
    if snapshot.resolution.take().is_some() {
        tracing::debug!("ignoring resolution carried by a share token");
    }
    Ok(snapshot)
}

/// The fragment of `url` (text after the first `#`), if non-empty.
pub fn fragment_of(url: &str) -> Option<&str> {
    url.split_once('#')
        .map(|(_, frag)| frag)
        .filter(|frag| !frag.is_empty())
}

/// `base` with its fragment replaced by `token`.
pub fn share_url(base: &str, token: &str) -> String {
    let base = base.split_once('#').map_or(base, |(b, _)| b);
    format!("{base}#{token}")
}

#[cfg(test)]
#[path = "../../tests/unit/codec/token.rs"]
mod tests;
