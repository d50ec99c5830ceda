//! Page-address mutation driven by `updateParams` / `resetParams` messages.
//!
//! Wire shapes:
//!
//! ```json
//! {"action": "updateParams", "hl": "en", "gl": "", "lr": "", "cr": ""}
//! {"action": "resetParams"}
//! ```
//!
//! Both answer `{"success": true}`.

use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::catalog::Axis;
use crate::params::ParamSet;

/// A request to change the current page's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum PageMessage {
    /// Set each non-empty parameter and delete each empty one
    UpdateParams(ParamSet),
    /// Delete all four parameters
    ResetParams,
}

impl PageMessage {
    /// Parameters the page ends up with.
    pub fn target_params(&self) -> ParamSet {
        match self {
            Self::UpdateParams(params) => params.clone(),
            Self::ResetParams => ParamSet::default(),
        }
    }
}

/// Acknowledgement sent back to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub success: bool,
}

/// Apply a message to a page address, returning the address to navigate to
/// and the response.
pub fn apply_message(url: &Url, message: &PageMessage) -> (Url, PageResponse) {
    let next = with_params(url, &message.target_params());
    info!(from = %url, to = %next, "Navigating");
    (next, PageResponse { success: true })
}

/// Rewrite the four parameters of `url`, keeping every other query pair.
///
/// A non-empty value replaces the first occurrence of its key in place and
/// drops later ones; a key not yet present is appended. An empty value
/// removes the key.
pub fn with_params(url: &Url, params: &ParamSet) -> Url {
    let mut placed = [false; 4];
    let mut pairs: Vec<(String, String)> = Vec::new();

    for (key, value) in url.query_pairs() {
        match Axis::from_key(&key) {
            None => pairs.push((key.into_owned(), value.into_owned())),
            Some(axis) => {
                let idx = axis as usize;
                let target = params.get(axis);
                if !placed[idx] && !target.is_empty() {
                    pairs.push((key.into_owned(), target.to_owned()));
                }
                placed[idx] = true;
            }
        }
    }

    for (axis, value) in params.iter() {
        let idx = axis as usize;
        if !placed[idx] && !value.is_empty() {
            pairs.push((axis.key().to_owned(), value.to_owned()));
        }
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}
