//! Advance the page to the next preset.
//!
//! The cycle list is the implicit default entry (all parameters unset)
//! followed by the user's presets in stored order. It is rebuilt on every
//! invocation and never persisted.

use tracing::debug;

use crate::params::ParamSet;
use crate::presets::Preset;

/// Id of the synthesized default entry.
pub const DEFAULT_PRESET_ID: &str = "__default__";

/// The default entry: every parameter unset.
pub fn default_preset() -> Preset {
    Preset {
        id: DEFAULT_PRESET_ID.to_string(),
        name: "Default".to_string(),
        params: ParamSet::default(),
    }
}

/// Build the cycle list: default entry first, then `presets`.
pub fn preset_list(presets: &[Preset]) -> Vec<Preset> {
    std::iter::once(default_preset())
        .chain(presets.iter().cloned())
        .collect()
}

/// Index of the entry after the first exact match of `current`.
///
/// With no match the search index is treated as -1, so the result is 0.
pub fn next_index(list: &[Preset], current: &ParamSet) -> usize {
    if list.is_empty() {
        return 0;
    }
    let next = match list.iter().position(|preset| preset.params == *current) {
        Some(idx) => (idx + 1) % list.len(),
        None => 0,
    };
    debug!(current = %current, next, len = list.len(), "Cycling preset");
    next
}

/// The entry the page should adopt next.
pub fn next_preset<'a>(list: &'a [Preset], current: &ParamSet) -> Option<&'a Preset> {
    list.get(next_index(list, current))
}
