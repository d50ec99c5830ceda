//! Structured parameter state and advanced-mode detection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{self, Axis};
use crate::codec::{self, ParsedParam};
use crate::params::ParamSet;

/// Whether `lr`/`cr` need advanced (multi-value or exclude) controls.
pub fn needs_advanced_mode(lr: &str, cr: &str) -> bool {
    codec::parse(lr).is_advanced() || codec::parse(cr).is_advanced()
}

/// Raw values plus their structured forms, as used to drive controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamState {
    pub hl: String,
    pub gl: String,
    pub lr: String,
    pub cr: String,
    pub lr_parsed: ParsedParam,
    pub cr_parsed: ParsedParam,
    pub advanced: bool,
}

/// Derive the control state from four raw values. Never fails.
pub fn derive_param_state(hl: &str, gl: &str, lr: &str, cr: &str) -> ParamState {
    let lr_parsed = codec::parse(lr);
    let cr_parsed = codec::parse(cr);
    let advanced = lr_parsed.is_advanced() || cr_parsed.is_advanced();

    debug!(hl, gl, lr, cr, advanced, "Derived parameter state");

    ParamState {
        hl: hl.to_owned(),
        gl: gl.to_owned(),
        lr: lr.to_owned(),
        cr: cr.to_owned(),
        lr_parsed,
        cr_parsed,
        advanced,
    }
}

impl ParamState {
    /// Derive from a parameter set.
    pub fn from_params(params: &ParamSet) -> Self {
        derive_param_state(&params.hl, &params.gl, &params.lr, &params.cr)
    }

    /// The raw values this state was derived from.
    pub fn params(&self) -> ParamSet {
        ParamSet::new(&self.hl, &self.gl, &self.lr, &self.cr)
    }

    /// Re-encode the structured `lr`/`cr` forms into a parameter set.
    ///
    /// Differs from [`params`](Self::params) only when the raw input was not
    /// in canonical form (for example a bare `(a|b)` group).
    pub fn encode(&self) -> ParamSet {
        ParamSet::new(
            &self.hl,
            &self.gl,
            codec::encode(&self.lr_parsed),
            codec::encode(&self.cr_parsed),
        )
    }

    /// Structured selection for an axis; `hl`/`gl` are single plain values.
    pub fn selection(&self, axis: Axis) -> Selection {
        match axis {
            Axis::Hl => Selection::single(&self.hl),
            Axis::Gl => Selection::single(&self.gl),
            Axis::Lr => Selection::from_parsed(&self.lr_parsed),
            Axis::Cr => Selection::from_parsed(&self.cr_parsed),
        }
    }

    /// Tokens not found in the catalog, shown as custom codes.
    pub fn custom_codes(&self) -> Vec<(Axis, String)> {
        let mut custom = Vec::new();
        for (axis, value) in [(Axis::Hl, &self.hl), (Axis::Gl, &self.gl)] {
            if !value.is_empty() && !catalog::is_known(axis, value) {
                custom.push((axis, value.clone()));
            }
        }
        for (axis, parsed) in [(Axis::Lr, &self.lr_parsed), (Axis::Cr, &self.cr_parsed)] {
            for value in &parsed.values {
                if !catalog::is_known(axis, value) {
                    custom.push((axis, value.clone()));
                }
            }
        }
        custom
    }
}

/// Multi-select state as plain data: ordered unique codes and an exclude flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    codes: Vec<String>,
    exclude: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding one code, or nothing for `""`.
    pub fn single(code: &str) -> Self {
        let mut selection = Self::new();
        if !code.is_empty() {
            selection.insert(code);
        }
        selection
    }

    /// Build from codes in order, dropping repeats and empty codes.
    pub fn from_codes<I, S>(codes: I, exclude: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self {
            codes: Vec::new(),
            exclude,
        };
        for code in codes {
            let code = code.as_ref();
            if !code.is_empty() {
                selection.insert(code);
            }
        }
        selection
    }

    pub fn from_parsed(parsed: &ParsedParam) -> Self {
        Self::from_codes(&parsed.values, parsed.is_exclude)
    }

    pub fn from_raw(raw: &str) -> Self {
        Self::from_parsed(&codec::parse(raw))
    }

    /// Add a code if absent. Returns whether it was added.
    pub fn insert(&mut self, code: &str) -> bool {
        if self.contains(code) {
            return false;
        }
        self.codes.push(code.to_owned());
        true
    }

    /// Add the code if absent, otherwise remove it. Returns whether it is now selected.
    pub fn toggle(&mut self, code: &str) -> bool {
        match self.codes.iter().position(|c| c == code) {
            Some(idx) => {
                self.codes.remove(idx);
                false
            }
            None => {
                self.codes.push(code.to_owned());
                true
            }
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_exclude(&self) -> bool {
        self.exclude
    }

    pub fn set_exclude(&mut self, exclude: bool) {
        self.exclude = exclude;
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    pub fn to_parsed(&self) -> ParsedParam {
        ParsedParam::new(self.codes.iter().cloned(), self.exclude)
    }

    /// Encoded raw value.
    pub fn to_raw(&self) -> String {
        codec::encode(&self.to_parsed())
    }
}
