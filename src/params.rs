//! Complete four-parameter snapshots and reading them from page addresses.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::Axis;

/// One complete configuration: current page state, a preset, or a pending
/// selection. Empty strings mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamSet {
    pub hl: String,
    pub gl: String,
    pub lr: String,
    pub cr: String,
}

impl ParamSet {
    pub fn new(
        hl: impl Into<String>,
        gl: impl Into<String>,
        lr: impl Into<String>,
        cr: impl Into<String>,
    ) -> Self {
        Self {
            hl: hl.into(),
            gl: gl.into(),
            lr: lr.into(),
            cr: cr.into(),
        }
    }

    /// Raw value for an axis.
    pub fn get(&self, axis: Axis) -> &str {
        match axis {
            Axis::Hl => &self.hl,
            Axis::Gl => &self.gl,
            Axis::Lr => &self.lr,
            Axis::Cr => &self.cr,
        }
    }

    /// Replace the raw value for an axis.
    pub fn set(&mut self, axis: Axis, value: impl Into<String>) {
        let slot = match axis {
            Axis::Hl => &mut self.hl,
            Axis::Gl => &mut self.gl,
            Axis::Lr => &mut self.lr,
            Axis::Cr => &mut self.cr,
        };
        *slot = value.into();
    }

    /// All four values are unset.
    pub fn is_default(&self) -> bool {
        Axis::ALL.iter().all(|&axis| self.get(axis).is_empty())
    }

    /// `(axis, value)` pairs in URL order.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &str)> {
        Axis::ALL.into_iter().map(move |axis| (axis, self.get(axis)))
    }

    /// Read the four parameters from a page address.
    ///
    /// The first occurrence of each key wins; missing keys read as `""`.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();
        let mut seen = [false; 4];

        for (key, value) in url.query_pairs() {
            let Some(axis) = Axis::from_key(&key) else {
                continue;
            };
            let idx = axis as usize;
            if !seen[idx] {
                seen[idx] = true;
                params.set(axis, value.into_owned());
            }
        }

        params
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (axis, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            if value.is_empty() {
                write!(f, "{axis}=default")?;
            } else {
                write!(f, "{axis}={value}")?;
            }
        }
        Ok(())
    }
}

/// Host markers that identify a Google search page.
pub const DEFAULT_GOOGLE_HOSTS: &[&str] = &["google."];

/// Whether `url` points at a Google search page.
///
/// Only the host is inspected, so a Google address inside another site's
/// query string does not count.
pub fn is_google_page<S: AsRef<str>>(url: &Url, hosts: &[S]) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    hosts
        .iter()
        .any(|marker| host.contains(&marker.as_ref().to_ascii_lowercase()))
}

/// Current parameters of a page address given as text.
pub fn current_params(url: &str) -> Result<ParamSet, url::ParseError> {
    Ok(ParamSet::from_url(&Url::parse(url)?))
}
