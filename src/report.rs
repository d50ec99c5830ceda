//! Command output in text, YAML or JSON.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use crate::catalog::{self, Axis};
use crate::cli::OutputFormat;
use crate::codec::ParsedParam;
use crate::derive::ParamState;
use crate::favorites::{CatalogRow, Favorites};
use crate::page::PageResponse;
use crate::params::ParamSet;
use crate::presets::Preset;

/// Something a command prints.
pub trait Report: Serialize {
    /// Human-readable form.
    fn text(&self) -> String;

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Yaml => {
                serde_yaml::to_string(self).wrap_err("Failed to serialize output to YAML")
            }
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map(|s| s + "\n")
                .wrap_err("Failed to serialize output to JSON"),
        }
    }
}

/// A code that is not in the catalog for its axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomCode {
    pub axis: Axis,
    pub code: String,
}

/// Current page parameters and the derived control state.
#[derive(Debug, Clone, Serialize)]
pub struct ShowReport {
    pub url: String,
    pub state: ParamState,
    pub custom_codes: Vec<CustomCode>,
}

impl ShowReport {
    pub fn new(url: impl Into<String>, state: ParamState) -> Self {
        let custom_codes = state
            .custom_codes()
            .into_iter()
            .map(|(axis, code)| CustomCode { axis, code })
            .collect();
        Self {
            url: url.into(),
            state,
            custom_codes,
        }
    }
}

fn describe_single(axis: Axis, value: &str) -> String {
    if value.is_empty() {
        "default".to_string()
    } else {
        catalog::label(axis, value)
    }
}

fn describe_parsed(axis: Axis, parsed: &ParsedParam) -> String {
    if parsed.is_empty() {
        return "default".to_string();
    }
    let labels: Vec<String> = parsed
        .values
        .iter()
        .map(|code| catalog::label(axis, code))
        .collect();
    let prefix = if parsed.is_exclude { "not " } else { "" };
    format!("{prefix}{}", labels.join(" or "))
}

impl Report for ShowReport {
    fn text(&self) -> String {
        let state = &self.state;
        let rows = [
            (Axis::Hl, describe_single(Axis::Hl, &state.hl)),
            (Axis::Gl, describe_single(Axis::Gl, &state.gl)),
            (Axis::Lr, describe_parsed(Axis::Lr, &state.lr_parsed)),
            (Axis::Cr, describe_parsed(Axis::Cr, &state.cr_parsed)),
        ];

        let mut out = String::new();
        for (axis, description) in rows {
            let _ = writeln!(out, "{:<3}{:<20}{}", axis.key(), axis.label(), description);
        }
        let _ = writeln!(
            out,
            "Advanced mode: {}",
            if state.advanced { "yes" } else { "no" }
        );
        out
    }
}

/// Address to navigate to, and the preset that produced it if any.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationReport {
    pub url: String,
    pub params: ParamSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
}

impl Report for NavigationReport {
    fn text(&self) -> String {
        format!("{}\n", self.url)
    }
}

/// Reply to a page message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageReport {
    pub response: PageResponse,
    pub url: String,
}

impl Report for MessageReport {
    fn text(&self) -> String {
        format!("{}\n", self.url)
    }
}

/// A parsed raw value with its encoded form.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub raw: String,
    pub parsed: ParsedParam,
    pub encoded: String,
    pub advanced: bool,
}

impl Report for ParseReport {
    fn text(&self) -> String {
        format!(
            "values: {}\nexclude: {}\nencoded: {}\n",
            self.parsed.values.join(", "),
            if self.parsed.is_exclude { "yes" } else { "no" },
            self.encoded
        )
    }
}

/// An encoded raw value.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeReport {
    pub raw: String,
}

impl Report for EncodeReport {
    fn text(&self) -> String {
        format!("{}\n", self.raw)
    }
}

/// Saved presets.
#[derive(Debug, Clone, Serialize)]
pub struct PresetListReport {
    pub presets: Vec<Preset>,
}

impl Report for PresetListReport {
    fn text(&self) -> String {
        if self.presets.is_empty() {
            return "No presets saved\n".to_string();
        }
        let mut out = String::new();
        for preset in &self.presets {
            let _ = writeln!(out, "{}  {}  [{}]", preset.id, preset.name, preset.params);
        }
        out
    }
}

/// A single preset.
#[derive(Debug, Clone, Serialize)]
pub struct PresetReport {
    pub preset: Preset,
}

impl Report for PresetReport {
    fn text(&self) -> String {
        format!("Saved preset '{}' ({})\n", self.preset.name, self.preset.id)
    }
}

/// Favorites, all axes or one.
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesReport {
    pub favorites: BTreeMap<Axis, Vec<String>>,
}

impl FavoritesReport {
    pub fn new(favorites: &Favorites, axes: &[Axis]) -> Self {
        Self {
            favorites: axes
                .iter()
                .map(|&axis| (axis, favorites.get(axis).to_vec()))
                .collect(),
        }
    }
}

impl Report for FavoritesReport {
    fn text(&self) -> String {
        let mut out = String::new();
        for (axis, codes) in &self.favorites {
            let listed = if codes.is_empty() {
                "(none)".to_string()
            } else {
                codes.join(", ")
            };
            let _ = writeln!(out, "{}: {}", axis.key(), listed);
        }
        out
    }
}

/// Result of toggling a favorite.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleReport {
    pub axis: Axis,
    pub code: String,
    pub favorite: bool,
}

impl Report for ToggleReport {
    fn text(&self) -> String {
        let verb = if self.favorite { "Starred" } else { "Unstarred" };
        format!("{verb} {} on {}\n", self.code, self.axis)
    }
}

/// Known codes for an axis in display order.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub axis: Axis,
    pub rows: Vec<CatalogRow>,
}

impl Report for CatalogReport {
    fn text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let star = if row.favorite { '*' } else { ' ' };
            let name = row.name.as_deref().unwrap_or("custom");
            let _ = writeln!(out, "{star} {:<12}{name}", row.code);
        }
        out
    }
}
