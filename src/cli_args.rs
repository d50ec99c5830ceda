//! CLI argument definitions (build.rs compatible).
//!
//! This module contains only struct/enum definitions with no dependencies on
//! other crate modules, allowing it to be included from build.rs for man page
//! generation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// YAML document
    Yaml,
    /// JSON document
    Json,
}

/// Search parameter axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// Interface language (hl)
    Hl,
    /// Search region (gl)
    Gl,
    /// Result language restrict (lr)
    Lr,
    /// Result country restrict (cr)
    Cr,
}

/// Customize and cycle Google search language and region parameters.
#[derive(Parser, Debug)]
#[command(name = "serptune")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_required = false, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Favorites/presets store file (default: data directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    /// Log file path (default: data directory)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

/// Raw parameter values; omitted values are left as they are.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Interface language, e.g. en ("" to remove)
    #[arg(long, allow_hyphen_values = true)]
    pub hl: Option<String>,

    /// Search region, e.g. us ("" to remove)
    #[arg(long, allow_hyphen_values = true)]
    pub gl: Option<String>,

    /// Result language restrict, e.g. lang_en, lang_en|lang_fr, -(lang_en|lang_fr)
    #[arg(long, allow_hyphen_values = true)]
    pub lr: Option<String>,

    /// Result country restrict, e.g. countryUS, -countryKR
    #[arg(long, allow_hyphen_values = true)]
    pub cr: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the current parameters of a search page
    Show {
        /// Page address
        url: String,
    },

    /// Set parameters on a search page and print the new address
    Set {
        /// Page address
        url: String,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Remove all four parameters from a search page
    Reset {
        /// Page address
        url: String,
    },

    /// Switch a search page to the next preset
    Cycle {
        /// Page address
        url: String,
    },

    /// Parse a raw parameter value
    Parse {
        /// Raw value, e.g. -(lang_en|lang_fr)
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    /// Encode codes into a raw parameter value
    Encode {
        /// Exclude the codes instead of restricting to them
        #[arg(long)]
        exclude: bool,

        /// Codes in order
        codes: Vec<String>,
    },

    /// Manage presets
    #[command(subcommand)]
    Preset(PresetCommand),

    /// Manage favorites
    #[command(subcommand)]
    Favorite(FavoriteCommand),

    /// List known codes for an axis, favorites first
    Catalog {
        #[arg(value_enum)]
        axis: AxisArg,
    },

    /// Handle an updateParams/resetParams JSON message read from stdin
    Message {
        /// Page address
        url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    /// List saved presets
    List,

    /// Save a preset from a page address or explicit values
    Save {
        /// Preset name
        name: String,

        /// Take the values from this page address
        #[arg(long, value_name = "URL")]
        from_url: Option<String>,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Apply a preset to a page address
    Apply {
        /// Preset id
        id: String,

        /// Page address
        url: String,
    },

    /// Delete a preset
    Delete {
        /// Preset id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavoriteCommand {
    /// List favorites (all axes if none given)
    List {
        #[arg(value_enum)]
        axis: Option<AxisArg>,
    },

    /// Star or unstar a code
    Toggle {
        #[arg(value_enum)]
        axis: AxisArg,

        /// Code, e.g. lang_ko
        code: String,
    },
}
