//! Google search parameter presets and favorites.
//!
//! The core is the parameter state model: [`codec`] turns raw `hl`/`gl`/`lr`/`cr`
//! values into structured selections and back, [`derive`] decides when
//! advanced (multi-value or exclude) controls are needed, [`favorites`] and
//! [`presets`] persist user choices through a [`storage::KeyValueStore`], and
//! [`cycler`] advances a page through the preset list.

pub mod catalog;
pub mod cli;
pub mod cli_args;
pub mod codec;
pub mod config;
pub mod cycler;
pub mod derive;
pub mod favorites;
pub mod logging;
pub mod page;
pub mod params;
pub mod presets;
pub mod report;
pub mod session;
pub mod storage;
