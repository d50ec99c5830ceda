//! CLI argument parsing and conversion into library types.

pub use crate::cli_args::{
    AxisArg, Cli, Command, FavoriteCommand, OutputFormat, ParamArgs, PresetCommand,
};

use crate::catalog::Axis;
use crate::config::{ConfigOverrides, LoggingOverrides, StorageOverrides};
use crate::params::ParamSet;

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Hl => Axis::Hl,
            AxisArg::Gl => Axis::Gl,
            AxisArg::Lr => Axis::Lr,
            AxisArg::Cr => Axis::Cr,
        }
    }
}

impl ParamArgs {
    /// Whether any value was given.
    pub fn is_empty(&self) -> bool {
        self.hl.is_none() && self.gl.is_none() && self.lr.is_none() && self.cr.is_none()
    }

    /// Apply the given values on top of `base`.
    pub fn merge_into(&self, base: &ParamSet) -> ParamSet {
        let mut params = base.clone();
        for (axis, value) in [
            (Axis::Hl, &self.hl),
            (Axis::Gl, &self.gl),
            (Axis::Lr, &self.lr),
            (Axis::Cr, &self.cr),
        ] {
            if let Some(value) = value {
                params.set(axis, value.clone());
            }
        }
        params
    }
}

impl Cli {
    /// Convert CLI flags to configuration overrides for Figment merging.
    ///
    /// Only flags that were given end up in the serialized overrides, so file
    /// and environment settings survive for the rest.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            storage: StorageOverrides {
                path: self.store.clone(),
            },
            logging: LoggingOverrides {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
        }
    }
}
