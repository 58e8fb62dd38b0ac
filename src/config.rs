use crate::error::{SpectrumError, SpectrumResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of band transitions on a seven-band (ROYGBIV) spectrum.
pub const REFERENCE_COUNT: usize = 6;

pub const DEFAULT_BOUNDARIES: [f64; REFERENCE_COUNT] = [
    0.143, // Red-Orange
    0.286, // Orange-Yellow
    0.429, // Yellow-Green
    0.571, // Green-Blue
    0.714, // Blue-Indigo
    0.857, // Indigo-Violet
];

/// Canvas width the transition marks are drawn on.
pub const DEFAULT_AXIS_EXTENT: f64 = 600.0;
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MSE_PENALTY: f64 = 10.0;

/// Immutable geometry the scorer compares user marks against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumConfig {
    pub boundaries: [f64; REFERENCE_COUNT],
    pub axis_extent: f64,
    pub deviation_threshold: f64,
    pub mse_penalty: f64,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            boundaries: DEFAULT_BOUNDARIES,
            axis_extent: DEFAULT_AXIS_EXTENT,
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            mse_penalty: DEFAULT_MSE_PENALTY,
        }
    }
}

/// Command-line view of [`SpectrumConfig`].
#[derive(Args, Debug, Clone)]
pub struct GeometryArgs {
    #[arg(long, default_value = "0.143,0.286,0.429,0.571,0.714,0.857")]
    pub boundaries: String,
    #[arg(long, default_value_t = DEFAULT_AXIS_EXTENT)]
    pub axis_extent: f64,
    #[arg(long, default_value_t = DEFAULT_DEVIATION_THRESHOLD)]
    pub deviation_threshold: f64,
    #[arg(long, default_value_t = DEFAULT_MSE_PENALTY)]
    pub mse_penalty: f64,
}

impl Default for GeometryArgs {
    fn default() -> Self {
        Self {
            boundaries: "0.143,0.286,0.429,0.571,0.714,0.857".to_string(),
            axis_extent: DEFAULT_AXIS_EXTENT,
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            mse_penalty: DEFAULT_MSE_PENALTY,
        }
    }
}

impl TryFrom<&GeometryArgs> for SpectrumConfig {
    type Error = SpectrumError;

    fn try_from(args: &GeometryArgs) -> SpectrumResult<Self> {
        Ok(Self {
            boundaries: parse_f64_array::<REFERENCE_COUNT>(&args.boundaries, "boundaries")?,
            axis_extent: args.axis_extent,
            deviation_threshold: args.deviation_threshold,
            mse_penalty: args.mse_penalty,
        })
    }
}

impl SpectrumConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SpectrumResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overrides only the fields the user actually typed on the command line.
    pub fn merge_from_cli(
        &mut self,
        cli_args: &GeometryArgs,
        matches: &ArgMatches,
    ) -> SpectrumResult<()> {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_args.$field;
                }
            };
        }

        update_if_present!(axis_extent, "axis_extent");
        update_if_present!(deviation_threshold, "deviation_threshold");
        update_if_present!(mse_penalty, "mse_penalty");

        if matches.value_source("boundaries") == Some(ValueSource::CommandLine) {
            self.boundaries = parse_f64_array::<REFERENCE_COUNT>(&cli_args.boundaries, "boundaries")?;
        }
        Ok(())
    }

    pub fn validate(&self) -> SpectrumResult<()> {
        for (i, &b) in self.boundaries.iter().enumerate() {
            if !b.is_finite() || !(0.0..=1.0).contains(&b) {
                return Err(SpectrumError::Config(format!(
                    "boundary {} ({}) must lie in [0, 1]",
                    i, b
                )));
            }
        }
        if self.boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpectrumError::Config(format!(
                "boundaries must be strictly ascending: {:?}",
                self.boundaries
            )));
        }
        if !self.axis_extent.is_finite() || self.axis_extent <= 0.0 {
            return Err(SpectrumError::Config(format!(
                "axis_extent must be positive, got {}",
                self.axis_extent
            )));
        }
        if !self.deviation_threshold.is_finite() || self.deviation_threshold < 0.0 {
            return Err(SpectrumError::Config(format!(
                "deviation_threshold must be non-negative, got {}",
                self.deviation_threshold
            )));
        }
        if !self.mse_penalty.is_finite() || self.mse_penalty <= 0.0 {
            return Err(SpectrumError::Config(format!(
                "mse_penalty must be positive, got {}",
                self.mse_penalty
            )));
        }
        Ok(())
    }
}

fn parse_f64_array<const N: usize>(s: &str, name: &str) -> SpectrumResult<[f64; N]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        return Err(SpectrumError::Config(format!(
            "--{} requires {} values, got {}",
            name,
            N,
            parts.len()
        )));
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p.trim().parse().map_err(|_| {
            SpectrumError::Config(format!("Invalid number '{}' in --{}", p.trim(), name))
        })?;
    }
    Ok(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_array_trims_whitespace() {
        let arr = parse_f64_array::<3>(" 0.1, 0.2 ,0.3", "x").unwrap();
        assert_eq!(arr, [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_parse_f64_array_wrong_count() {
        let err = parse_f64_array::<3>("0.1,0.2", "boundaries").unwrap_err();
        assert!(err.to_string().contains("requires 3 values"));
    }

    #[test]
    fn test_default_args_match_default_config() {
        let cfg = SpectrumConfig::try_from(&GeometryArgs::default()).unwrap();
        assert_eq!(cfg, SpectrumConfig::default());
    }
}
