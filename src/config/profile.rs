use crate::constants::ISA_CEILING;
use std::path::PathBuf;

/// Altitude range and destination for a tabulated atmosphere profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    pub start: f64, // m
    pub end: f64,   // m
    pub step: f64,  // m
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl ProfileConfig {
    pub const START: f64 = 0.0;
    pub const END: f64 = ISA_CEILING;
    pub const STEP: f64 = 1_000.0;
    pub const OUTPUT_DIR: &'static str = "output";
    pub const FILE_NAME: &'static str = "isa_profile.csv";
    /// Upper bound on the rows a single profile may hold.
    pub const MAX_SAMPLES: usize = 10_000_000;

    pub fn with_range(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            end,
            step,
            ..Self::default()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            start: Self::START,
            end: Self::END,
            step: Self::STEP,
            output_dir: PathBuf::from(Self::OUTPUT_DIR),
            file_name: Self::FILE_NAME.to_string(),
        }
    }
}
