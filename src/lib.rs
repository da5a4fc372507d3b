use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use serde::{Serialize, Deserialize};

use self::moments::{MomentError, moment_centered::NormalizationMode};

pub mod numerics;
pub mod geometry;
pub mod moments;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/// Scale references at or below this value are treated as degenerate (zero area / zero spread)
pub const SCALE_REFERENCE_EPS: Float = 1e-12;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RuntimeConf {
    pub normalization: Option<NormalizationMode>,
    #[serde(default = "default_reference_eps")]
    pub reference_eps: Float,
    #[serde(default)]
    pub print_grid: bool
}

fn default_reference_eps() -> Float {
    SCALE_REFERENCE_EPS
}

impl Default for RuntimeConf {
    fn default() -> RuntimeConf {
        RuntimeConf { normalization: None, reference_eps: SCALE_REFERENCE_EPS, print_grid: false }
    }
}

pub fn load_runtime_conf<P: AsRef<Path>>(path: P) -> Result<RuntimeConf, MomentError> {
    let file = File::open(path.as_ref()).map_err(|e| MomentError::Config(format!("{}: {}", path.as_ref().display(), e)))?;
    let conf: RuntimeConf = serde_yaml::from_reader(BufReader::new(file)).map_err(|e| MomentError::Config(e.to_string()))?;
    if !(conf.reference_eps >= 0.0) {
        return Err(MomentError::Config(format!("reference_eps must be non-negative, got {}", conf.reference_eps)));
    }
    log::debug!("loaded runtime conf: {:?}", conf);
    Ok(conf)
}
