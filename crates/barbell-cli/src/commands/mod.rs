//! CLI command implementations.
//!
//! Every command loads its inputs, calls into `barbell_core` and prints the
//! result in the requested format.

pub mod barload;
pub mod lots;
pub mod order;
pub mod points;
pub mod rankings;
pub mod records;
pub mod results;
pub mod teams;

use std::path::Path;

use anyhow::{Context, Result};
use barbell_core::Meet;
use tracing::info;

/// Load a meet snapshot, attaching the path to any error.
pub fn load_meet(path: &Path) -> Result<Meet> {
    let meet = Meet::load(path).with_context(|| format!("failed to load meet {}", path.display()))?;
    info!("Meet unit: {}, formula: {}", meet.config.unit, meet.config.formula);
    Ok(meet)
}
