//! Run configuration.

use std::fmt;
use std::str::FromStr;

use crate::{PipelineError, PipelineResult};

/// Ordering of each grid point's neighbor list after enrichment.
///
/// `SlowestFirst` is the default and matches tables already published by
/// earlier runs; consumers that want the nearest building first should pick
/// `FastestFirst` explicitly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EtaOrder {
    /// Descending ETA; unreachable (infinite) entries come first.
    #[default]
    SlowestFirst,
    /// Ascending ETA; unreachable entries come last.
    FastestFirst,
}

impl fmt::Display for EtaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EtaOrder::SlowestFirst => "slowest-first",
            EtaOrder::FastestFirst => "fastest-first",
        })
    }
}

impl FromStr for EtaOrder {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "slowest-first" | "desc" => Ok(EtaOrder::SlowestFirst),
            "fastest-first" | "asc" => Ok(EtaOrder::FastestFirst),
            other => Err(PipelineError::Config(format!(
                "unknown ETA order {other:?}: expected \"slowest-first\" or \"fastest-first\""
            ))),
        }
    }
}

/// Parameters of one enrichment run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
    /// Neighbors kept per grid point.
    pub k:         usize,
    /// Target grid spacing in metres.
    pub spacing_m: f64,
    pub order:     EtaOrder,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { k: 5, spacing_m: 100.0, order: EtaOrder::default() }
    }
}

impl PipelineConfig {
    /// Spacing is validated by the grid generator; only `k` is checked here.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.k == 0 {
            return Err(PipelineError::Config("k must be at least 1".into()));
        }
        Ok(())
    }
}
