//! The `EtaProvider` trait and an offline estimator.

use wg_core::GeoPoint;

use crate::{RoutingError, RoutingResult};

/// Pedestrian travel-time lookup.
///
/// Implementations may block (one network round-trip per call).  Errors are
/// per-pair: callers decide whether a failure aborts anything.
pub trait EtaProvider {
    /// Walking time in seconds from `from` to `to`.
    fn eta_secs(&mut self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64>;
}

impl<P: EtaProvider + ?Sized> EtaProvider for &mut P {
    fn eta_secs(&mut self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64> {
        (**self).eta_secs(from, to)
    }
}

impl<P: EtaProvider + ?Sized> EtaProvider for Box<P> {
    fn eta_secs(&mut self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64> {
        (**self).eta_secs(from, to)
    }
}

// ── StraightLineEta ───────────────────────────────────────────────────────────

/// Great-circle distance divided by a constant walking speed.
///
/// Ignores paths, stairs, and hills, so it underestimates on campus.  Useful
/// for dry runs that must not spend API quota.
#[derive(Copy, Clone, Debug)]
pub struct StraightLineEta {
    pub speed_mps: f64,
}

impl StraightLineEta {
    /// Typical adult walking speed.
    pub const WALK_MPS: f64 = 1.4;

    pub fn new(speed_mps: f64) -> RoutingResult<Self> {
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return Err(RoutingError::Config(format!(
                "walking speed must be positive, got {speed_mps}"
            )));
        }
        Ok(Self { speed_mps })
    }
}

impl Default for StraightLineEta {
    fn default() -> Self {
        Self { speed_mps: Self::WALK_MPS }
    }
}

impl EtaProvider for StraightLineEta {
    fn eta_secs(&mut self, from: GeoPoint, to: GeoPoint) -> RoutingResult<f64> {
        Ok((from.distance_m(to) / self.speed_mps).round())
    }
}
