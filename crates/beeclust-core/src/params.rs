//! Simulation parameters and their validation.

use crate::error::ParamError;

/// Tunable parameters of a BeeClust simulation.
///
/// Probabilities drive the per-bee stochastic choices in the tick kernel;
/// temperatures and `k_temp` shape the heatmap; `k_stay` and `min_wait`
/// control how long a stopped bee waits.
///
/// `Default` carries the stock configuration; [`validate`](Self::validate)
/// must pass before the parameters are handed to any kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Probability that an active bee redraws its heading each tick.
    pub p_changedir: f64,
    /// Probability of stopping when the bee runs into a wall or fixture.
    pub p_wall: f64,
    /// Probability of stopping when the bee runs into another bee.
    pub p_meet: f64,
    /// Thermal conductivity coefficient of the heatmap.
    pub k_temp: f64,
    /// Stay coefficient: larger values keep stopped bees waiting longer.
    pub k_stay: f64,
    /// The bees' preferred temperature.
    pub t_ideal: f64,
    /// Temperature of heater cells.
    pub t_heater: f64,
    /// Temperature of cooler cells.
    pub t_cooler: f64,
    /// Ambient temperature of cells away from any source.
    pub t_env: f64,
    /// Minimum wait time of a stopped bee, in ticks. Must be `1..=127`.
    pub min_wait: u8,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            p_changedir: 0.2,
            p_wall: 0.8,
            p_meet: 0.8,
            k_temp: 0.9,
            k_stay: 50.0,
            t_ideal: 35.0,
            t_heater: 40.0,
            t_cooler: 5.0,
            t_env: 22.0,
            min_wait: 2,
        }
    }
}

impl SimParams {
    /// Validate all parameter invariants.
    ///
    /// Checks, in order: every float is finite; probabilities lie in
    /// `[0, 1]`; `k_temp` and `k_stay` are non-negative; `min_wait` fits
    /// the packed wait encoding; and `t_cooler <= t_env <= t_heater`.
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, value) in [
            ("p_changedir", self.p_changedir),
            ("p_wall", self.p_wall),
            ("p_meet", self.p_meet),
        ] {
            check_finite(name, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamError::ProbabilityOutOfRange { name, value });
            }
        }

        for (name, value) in [("k_temp", self.k_temp), ("k_stay", self.k_stay)] {
            check_finite(name, value)?;
            if value < 0.0 {
                return Err(ParamError::Negative { name, value });
            }
        }

        // Temperatures may be negative; they only need to be finite.
        for (name, value) in [
            ("t_ideal", self.t_ideal),
            ("t_heater", self.t_heater),
            ("t_cooler", self.t_cooler),
            ("t_env", self.t_env),
        ] {
            check_finite(name, value)?;
        }

        if !(1..=127).contains(&self.min_wait) {
            return Err(ParamError::MinWaitOutOfRange {
                value: self.min_wait,
            });
        }

        if !(self.t_cooler <= self.t_env && self.t_env <= self.t_heater) {
            return Err(ParamError::TemperatureOrdering {
                t_cooler: self.t_cooler,
                t_env: self.t_env,
                t_heater: self.t_heater,
            });
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamError::NotFinite { name, value })
    }
}
