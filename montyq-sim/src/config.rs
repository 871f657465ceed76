//! Simulator configuration

use crate::error::{Result, SimulatorError};

/// Configuration for the unitary strategy simulator
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Tolerance for the U†U = I check run on each operator at
    /// construction time
    ///
    /// Default: 1e-10
    pub unitarity_tolerance: f64,

    /// Tolerance for the per-stage total-probability-mass invariant
    ///
    /// Default: 1e-9
    pub norm_tolerance: f64,

    /// Promote unitarity violations from diagnostics to hard errors
    ///
    /// By default a violation is surfaced on the outcome as a structured
    /// diagnostic and the simulation proceeds; exploratory callers may
    /// prefer the warning, test harnesses the error.
    ///
    /// Default: false
    pub fail_on_unitarity_violation: bool,

    /// Record a statevector snapshot after each pipeline stage
    ///
    /// Default: false
    pub collect_trace: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            unitarity_tolerance: montyq_gates::DEFAULT_TOLERANCE,
            norm_tolerance: 1e-9,
            fail_on_unitarity_violation: false,
            collect_trace: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unitarity_tolerance(mut self, tolerance: f64) -> Self {
        self.unitarity_tolerance = tolerance;
        self
    }

    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    pub fn with_fail_on_unitarity_violation(mut self, fail: bool) -> Self {
        self.fail_on_unitarity_violation = fail;
        self
    }

    pub fn with_trace(mut self, collect: bool) -> Self {
        self.collect_trace = collect;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// [`SimulatorError::InvalidConfig`] when a tolerance is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("unitarity_tolerance", self.unitarity_tolerance),
            ("norm_tolerance", self.norm_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulatorError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = SimulatorConfig::new()
            .with_unitarity_tolerance(1e-8)
            .with_norm_tolerance(1e-7)
            .with_fail_on_unitarity_violation(true)
            .with_trace(true);
        assert_eq!(config.unitarity_tolerance, 1e-8);
        assert_eq!(config.norm_tolerance, 1e-7);
        assert!(config.fail_on_unitarity_violation);
        assert!(config.collect_trace);
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        let config = SimulatorConfig::new().with_norm_tolerance(0.0);
        assert!(config.validate().is_err());

        let config = SimulatorConfig::new().with_unitarity_tolerance(f64::NAN);
        assert!(config.validate().is_err());
    }
}
