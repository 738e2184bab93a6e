//! Analysis options

use serde::{Deserialize, Serialize};

/// Options controlling a linear static analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Verify global force equilibrium after solving
    pub check_statics: bool,
    /// Relative tolerance for the equilibrium check
    pub statics_tolerance: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            check_statics: false,
            statics_tolerance: 1e-6,
        }
    }
}

impl AnalysisOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the post-solve equilibrium check
    pub fn with_statics_check(mut self) -> Self {
        self.check_statics = true;
        self
    }

    /// Set the equilibrium check tolerance
    pub fn with_statics_tolerance(mut self, tolerance: f64) -> Self {
        self.statics_tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = AnalysisOptions::default();
        assert!(!options.check_statics);
        assert!(options.statics_tolerance > 0.0);
    }

    #[test]
    fn test_builder_style_options() {
        let options = AnalysisOptions::new()
            .with_statics_check()
            .with_statics_tolerance(1e-4);
        assert!(options.check_statics);
        assert_eq!(options.statics_tolerance, 1e-4);
    }
}
