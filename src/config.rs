use serde::Serialize;

use crate::cli::Cli;

/// Calorie threshold used when none is given on the command line.
pub const DEFAULT_CALORIE_LIMIT: i64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    /// Totals above this value trigger the calories-exceeded warning.
    pub calorie_limit: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            calorie_limit: DEFAULT_CALORIE_LIMIT,
        }
    }
}

impl From<&Cli> for SessionConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            calorie_limit: cli.calorie_limit,
        }
    }
}
