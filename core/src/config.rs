pub const INITIAL_SCORE_KEY: &str = "INITIAL_SCORE";
pub const INITIAL_TIME_KEY: &str = "INITIAL_TIME";
pub const INITIAL_ERRORS_KEY: &str = "INITIAL_ERRORS";

pub const DEFAULT_TICK_MS: u32 = 1000;

/// Counters the page injects for the active game, plus the timer period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub initial_score: i64,
    pub initial_time: u32,
    pub initial_errors: u32,
    pub tick_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_score: 0,
            initial_time: 0,
            initial_errors: 0,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// A configured value that was present but unusable.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigIssue {
    pub key: &'static str,
    pub value: f64,
}

impl SessionConfig {
    /// Builds the config from a numeric lookup (the page globals in the
    /// browser). Missing keys keep their defaults; values that are not whole
    /// numbers in range are reported and also keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigIssue>)
    where
        F: Fn(&str) -> Option<f64>,
    {
        let mut config = Self::default();
        let mut issues = Vec::new();

        if let Some(value) = lookup(INITIAL_SCORE_KEY) {
            match whole_number(value).and_then(|v| i64::try_from(v).ok()) {
                Some(score) => config.initial_score = score,
                None => issues.push(ConfigIssue {
                    key: INITIAL_SCORE_KEY,
                    value,
                }),
            }
        }
        if let Some(value) = lookup(INITIAL_TIME_KEY) {
            match whole_number(value).and_then(|v| u32::try_from(v).ok()) {
                Some(time) => config.initial_time = time,
                None => issues.push(ConfigIssue {
                    key: INITIAL_TIME_KEY,
                    value,
                }),
            }
        }
        if let Some(value) = lookup(INITIAL_ERRORS_KEY) {
            match whole_number(value).and_then(|v| u32::try_from(v).ok()) {
                Some(errors) => config.initial_errors = errors,
                None => issues.push(ConfigIssue {
                    key: INITIAL_ERRORS_KEY,
                    value,
                }),
            }
        }

        (config, issues)
    }
}

fn whole_number(value: f64) -> Option<i128> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > 9.0e15 {
        return None;
    }
    Some(value as i128)
}
