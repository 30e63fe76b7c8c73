use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "VIVERCOM";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the dashboard period.
pub const PERIOD_ENV_VAR: &str = "VIVERCOM_PERIOD";

/// Stored as the mood note when the user leaves it blank.
pub const MOOD_PLACEHOLDER: &str = "No notes provided.";

/// Inclusive bounds of a mood score.
pub const MOOD_SCORE_MIN: i32 = 0;
pub const MOOD_SCORE_MAX: i32 = 10;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "vivercom=info,vivercom_lib=info"
}

/// Trailing windows offered by the period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7" | "week" => Ok(Self::Week),
            "30" | "month" => Ok(Self::Month),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Reads the period from `VIVERCOM_PERIOD`, falling back to a week.
pub fn period_from_env() -> Period {
    match std::env::var(PERIOD_ENV_VAR) {
        Ok(raw) => parse_period_or_default(&raw),
        Err(_) => Period::default(),
    }
}

fn parse_period_or_default(raw: &str) -> Period {
    raw.parse().unwrap_or_else(|e: String| {
        tracing::warn!(error = %e, "Ignoring {PERIOD_ENV_VAR}, using default period");
        Period::default()
    })
}
