use log::LevelFilter;

pub const PLAN_KEY: &str = "athletex.plan.v1";

/// Planned energy cost per training minute.
pub const KCAL_PER_MINUTE: f64 = 9.0;

pub const TICK_INTERVAL_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub plan_key: String,
    pub tick_interval_ms: u32,
    pub athlete_name: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan_key: PLAN_KEY.to_string(),
            tick_interval_ms: TICK_INTERVAL_MS,
            athlete_name: "Stellan".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
