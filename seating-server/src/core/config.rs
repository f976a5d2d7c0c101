use shared::models::CanvasSize;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | daily rolling log files; stdout when unset |
/// | CANVAS_WIDTH | 1200 | default auto-arrange canvas width |
/// | CANVAS_HEIGHT | 800 | default auto-arrange canvas height |
/// | LOOKUP_RATE_LIMIT | 30 | public lookups allowed per window and client |
/// | LOOKUP_RATE_WINDOW_SECS | 60 | public lookup window length |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 LOG_DIR=/var/log/seating cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Canvas used by auto-arrange when the request gives no size
    pub canvas: CanvasSize,
    pub lookup_rate_limit: u32,
    pub lookup_rate_window_secs: u64,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let default_canvas = CanvasSize::default();
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            canvas: CanvasSize {
                width: positive_or(env_parse("CANVAS_WIDTH", default_canvas.width), default_canvas.width),
                height: positive_or(
                    env_parse("CANVAS_HEIGHT", default_canvas.height),
                    default_canvas.height,
                ),
            },
            lookup_rate_limit: env_parse("LOOKUP_RATE_LIMIT", 30),
            lookup_rate_window_secs: env_parse("LOOKUP_RATE_WINDOW_SECS", 60),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { default }
}
