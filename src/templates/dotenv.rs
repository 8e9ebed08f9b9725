//! `.env` file consumed by Docker Compose.
use std::fmt::Write as _;

use crate::config::EnvironmentConfig;

/// Fixed development-only database credentials.
const DB_LINES: [(&str, &str); 4] = [
    ("DB_NAME", "wordpress"),
    ("DB_USER", "wordpress"),
    ("DB_PASSWORD", "wordpress"),
    ("DB_ROOT_PASSWORD", "rootpassword"),
];

/// Render the `.env` file consumed by Docker Compose.
///
/// The plugin list is quoted because it may contain spaces.
#[must_use]
pub fn render_dotenv(config: &EnvironmentConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PROJECT_NAME={}", config.project_name());
    let _ = writeln!(out, "WP_VERSION={}", config.wp_version());
    let _ = writeln!(out, "WP_PORT={}", config.wp_port());
    let _ = writeln!(out, "WP_PLUGINS=\"{}\"", config.wp_plugins());
    out.push('\n');
    for (key, value) in DB_LINES {
        let _ = writeln!(out, "{key}={value}");
    }
    out
}
