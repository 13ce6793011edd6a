//! Configuration validation.
//!
//! All problems are collected and reported together.

use crate::schema::ProfileKitConfig;
use profilekit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ProfileKitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_url(&mut errors, "page.url", &config.page.url);

    validate_range_f64(&mut errors, "window.width", config.window.width, 200.0, 8192.0);
    validate_range_f64(&mut errors, "window.height", config.window.height, 200.0, 8192.0);

    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be blank when set".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// A loadable address needs a scheme: `https://...`, `file://...`, `about:blank`.
fn validate_url(errors: &mut Vec<String>, name: &str, url: &str) {
    let scheme = url.split_once(':').map(|(s, _)| s).unwrap_or("");
    let valid_scheme = !scheme.is_empty()
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        errors.push(format!("{name} = {url:?} is not an absolute URL"));
    }
}
