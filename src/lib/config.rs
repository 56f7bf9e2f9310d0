//! Build-time configuration for the API endpoint, session and verification
//! timings, and log filtering, with an optional runtime override. The runtime
//! config is read from `window.MIRRORX_CONFIG` (if present) so static
//! deployments can change values without rebuilding. Configuration values are
//! public; do not store secrets here.

/// How long the session check may stay in flight before the app treats the
/// visitor as signed out.
pub const DEFAULT_SESSION_TIMEOUT_MS: u32 = 10_000;
/// Seconds a visitor must wait between verification code requests.
pub const DEFAULT_RESEND_COOLDOWN_SECS: u32 = 60;
/// Delay between a successful verification and the redirect to sign-in.
pub const DEFAULT_VERIFIED_REDIRECT_DELAY_MS: u32 = 2_000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_timeout_ms: u32,
    pub resend_cooldown_secs: u32,
    pub verified_redirect_delay_ms: u32,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            session_timeout_ms: DEFAULT_SESSION_TIMEOUT_MS,
            resend_cooldown_secs: DEFAULT_RESEND_COOLDOWN_SECS,
            verified_redirect_delay_ms: DEFAULT_VERIFIED_REDIRECT_DELAY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        let build = RuntimeConfig {
            api_base_url: option_env!("MIRRORX_API_BASE_URL").and_then(normalize_runtime_value),
            session_timeout_ms: option_env!("MIRRORX_SESSION_TIMEOUT_MS")
                .and_then(parse_number),
            resend_cooldown_secs: option_env!("MIRRORX_RESEND_COOLDOWN_SECS")
                .and_then(parse_number),
            verified_redirect_delay_ms: option_env!("MIRRORX_VERIFIED_REDIRECT_DELAY_MS")
                .and_then(parse_number),
            log_filter: option_env!("MIRRORX_LOG_FILTER").and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    session_timeout_ms: Option<u32>,
    resend_cooldown_secs: Option<u32>,
    verified_redirect_delay_ms: Option<u32>,
    log_filter: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.session_timeout_ms {
        config.session_timeout_ms = value;
    }
    if let Some(value) = runtime.resend_cooldown_secs {
        config.resend_cooldown_secs = value;
    }
    if let Some(value) = runtime.verified_redirect_delay_ms {
        config.verified_redirect_delay_ms = value;
    }
    if let Some(value) = runtime.log_filter {
        config.log_filter = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("MIRRORX_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        session_timeout_ms: read_runtime_value(&object, "session_timeout_ms")
            .as_deref()
            .and_then(parse_number),
        resend_cooldown_secs: read_runtime_value(&object, "resend_cooldown_secs")
            .as_deref()
            .and_then(parse_number),
        verified_redirect_delay_ms: read_runtime_value(&object, "verified_redirect_delay_ms")
            .as_deref()
            .and_then(parse_number),
        log_filter: read_runtime_value(&object, "log_filter"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a runtime value as a string; numbers set from JavaScript are accepted too.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a non-negative integer setting; anything else is ignored.
fn parse_number(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_RESEND_COOLDOWN_SECS, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, parse_number,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.mirrorx.app "),
            Some("https://api.mirrorx.app".to_string())
        );
    }

    #[test]
    fn parse_number_ignores_garbage() {
        assert_eq!(parse_number(" 1500 "), Some(1500));
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("soon"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = AppConfig {
            api_base_url: "https://api.default".to_string(),
            ..AppConfig::default()
        };
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            resend_cooldown_secs: parse_number("later"),
            log_filter: normalize_runtime_value("  "),
            ..RuntimeConfig::default()
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.resend_cooldown_secs, DEFAULT_RESEND_COOLDOWN_SECS);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            session_timeout_ms: parse_number("2500"),
            resend_cooldown_secs: parse_number("30"),
            verified_redirect_delay_ms: parse_number("0"),
            log_filter: normalize_runtime_value("mirrorx_web=debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.session_timeout_ms, 2500);
        assert_eq!(config.resend_cooldown_secs, 30);
        assert_eq!(config.verified_redirect_delay_ms, 0);
        assert_eq!(config.log_filter, "mirrorx_web=debug");
    }

    #[test]
    fn load_without_browser_uses_defaults() {
        let config = AppConfig::load();
        assert!(config.session_timeout_ms > 0);
        assert!(!config.log_filter.is_empty());
    }
}
