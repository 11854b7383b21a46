//! Central configuration for the native_auth crate

use std::sync::LazyLock;

/// Whether the web fallback asks the backend to localise its popups to the
/// device language before opening them.
///
/// Default: `true`
pub static NATIVE_AUTH_USE_DEVICE_LANGUAGE: LazyLock<bool> = LazyLock::new(|| {
    parse_bool_flag(
        std::env::var("NATIVE_AUTH_USE_DEVICE_LANGUAGE").ok().as_deref(),
        true,
    )
});

/// Element id hosting the challenge widget when a phone sign-in does not name one.
///
/// Default: "recaptcha-container"
pub static NATIVE_AUTH_RECAPTCHA_CONTAINER: LazyLock<String> = LazyLock::new(|| {
    std::env::var("NATIVE_AUTH_RECAPTCHA_CONTAINER")
        .unwrap_or_else(|_| "recaptcha-container".to_string())
});

/// Buffer size of the phone event hub. Listeners that fall further behind
/// than this lose the oldest events and keep waiting.
///
/// Default: 16
pub static NATIVE_AUTH_EVENT_CAPACITY: LazyLock<usize> = LazyLock::new(|| {
    parse_capacity(
        std::env::var("NATIVE_AUTH_EVENT_CAPACITY").ok().as_deref(),
        16,
    )
});

pub(crate) fn parse_bool_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        Some(v) => {
            tracing::warn!("Unrecognised boolean flag '{}', using default {}", v, default);
            default
        }
        None => default,
    }
}

pub(crate) fn parse_capacity(value: Option<&str>, default: usize) -> usize {
    // broadcast channels panic on a zero capacity
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|capacity| *capacity > 0)
        .unwrap_or(default)
}
