use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::config::CURSOR_MIN_VIEWPORT_WIDTH;

static MOBILE_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)android|webos|iphone|ipad|ipod|blackberry|iemobile|opera mini|mobile|tablet")
        .expect("mobile user agent pattern")
});

/// What the browser tells us about the device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub touch_capable: bool,
    pub viewport_width: f64,
}

impl DeviceProfile {
    /// Reads the live values. An unreadable viewport width reads as zero, which
    /// keeps the native cursor.
    pub fn probe() -> Self {
        let Some(window) = window() else {
            return Self {
                user_agent: String::new(),
                touch_capable: false,
                viewport_width: 0.0,
            };
        };
        let navigator = window.navigator();
        let touch_event = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);

        Self {
            user_agent: navigator.user_agent().unwrap_or_default(),
            touch_capable: touch_event || navigator.max_touch_points() > 0,
            viewport_width: window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(0.0),
        }
    }
}

/// Touch devices and narrow viewports keep the native cursor.
///
/// Touch laptops that report no touch points slip through; that is an
/// accepted gap of the heuristic.
pub fn is_suppressed(device: &DeviceProfile) -> bool {
    MOBILE_AGENT.is_match(&device.user_agent)
        || device.touch_capable
        || device.viewport_width < CURSOR_MIN_VIEWPORT_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    fn desktop(width: f64) -> DeviceProfile {
        DeviceProfile {
            user_agent: DESKTOP_UA.to_string(),
            touch_capable: false,
            viewport_width: width,
        }
    }

    #[test]
    fn wide_desktop_gets_custom_cursor() {
        assert!(!is_suppressed(&desktop(1280.0)));
        assert!(!is_suppressed(&desktop(768.0)));
    }

    #[test]
    fn narrow_viewport_is_suppressed() {
        assert!(is_suppressed(&desktop(767.0)));
    }

    #[test]
    fn touch_capability_alone_suppresses() {
        let device = DeviceProfile {
            touch_capable: true,
            ..desktop(1920.0)
        };
        assert!(is_suppressed(&device));
    }

    #[test]
    fn mobile_agents_are_suppressed_regardless_of_width() {
        for agent in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
            "Mozilla/5.0 (Tablet; rv:26.0) Gecko/26.0 Firefox/26.0",
        ] {
            let device = DeviceProfile {
                user_agent: agent.to_string(),
                ..desktop(1920.0)
            };
            assert!(is_suppressed(&device), "{agent}");
        }
    }
}
