//! Runtime capability checks.
//!
//! Mobile WebKit refuses media autoplay outright and auto-loading a large
//! hero video there wastes the visitor's data, so playback is gesture
//! gated on those engines. Detection is user-agent sniffing plus the
//! touch-point count, which is the only signal that still distinguishes
//! iPadOS once it masquerades as desktop Safari.

/// True when media playback on this runtime must wait for a user gesture.
///
/// Matches iPhone, iPad and iPod user agents directly, and catches iPadOS
/// reporting itself as "Macintosh" by its multitouch support.
pub fn needs_playback_gesture(user_agent: &str, max_touch_points: i32) -> bool {
    if user_agent.contains("iPhone")
        || user_agent.contains("iPad")
        || user_agent.contains("iPod")
    {
        return true;
    }
    user_agent.contains("Macintosh") && max_touch_points > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
    const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Mobile Safari/537.36";
    const WINDOWS_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

    #[test]
    fn test_iphone_is_gesture_gated() {
        assert!(needs_playback_gesture(IPHONE_UA, 5));
    }

    #[test]
    fn test_desktop_safari_is_not_gated() {
        assert!(!needs_playback_gesture(MAC_UA, 0));
    }

    #[test]
    fn test_ipados_masquerading_as_mac_is_gated() {
        // iPadOS 13+ sends a desktop Macintosh UA but keeps multitouch
        assert!(needs_playback_gesture(MAC_UA, 5));
    }

    #[test]
    fn test_android_chrome_is_not_gated() {
        assert!(!needs_playback_gesture(ANDROID_UA, 5));
    }

    #[test]
    fn test_desktop_windows_is_not_gated() {
        assert!(!needs_playback_gesture(WINDOWS_UA, 0));
    }
}
