//! Message types for the page UI (TEA pattern)

use crate::scroll::SectionProbe;

/// All events the page UI reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Page mounted. `href` is the full location URL, checked once for the
    /// form-success flag; `gesture_gated` reports whether media playback
    /// needs a user gesture on this runtime.
    Mounted { href: String, gesture_gated: bool },

    /// Coalesced scroll measurement: current offset plus the section tops
    /// that resolved in the document.
    ScrollMeasured {
        offset: f64,
        probes: Vec<SectionProbe>,
    },

    /// Hamburger button pressed.
    MenuToggled,

    /// A nav link was followed; the panel closes and the browser handles
    /// the anchor jump itself.
    MenuClosed,

    /// Scroll-to-top button pressed.
    ScrollTopRequested,

    // ─────────────────────────────────────────────────────────
    // Hero video
    // ─────────────────────────────────────────────────────────
    /// Playback policy resolved at mount time.
    VideoPolicyDetected { gesture_gated: bool },

    /// The video element is attached to the document.
    VideoElementReady,

    /// Delay before revealing the manual play affordance elapsed.
    PlayHintDelayElapsed,

    /// Manual play affordance selected.
    PlayHintSelected,

    /// First user gesture after a blocked autoplay (one-shot retry).
    GestureRetry,

    /// `play()` resolved; frames are rendering.
    PlaybackStarted,

    /// `play()` rejected, typically by the autoplay policy.
    PlaybackBlocked,

    /// The media element fired `error`.
    VideoFailed,
}
