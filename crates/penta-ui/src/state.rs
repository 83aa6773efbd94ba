//! UI state for the landing page (TEA pattern)
//!
//! Everything here is plain data. State changes only through
//! [`update()`](crate::update::update); the site crate reads it through a
//! reactive signal and never mutates it directly.

/// One of the five in-page scroll anchors, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Products,
    Memberships,
    Contact,
}

impl SectionId {
    /// All sections, in document order. Drives both the nav links and the
    /// scroll measurement loop.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Memberships,
        SectionId::Contact,
    ];

    /// The `id` attribute of the section element (also the anchor target).
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Memberships => "memberships",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment href for nav links.
    pub fn href(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::About => "#about",
            SectionId::Products => "#products",
            SectionId::Memberships => "#memberships",
            SectionId::Contact => "#contact",
        }
    }

    /// Human-readable nav label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Products => "Products",
            SectionId::Memberships => "Memberships",
            SectionId::Contact => "Contact",
        }
    }
}

/// Hero video playback phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoPhase {
    /// Playback attempt pending or in flight; the poster covers the gap.
    #[default]
    Loading,
    /// Frames are rendering.
    Playing,
    /// Static banner image shown in place of the video.
    FallbackImage,
    /// Gesture-gated engine: the video is not even loaded yet and the
    /// static banner is shown until the user asks for playback.
    AwaitingGesture,
}

impl VideoPhase {
    /// True when the static banner image is shown instead of the video.
    pub fn shows_fallback(self) -> bool {
        matches!(self, VideoPhase::FallbackImage | VideoPhase::AwaitingGesture)
    }
}

/// Hero video controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VideoState {
    pub phase: VideoPhase,
    /// Playback requires an explicit user gesture (mobile WebKit).
    pub gesture_gated: bool,
    /// Manual play affordance currently visible (gesture-gated path only).
    pub play_hint_visible: bool,
    /// A one-shot gesture listener is waiting to retry a blocked autoplay.
    pub retry_armed: bool,
    /// The one-shot retry has been consumed; further failures are final.
    pub retry_used: bool,
}

/// Transient state of the page chrome. Lives for exactly one page load and
/// starts from defaults on every reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// Hamburger menu panel open (mobile widths only).
    pub mobile_menu_open: bool,
    /// Scroll-to-top button visible.
    pub show_scroll_top: bool,
    /// Section currently highlighted in the nav.
    pub active_section: SectionId,
    /// Hero video controller.
    pub video: VideoState,
    /// Inquiry-received banner, set once from the form redirect flag.
    pub inquiry_submitted: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_hero_at_rest() {
        let state = UiState::new();

        assert!(!state.mobile_menu_open);
        assert!(!state.show_scroll_top);
        assert_eq!(state.active_section, SectionId::Home);
        assert_eq!(state.video.phase, VideoPhase::Loading);
        assert!(!state.inquiry_submitted);
    }

    #[test]
    fn test_section_ids_match_anchor_hrefs() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.dom_id()));
        }
    }

    #[test]
    fn test_fallback_visibility_by_phase() {
        assert!(!VideoPhase::Loading.shows_fallback());
        assert!(!VideoPhase::Playing.shows_fallback());
        assert!(VideoPhase::FallbackImage.shows_fallback());
        assert!(VideoPhase::AwaitingGesture.shows_fallback());
    }
}
