//! The TEA update function: one message in, state mutated, optional
//! follow-up message and side effect out.
//!
//! Side effects never run here. The wiring layer in the site crate
//! executes the returned [`UpdateAction`] against the real browser, which
//! keeps every transition in this file testable without a DOM.

use log::debug;

use crate::message::Message;
use crate::query;
use crate::scroll;
use crate::state::{UiState, VideoPhase};

/// Delay (ms) before the manual play affordance is revealed on
/// gesture-gated runtimes, so it does not flash over the banner for
/// visitors who are already scrolling past.
pub const PLAY_HINT_DELAY_MS: i32 = 400;

/// Side effects the wiring layer performs after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Call `play()` on the hero video and report back how it went.
    AttemptPlayback,

    /// Explicitly `load()` then `play()` the hero video. Used on the
    /// gesture-gated path where the element was mounted with
    /// `preload="none"` and has nothing buffered.
    LoadAndPlay,

    /// Install one-shot touch/click listeners that retry playback once.
    ArmGestureRetry,

    /// Reveal the manual play affordance after [`PLAY_HINT_DELAY_MS`].
    SchedulePlayHint,

    /// Rewrite the location bar in place without navigating.
    ReplaceUrl { href: String },

    /// Smooth-scroll the window back to the top.
    ScrollToTop,
}

/// Result of processing one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process.
    pub message: Option<Message>,
    /// Optional action for the wiring layer to perform.
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Process a message and update state. The only place `UiState` mutates.
pub fn update(state: &mut UiState, message: Message) -> UpdateResult {
    match message {
        Message::Mounted {
            href,
            gesture_gated,
        } => {
            let follow_up = Message::VideoPolicyDetected { gesture_gated };
            match query::consume_success_flag(&href) {
                Some(cleaned) => {
                    state.inquiry_submitted = true;
                    debug!("inquiry confirmation consumed from query string");
                    UpdateResult {
                        message: Some(follow_up),
                        action: Some(UpdateAction::ReplaceUrl { href: cleaned }),
                    }
                }
                None => UpdateResult::message(follow_up),
            }
        }

        Message::ScrollMeasured { offset, probes } => {
            state.show_scroll_top = scroll::show_scroll_top(offset);
            state.active_section = scroll::active_section(&probes, offset);
            UpdateResult::none()
        }

        Message::MenuToggled => {
            state.mobile_menu_open = !state.mobile_menu_open;
            UpdateResult::none()
        }

        Message::MenuClosed => {
            state.mobile_menu_open = false;
            UpdateResult::none()
        }

        Message::ScrollTopRequested => UpdateResult::action(UpdateAction::ScrollToTop),

        Message::VideoPolicyDetected { gesture_gated } => {
            state.video.gesture_gated = gesture_gated;
            if gesture_gated {
                // Never auto-load on this engine. Show the banner image now
                // and offer a manual play control shortly after.
                state.video.phase = VideoPhase::AwaitingGesture;
                UpdateResult::action(UpdateAction::SchedulePlayHint)
            } else {
                // The play attempt waits until the element is in the DOM.
                state.video.phase = VideoPhase::Loading;
                UpdateResult::none()
            }
        }

        Message::VideoElementReady => {
            if !state.video.gesture_gated && state.video.phase == VideoPhase::Loading {
                UpdateResult::action(UpdateAction::AttemptPlayback)
            } else {
                UpdateResult::none()
            }
        }

        Message::PlayHintDelayElapsed => {
            // Only relevant while still waiting; a hint that fires after a
            // manual play or a failure stays hidden.
            if state.video.phase == VideoPhase::AwaitingGesture {
                state.video.play_hint_visible = true;
            }
            UpdateResult::none()
        }

        Message::PlayHintSelected => {
            if state.video.phase != VideoPhase::AwaitingGesture {
                return UpdateResult::none();
            }
            state.video.play_hint_visible = false;
            UpdateResult::action(UpdateAction::LoadAndPlay)
        }

        Message::GestureRetry => {
            if !state.video.retry_armed || state.video.retry_used {
                return UpdateResult::none();
            }
            state.video.retry_armed = false;
            state.video.retry_used = true;
            debug!("retrying hero playback after user gesture");
            UpdateResult::action(UpdateAction::AttemptPlayback)
        }

        Message::PlaybackStarted => {
            state.video.phase = VideoPhase::Playing;
            state.video.play_hint_visible = false;
            state.video.retry_armed = false;
            UpdateResult::none()
        }

        Message::PlaybackBlocked => fall_back(state, "play() was rejected"),

        Message::VideoFailed => fall_back(state, "media element reported an error"),
    }
}

/// Degrade to the static banner image. On the autoplay path the first
/// failure arms a one-shot retry on the next user gesture; every later
/// failure is final.
fn fall_back(state: &mut UiState, reason: &str) -> UpdateResult {
    debug!("hero video fallback: {reason}");
    state.video.phase = VideoPhase::FallbackImage;
    state.video.play_hint_visible = false;

    let video = &mut state.video;
    if !video.gesture_gated && !video.retry_used && !video.retry_armed {
        video.retry_armed = true;
        return UpdateResult::action(UpdateAction::ArmGestureRetry);
    }
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::SectionProbe;
    use crate::state::SectionId;

    fn desktop_video_state() -> UiState {
        let mut state = UiState::new();
        update(
            &mut state,
            Message::VideoPolicyDetected {
                gesture_gated: false,
            },
        );
        state
    }

    fn gated_video_state() -> UiState {
        let mut state = UiState::new();
        update(
            &mut state,
            Message::VideoPolicyDetected {
                gesture_gated: true,
            },
        );
        state
    }

    fn page_probes() -> Vec<SectionProbe> {
        vec![
            SectionProbe::new(SectionId::Home, 0.0),
            SectionProbe::new(SectionId::About, 700.0),
            SectionProbe::new(SectionId::Products, 1500.0),
            SectionProbe::new(SectionId::Memberships, 2400.0),
            SectionProbe::new(SectionId::Contact, 3200.0),
        ]
    }

    // ─────────────────────────────────────────────────────────
    // Mount / success flag
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_mount_with_success_flag_sets_banner_and_rewrites_url() {
        let mut state = UiState::new();

        let result = update(
            &mut state,
            Message::Mounted {
                href: "https://pentatraders.com/?success=1#contact".into(),
                gesture_gated: false,
            },
        );

        assert!(state.inquiry_submitted);
        assert_eq!(
            result.action,
            Some(UpdateAction::ReplaceUrl {
                href: "https://pentatraders.com/#contact".into()
            })
        );
        assert!(matches!(
            result.message,
            Some(Message::VideoPolicyDetected {
                gesture_gated: false
            })
        ));
    }

    #[test]
    fn test_mount_without_success_flag_leaves_url_alone() {
        let mut state = UiState::new();

        let result = update(
            &mut state,
            Message::Mounted {
                href: "https://pentatraders.com/".into(),
                gesture_gated: true,
            },
        );

        assert!(!state.inquiry_submitted);
        assert_eq!(result.action, None);
        assert!(matches!(
            result.message,
            Some(Message::VideoPolicyDetected { gesture_gated: true })
        ));
    }

    // ─────────────────────────────────────────────────────────
    // Scroll measurements
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_scroll_measurement_updates_button_and_active_section() {
        let mut state = UiState::new();

        let result = update(
            &mut state,
            Message::ScrollMeasured {
                offset: 1600.0,
                probes: page_probes(),
            },
        );

        assert!(state.show_scroll_top);
        assert_eq!(state.active_section, SectionId::Products);
        assert_eq!(result, UpdateResult::none());
    }

    #[test]
    fn test_scroll_back_to_top_hides_button_and_resets_section() {
        let mut state = UiState::new();
        update(
            &mut state,
            Message::ScrollMeasured {
                offset: 2600.0,
                probes: page_probes(),
            },
        );

        update(
            &mut state,
            Message::ScrollMeasured {
                offset: 0.0,
                probes: page_probes(),
            },
        );

        assert!(!state.show_scroll_top);
        assert_eq!(state.active_section, SectionId::Home);
    }

    #[test]
    fn test_scroll_button_threshold_is_exclusive() {
        let mut state = UiState::new();

        update(
            &mut state,
            Message::ScrollMeasured {
                offset: 80.0,
                probes: page_probes(),
            },
        );
        assert!(!state.show_scroll_top);

        update(
            &mut state,
            Message::ScrollMeasured {
                offset: 81.0,
                probes: page_probes(),
            },
        );
        assert!(state.show_scroll_top);
    }

    #[test]
    fn test_scroll_top_request_emits_scroll_action() {
        let mut state = UiState::new();

        let result = update(&mut state, Message::ScrollTopRequested);

        assert_eq!(result.action, Some(UpdateAction::ScrollToTop));
    }

    // ─────────────────────────────────────────────────────────
    // Mobile menu
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_menu_toggle_twice_returns_to_original_value() {
        let mut state = UiState::new();

        update(&mut state, Message::MenuToggled);
        assert!(state.mobile_menu_open);

        update(&mut state, Message::MenuToggled);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_nav_link_closes_open_menu() {
        let mut state = UiState::new();
        update(&mut state, Message::MenuToggled);

        update(&mut state, Message::MenuClosed);

        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_closing_a_closed_menu_is_a_noop() {
        let mut state = UiState::new();

        let result = update(&mut state, Message::MenuClosed);

        assert!(!state.mobile_menu_open);
        assert_eq!(result, UpdateResult::none());
    }

    // ─────────────────────────────────────────────────────────
    // Video: autoplay path
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_autoplay_waits_for_the_element_then_attempts() {
        let mut state = desktop_video_state();
        assert_eq!(state.video.phase, VideoPhase::Loading);

        let result = update(&mut state, Message::VideoElementReady);

        assert_eq!(result.action, Some(UpdateAction::AttemptPlayback));
    }

    #[test]
    fn test_successful_playback_hides_the_fallback() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);

        update(&mut state, Message::PlaybackStarted);

        assert_eq!(state.video.phase, VideoPhase::Playing);
        assert!(!state.video.phase.shows_fallback());
    }

    #[test]
    fn test_autoplay_rejection_falls_back_and_arms_one_retry() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);

        let result = update(&mut state, Message::PlaybackBlocked);

        assert_eq!(state.video.phase, VideoPhase::FallbackImage);
        assert!(state.video.phase.shows_fallback());
        assert!(state.video.retry_armed);
        assert_eq!(result.action, Some(UpdateAction::ArmGestureRetry));
    }

    #[test]
    fn test_error_event_shows_fallback_image() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);

        update(&mut state, Message::VideoFailed);

        assert_eq!(state.video.phase, VideoPhase::FallbackImage);
        assert!(state.video.phase.shows_fallback());
    }

    #[test]
    fn test_gesture_retry_attempts_playback_exactly_once() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);
        update(&mut state, Message::PlaybackBlocked);

        let first = update(&mut state, Message::GestureRetry);
        assert_eq!(first.action, Some(UpdateAction::AttemptPlayback));
        assert!(state.video.retry_used);

        let second = update(&mut state, Message::GestureRetry);
        assert_eq!(second, UpdateResult::none());
    }

    #[test]
    fn test_retry_success_reaches_playing() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);
        update(&mut state, Message::PlaybackBlocked);
        update(&mut state, Message::GestureRetry);

        update(&mut state, Message::PlaybackStarted);

        assert_eq!(state.video.phase, VideoPhase::Playing);
        assert!(!state.video.retry_armed);
    }

    #[test]
    fn test_second_failure_after_retry_is_final() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);
        update(&mut state, Message::PlaybackBlocked);
        update(&mut state, Message::GestureRetry);

        let result = update(&mut state, Message::PlaybackBlocked);

        assert_eq!(state.video.phase, VideoPhase::FallbackImage);
        assert!(!state.video.retry_armed);
        assert_eq!(result, UpdateResult::none());
    }

    #[test]
    fn test_stray_gesture_without_armed_retry_is_ignored() {
        let mut state = desktop_video_state();

        let result = update(&mut state, Message::GestureRetry);

        assert_eq!(result, UpdateResult::none());
        assert_eq!(state.video.phase, VideoPhase::Loading);
    }

    #[test]
    fn test_repeated_error_does_not_rearm_the_retry() {
        let mut state = desktop_video_state();
        update(&mut state, Message::VideoElementReady);
        update(&mut state, Message::PlaybackBlocked);

        // error event lands after the rejection already armed the retry
        let result = update(&mut state, Message::VideoFailed);

        assert!(state.video.retry_armed);
        assert_eq!(result, UpdateResult::none());
    }

    // ─────────────────────────────────────────────────────────
    // Video: gesture-gated path
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_gated_mount_defers_load_and_schedules_the_hint() {
        let mut state = UiState::new();

        let result = update(
            &mut state,
            Message::VideoPolicyDetected { gesture_gated: true },
        );

        assert_eq!(state.video.phase, VideoPhase::AwaitingGesture);
        assert!(state.video.phase.shows_fallback());
        assert!(!state.video.play_hint_visible);
        assert_eq!(result.action, Some(UpdateAction::SchedulePlayHint));
    }

    #[test]
    fn test_gated_element_ready_does_not_autoplay() {
        let mut state = gated_video_state();

        let result = update(&mut state, Message::VideoElementReady);

        assert_eq!(result, UpdateResult::none());
        assert_eq!(state.video.phase, VideoPhase::AwaitingGesture);
    }

    #[test]
    fn test_play_hint_appears_after_the_delay() {
        let mut state = gated_video_state();

        update(&mut state, Message::PlayHintDelayElapsed);

        assert!(state.video.play_hint_visible);
    }

    #[test]
    fn test_play_hint_selection_loads_and_plays() {
        let mut state = gated_video_state();
        update(&mut state, Message::PlayHintDelayElapsed);

        let result = update(&mut state, Message::PlayHintSelected);

        assert!(!state.video.play_hint_visible);
        assert_eq!(result.action, Some(UpdateAction::LoadAndPlay));
    }

    #[test]
    fn test_manual_play_success_hides_fallback_and_hint() {
        let mut state = gated_video_state();
        update(&mut state, Message::PlayHintDelayElapsed);
        update(&mut state, Message::PlayHintSelected);

        update(&mut state, Message::PlaybackStarted);

        assert_eq!(state.video.phase, VideoPhase::Playing);
        assert!(!state.video.play_hint_visible);
    }

    #[test]
    fn test_manual_play_failure_keeps_fallback_without_retry() {
        let mut state = gated_video_state();
        update(&mut state, Message::PlayHintDelayElapsed);
        update(&mut state, Message::PlayHintSelected);

        let result = update(&mut state, Message::PlaybackBlocked);

        assert_eq!(state.video.phase, VideoPhase::FallbackImage);
        assert!(!state.video.play_hint_visible);
        assert!(!state.video.retry_armed);
        assert_eq!(result, UpdateResult::none());
    }

    #[test]
    fn test_late_hint_delay_stays_hidden_after_manual_play() {
        let mut state = gated_video_state();
        update(&mut state, Message::PlayHintSelected);
        update(&mut state, Message::PlaybackStarted);

        update(&mut state, Message::PlayHintDelayElapsed);

        assert!(!state.video.play_hint_visible);
    }

    #[test]
    fn test_hint_selection_is_ignored_once_failed() {
        let mut state = gated_video_state();
        update(&mut state, Message::PlayHintDelayElapsed);
        update(&mut state, Message::PlayHintSelected);
        update(&mut state, Message::VideoFailed);

        let result = update(&mut state, Message::PlayHintSelected);

        assert_eq!(result, UpdateResult::none());
        assert_eq!(state.video.phase, VideoPhase::FallbackImage);
    }
}
