//! Browser wiring for the page UI state machine.
//!
//! [`ViewportUi`] owns the reactive [`UiState`] signal and runs the TEA
//! loop: view events become [`Message`]s, `update()` mutates state, and
//! the returned [`UpdateAction`]s are executed here against the real
//! window. Components never touch the DOM for any of this; they dispatch
//! messages and read state through the context handle.
//!
//! Everything DOM-facing degrades silently when a handle is missing, so a
//! stripped-down page (or a test shell without a video element) renders
//! fine with the affected feature inert.

use leptos::html;
use leptos::prelude::*;
use penta_ui::scroll::{FrameGate, SCROLL_COOLDOWN_MS};
use penta_ui::update::{update, UpdateAction, PLAY_HINT_DELAY_MS};
use penta_ui::{needs_playback_gesture, Message, SectionId, SectionProbe, UiState, VideoPhase};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys;

/// Window listeners kept alive until teardown so they can be detached.
/// Stored in the reactive arena because JS closures cannot cross the
/// `Send` bound that cleanup callbacks carry.
type ListenerStore = StoredValue<Vec<(&'static str, Closure<dyn FnMut()>)>, LocalStorage>;

/// Shared handle to the page UI state machine.
///
/// Created once in `App` with [`ViewportUi::mount`] and passed down
/// through context. Copy, so views capture it by value.
#[derive(Clone, Copy)]
pub struct ViewportUi {
    state: RwSignal<UiState>,
    /// Hero video element; attached by the hero section's view.
    pub video: NodeRef<html::Video>,
    scroll_listener: StoredValue<Option<Closure<dyn FnMut()>>, LocalStorage>,
    gesture_listeners: ListenerStore,
}

impl ViewportUi {
    /// Builds the controller and hooks it into the browser: scroll
    /// listener, mount-time URL check, playback policy detection, and the
    /// deferred first playback attempt. Must be called during component
    /// setup so cleanup registration has an owner.
    pub fn mount() -> Self {
        let ui = Self {
            state: RwSignal::new(UiState::new()),
            video: NodeRef::new(),
            scroll_listener: StoredValue::new_local(None),
            gesture_listeners: StoredValue::new_local(Vec::new()),
        };

        let gesture_gated = detect_gesture_gate();
        ui.install_scroll_listener(gesture_gated);
        on_cleanup(move || ui.teardown());

        if let Some(href) = current_href() {
            ui.dispatch(Message::Mounted {
                href,
                gesture_gated,
            });
        } else {
            ui.dispatch(Message::VideoPolicyDetected { gesture_gated });
        }

        // Effects run after the view is in the DOM, which is what the
        // first measurement and the first play attempt both need.
        Effect::new(move || ui.measure_scroll_state());

        let video_seen = StoredValue::new(false);
        Effect::new(move || {
            if ui.video.get().is_none() || video_seen.get_value() {
                return;
            }
            video_seen.set_value(true);
            ui.dispatch(Message::VideoElementReady);
        });

        ui
    }

    // ─────────────────────────────────────────────────────────
    // State reads (tracked; call from view closures)
    // ─────────────────────────────────────────────────────────

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.mobile_menu_open)
    }

    pub fn show_scroll_top(&self) -> bool {
        self.state.with(|s| s.show_scroll_top)
    }

    pub fn active_section(&self) -> SectionId {
        self.state.with(|s| s.active_section)
    }

    pub fn video_phase(&self) -> VideoPhase {
        self.state.with(|s| s.video.phase)
    }

    pub fn video_gesture_gated(&self) -> bool {
        self.state.with(|s| s.video.gesture_gated)
    }

    pub fn play_hint_visible(&self) -> bool {
        self.state.with(|s| s.video.play_hint_visible)
    }

    pub fn inquiry_submitted(&self) -> bool {
        self.state.with(|s| s.inquiry_submitted)
    }

    // ─────────────────────────────────────────────────────────
    // TEA loop
    // ─────────────────────────────────────────────────────────

    /// Feed one message through `update()`, chasing follow-up messages and
    /// executing actions until the machine settles.
    pub fn dispatch(self, message: Message) {
        let mut next = Some(message);
        while let Some(message) = next.take() {
            let result = self
                .state
                .try_update(|state| update(state, message))
                .unwrap_or_default();
            if let Some(action) = result.action {
                self.run(action);
            }
            next = result.message;
        }
    }

    fn run(self, action: UpdateAction) {
        match action {
            UpdateAction::AttemptPlayback => self.attempt_playback(false),
            UpdateAction::LoadAndPlay => self.attempt_playback(true),
            UpdateAction::ArmGestureRetry => self.arm_gesture_retry(),
            UpdateAction::SchedulePlayHint => self.schedule_play_hint(),
            UpdateAction::ReplaceUrl { href } => replace_url(&href),
            UpdateAction::ScrollToTop => scroll_window_to_top(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Scroll measurement
    // ─────────────────────────────────────────────────────────

    fn install_scroll_listener(self, coarse: bool) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // One recomputation per animation frame; momentum scrolling on
        // gesture-gated engines additionally rests between frames.
        let cooldown = if coarse { SCROLL_COOLDOWN_MS } else { 0.0 };
        let gate = Rc::new(Cell::new(FrameGate::new(cooldown)));

        let on_scroll = Closure::<dyn FnMut()>::new({
            let gate = Rc::clone(&gate);
            move || {
                let mut snapshot = gate.get();
                if !snapshot.request(js_sys::Date::now()) {
                    return;
                }
                gate.set(snapshot);

                let gate = Rc::clone(&gate);
                let frame = Closure::once_into_js(move || {
                    let mut snapshot = gate.get();
                    snapshot.complete(js_sys::Date::now());
                    gate.set(snapshot);
                    self.measure_scroll_state();
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.request_animation_frame(frame.unchecked_ref());
                }
            }
        });

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        let added = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );

        match added {
            Ok(()) => self.scroll_listener.set_value(Some(on_scroll)),
            // Page still renders, just without scroll-driven chrome.
            Err(_) => log::warn!("scroll listener could not be attached"),
        }
    }

    /// Read the live offset and section tops and feed them to the machine.
    fn measure_scroll_state(self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(offset) = window.scroll_y() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let mut probes = Vec::with_capacity(SectionId::ALL.len());
        for id in SectionId::ALL {
            // Sections missing from the document are simply not probed.
            if let Some(element) = document.get_element_by_id(id.dom_id()) {
                let top = element.get_bounding_client_rect().top() + offset;
                probes.push(SectionProbe::new(id, top));
            }
        }

        self.dispatch(Message::ScrollMeasured { offset, probes });
    }

    // ─────────────────────────────────────────────────────────
    // Hero video commands
    // ─────────────────────────────────────────────────────────

    fn attempt_playback(self, load_first: bool) {
        let Some(video) = self.video.get_untracked() else {
            // No element to play; same degradation as a load failure.
            self.dispatch(Message::VideoFailed);
            return;
        };

        if load_first {
            video.load();
        }

        match video.play() {
            Ok(promise) => {
                leptos::task::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => self.dispatch(Message::PlaybackStarted),
                        Err(_) => self.dispatch(Message::PlaybackBlocked),
                    }
                });
            }
            Err(_) => self.dispatch(Message::PlaybackBlocked),
        }
    }

    fn schedule_play_hint(self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = Closure::once(move || self.dispatch(Message::PlayHintDelayElapsed));
        let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            PLAY_HINT_DELAY_MS,
        );
        if scheduled.is_ok() {
            cb.forget();
        }
    }

    /// One-shot touch/click listeners for the single post-failure retry.
    /// `once` makes the browser drop each listener after its first fire;
    /// the handler also detaches the sibling so one gesture consumes both.
    fn arm_gesture_retry(self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let mut armed = Vec::with_capacity(2);
        for event in ["touchstart", "click"] {
            let cb = Closure::<dyn FnMut()>::new(move || {
                self.detach_gesture_listeners();
                self.dispatch(Message::GestureRetry);
            });

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            options.set_once(true);
            let added = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                cb.as_ref().unchecked_ref(),
                &options,
            );
            if added.is_ok() {
                armed.push((event, cb));
            }
        }

        self.gesture_listeners.update_value(|store| store.extend(armed));
    }

    /// Remove the retry listeners from the window. The closures stay in
    /// the store until [`teardown`](Self::teardown) because one of them
    /// may be the currently executing callback.
    fn detach_gesture_listeners(self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        self.gesture_listeners.update_value(|store| {
            for (event, cb) in store.iter() {
                let _ = window.remove_event_listener_with_callback(
                    event,
                    cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    /// Detach every window listener and drop the stored closures. Runs
    /// when the owning scope is disposed.
    fn teardown(self) {
        self.scroll_listener.update_value(|slot| {
            if let (Some(cb), Some(window)) = (slot.take(), web_sys::window()) {
                let _ = window
                    .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            }
        });
        self.detach_gesture_listeners();
        self.gesture_listeners.update_value(|store| store.clear());
    }
}

// ─────────────────────────────────────────────────────────
// Window helpers
// ─────────────────────────────────────────────────────────

fn current_href() -> Option<String> {
    let window = web_sys::window()?;
    window.location().href().ok()
}

fn detect_gesture_gate() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    needs_playback_gesture(&user_agent, navigator.max_touch_points())
}

fn replace_url(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if history
        .replace_state_with_url(&JsValue::NULL, "", Some(href))
        .is_err()
    {
        log::warn!("could not rewrite location after form redirect");
    }
}

fn scroll_window_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
