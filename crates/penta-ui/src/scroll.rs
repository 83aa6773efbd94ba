//! Scroll position math: scroll-top threshold, active-section scan, and
//! the per-frame recomputation gate.
//!
//! All functions here are pure so the thresholds and the scan can be
//! exercised without a DOM. The site crate measures the real document and
//! feeds the numbers in.

use crate::state::SectionId;

/// Vertical offset (px) beyond which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 80.0;

/// Lookahead (px) added to the scroll offset before the section scan, so a
/// section counts as active slightly before its top crosses the viewport
/// edge under the sticky header.
pub const SECTION_LOOKAHEAD: f64 = 120.0;

/// Minimum pause (ms) between recomputations on gesture-gated platforms,
/// where scroll events arrive in dense bursts during momentum scrolling.
pub const SCROLL_COOLDOWN_MS: f64 = 150.0;

/// A section's document-space top offset, measured at scroll time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProbe {
    pub id: SectionId,
    /// Distance from the document top to the section top, in px.
    pub top: f64,
}

impl SectionProbe {
    pub fn new(id: SectionId, top: f64) -> Self {
        Self { id, top }
    }
}

/// True when the scroll-to-top button should be visible at `offset`.
pub fn show_scroll_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// The last section in document order whose top sits at or above the
/// lookahead line. Falls back to [`SectionId::Home`] when nothing
/// qualifies or no probes resolved.
pub fn active_section(probes: &[SectionProbe], offset: f64) -> SectionId {
    let line = offset + SECTION_LOOKAHEAD;
    let mut active = SectionId::default();
    for id in SectionId::ALL {
        let Some(probe) = probes.iter().find(|probe| probe.id == id) else {
            continue;
        };
        if probe.top <= line {
            active = id;
        }
    }
    active
}

/// Coalesces scroll recomputation to at most one per animation frame, with
/// an optional cooldown window between frames.
///
/// A raw scroll event calls [`request`](FrameGate::request); `true` means
/// the caller should schedule a single animation-frame callback. That
/// callback performs the measurement and calls
/// [`complete`](FrameGate::complete), which reopens the gate once the
/// cooldown has passed. Events arriving while a frame is pending or the
/// cooldown is running are dropped, not queued.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
    cooldown_ms: f64,
    ready_at: f64,
}

impl FrameGate {
    /// A `cooldown_ms` of zero disables the cooldown entirely.
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            pending: false,
            cooldown_ms,
            ready_at: 0.0,
        }
    }

    /// Note a scroll event at time `now` (ms). Returns `true` when an
    /// animation-frame callback should be scheduled.
    pub fn request(&mut self, now: f64) -> bool {
        if self.pending || now < self.ready_at {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled frame ran at time `now`; reopens the gate after the
    /// cooldown window.
    pub fn complete(&mut self, now: f64) {
        self.pending = false;
        self.ready_at = now + self.cooldown_ms;
    }
}
