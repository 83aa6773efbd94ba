//! penta-ui - UI state machine for the Penta Traders landing page
//!
//! The page's entire interactive surface is one state machine: scroll
//! driven section highlighting, the scroll-to-top button, the mobile menu
//! panel, the form-success banner, and the hero video's playback ladder
//! with its gesture-gated mobile WebKit variant.
//!
//! This crate is the pure half of that machine, TEA style: [`UiState`] is
//! the model, [`Message`] the events, [`update()`] the only place state
//! changes. Browser side effects are returned as [`UpdateAction`] values
//! and executed by the site crate, which is what keeps everything here
//! runnable under plain `cargo test` with no DOM in sight.

pub mod message;
pub mod platform;
pub mod query;
pub mod scroll;
pub mod state;
pub mod update;

// Re-export primary types
pub use message::Message;
pub use platform::needs_playback_gesture;
pub use scroll::{
    FrameGate, SectionProbe, SCROLL_COOLDOWN_MS, SCROLL_TOP_THRESHOLD, SECTION_LOOKAHEAD,
};
pub use state::{SectionId, UiState, VideoPhase, VideoState};
pub use update::{update, UpdateAction, UpdateResult, PLAY_HINT_DELAY_MS};
