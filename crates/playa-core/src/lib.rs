//! Playa Core - session engine for the player-state simulation
//!
//! `playa-logic` computes deltas and resolves recipes; this crate plays the
//! caller's part. A [`GameSession`](engine::GameSession) owns one player's
//! stats, inventory and position, applies each frame's deltas with clamping,
//! and paces auto-craft passes.
//!
//! # Example
//!
//! ```rust,no_run
//! use playa_core::prelude::*;
//!
//! let mut session = GameSession::new(SessionConfig::default(), RecipeCatalog::standard());
//! let mut sink = LogSink;
//!
//! session.pick_up(ItemType::Rope, 1);
//! loop {
//!     session.update(1.0 / 60.0, &mut sink); // 60 FPS
//! }
//! ```

pub mod config;
pub mod engine;
pub mod sink;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::engine::{GameSession, SessionSnapshot, TickReport};
    pub use crate::sink::LogSink;
    pub use playa_logic::prelude::*;
}
