//! # CLI Module
//!
//! This module provides the command-line interface layer for needledrop,
//! a vinyl scrobbler that submits back-dated listen events to Last.fm
//! from Discogs release metadata. It implements all user-facing commands
//! and coordinates between the API clients, the local caches, and user
//! interaction.
//!
//! ## Commands
//!
//! - [`auth`] - Obtains and caches a Last.fm session key, via the
//!   browser-authorized token flow or the password-based mobile flow
//! - [`scrobble`] - The submission orchestrator: fetch a release,
//!   normalize its tracklist, compute the back-dated schedule, and
//!   submit one listen event per track with a fixed delay between them
//! - [`info`] - Fetches a release and displays its tracklist with the
//!   parsed durations, without touching Last.fm
//! - [`history`] - Lists past runs from the local session log
//!
//! ## Control Flow
//!
//! ```text
//! Discogs release fetch
//!     ↓
//! Duration parsing + 30 s floor
//!     ↓
//! Timestamp schedule (last track ≈ now)
//!     ↓
//! Signed track.scrobble per track, fixed delay between submissions
//!     ↓
//! Session log append
//! ```
//!
//! ## Error Handling Philosophy
//!
//! Missing configuration, failed authentication and a failed release
//! fetch abort the run through the `error!` macro. A failed single-track
//! submission and a failed log write are reported inline with `warning!`
//! and the run proceeds.

mod auth;
mod history;
mod info;
mod scrobble;

pub use auth::auth;
pub use history::history;
pub use info::info;
pub use scrobble::scrobble;
pub use scrobble::submit_entries;
