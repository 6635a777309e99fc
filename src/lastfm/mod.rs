//! # Last.fm Integration Module
//!
//! This module implements the Last.fm web service calls the scrobbler
//! needs. Every state-changing call is authenticated with an `api_sig`
//! parameter computed by the [`sign`] module: the request parameters are
//! sorted by name, concatenated without delimiters, the shared secret is
//! appended, and the MD5 digest of the result is sent as lowercase hex.
//!
//! ## Core Modules
//!
//! - [`sign`] - Canonical request signature construction
//! - [`auth`] - Session-key acquisition, via either the user-authorized
//!   token flow (`auth.getToken` / `auth.getSession`) or the
//!   password-based mobile flow (`auth.getMobileSession`)
//! - [`scrobble`] - Submission of one back-dated listen event
//!   (`track.scrobble`)
//!
//! ## Error Handling
//!
//! Transport failures and service-level errors are both surfaced as
//! `Err(String)` with the message Last.fm returned where one exists. The
//! caller decides severity: a failed authentication is fatal, a failed
//! single-track submission is reported and skipped. No call is retried.

pub mod auth;
pub mod scrobble;
pub mod sign;

/// Every Last.fm method is a POST or GET against this single endpoint.
pub(crate) const API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Users authorize a request token at this page during the token flow.
pub(crate) const AUTH_URL: &str = "https://www.last.fm/api/auth/";
