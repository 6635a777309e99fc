//! # Discogs Integration Module
//!
//! Read-only client for the Discogs database API. The scrobbler consumes
//! exactly one structural shape from it: a release's artist credits,
//! album title and ordered tracklist, fetched by numeric release id. A
//! free-text query goes through the search endpoint and an interactive
//! picker instead.
//!
//! Requests authenticate with a personal access token in the
//! `Authorization: Discogs token=…` header and carry a fixed User-Agent
//! as the API terms require. When the `X-Discogs-Ratelimit-Remaining`
//! header runs low the client pauses briefly before returning, so a
//! follow-up invocation does not start rate-limited.

pub mod release;
