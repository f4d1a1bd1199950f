//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Seeding randomness from the clock
//! - Storage (LocalStorage on web)
//! - Canvas drawing and audio cues (web)

#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Seed for a new session's RNG
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    let millis = js_sys::Date::now() as u64;
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    millis.rotate_left(32) ^ noise
}

/// Seed for a new session's RNG
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
