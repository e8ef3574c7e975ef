// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Auto-dismiss duration
//! - **Motion**: Entry delay and slide timings
//! - **Subscription**: Animation tick cadence

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 5000;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Delay between inserting a toast and starting its entry slide.
/// Leaves one frame for the off-screen starting offset to be drawn.
pub const ENTRY_DELAY_MS: u64 = 10;

/// Duration of the entry and exit slides. Removal happens when the exit slide ends.
pub const SLIDE_MS: u64 = 300;

/// How far a hidden toast sits from its resting place, as a fraction of its width.
pub const OFFSCREEN_FRACTION: f32 = 1.2;

// ==========================================================================
// Subscription Defaults
// ==========================================================================

/// Tick interval while toasts are on screen (about one frame at 60 Hz).
pub const TICK_INTERVAL_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_delay_is_shorter_than_slide() {
        assert!(ENTRY_DELAY_MS < SLIDE_MS);
    }

    #[test]
    fn hidden_offset_clears_the_card() {
        assert!(OFFSCREEN_FRACTION > 1.0);
    }

    #[test]
    fn tick_is_finer_than_slide() {
        assert!(TICK_INTERVAL_MS * 4 < SLIDE_MS);
    }
}
