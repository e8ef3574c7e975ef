// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! # Modules
//!
//! - [`notifications`] - Toast notification system
//! - [`widgets`] - Custom Iced widgets (horizontal slide)
//! - [`styles`] - Centralized button styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod widgets;
