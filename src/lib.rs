// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides toast notifications for Iced applications.
//!
//! Toasts slide in from the side of a single overlay container, stay for a
//! configurable duration and slide back out. The animation is a plain state
//! machine driven by the host's ticks, and lifecycle hooks come back as the
//! host's own messages.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
