// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Toasts are transient cards stacked in a single container above the
//! application. Each slides in from its side, stays for its duration and
//! slides back out, unless the user closes it first.
//!
//! # Components
//!
//! - [`placement`] - `Position`/`Align` and the resolved container layout
//! - [`animation`] - Per-toast lifecycle state machine
//! - [`toast`] - `ToastOptions` builder and the `Toast` entity
//! - [`manager`] - `Manager` owning the container and the defaults
//! - [`view`] - iced widgets rendering the cards and the overlay
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::ui::notifications::{Manager, ToastOptions};
//!
//! let mut toasts = Manager::new();
//! toasts.success(ToastOptions::new("Saved").on_close(Message::Saved), now);
//!
//! // In update, feed ticks and clicks back and forward the fired hooks
//! let hooks = toasts.handle_message(message);
//! Task::batch(hooks.into_iter().map(Task::done))
//!
//! // In view, stack the overlay above the content
//! Stack::new().push(content).push(view_overlay(&toasts).map(Message::Toast))
//! ```

pub mod animation;
pub mod manager;
pub mod placement;
pub mod toast;
pub mod view;

pub use animation::Phase;
pub use manager::{Manager, Message as ToastMessage, Settings};
pub use placement::{Align, ContainerLayout, Inset, Position, Translate};
pub use toast::{Category, Toast, ToastId, ToastOptions};
pub use view::{view_overlay, view_toast};
