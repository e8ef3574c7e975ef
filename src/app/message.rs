// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{Align, Category, Position, ToastMessage};
use std::path::PathBuf;

/// Lifecycle hooks reported back by toasts, tagged with the demo's sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Shown(u32),
    Closed(u32),
    Dismissed(u32),
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(ToastMessage),
    /// Show a toast of the given category; `None` uses the neutral accent.
    Show(Option<Category>),
    Hook(Hook),
    SetPosition(Position),
    SetAlign(Align),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub duration_ms: Option<u64>,
    pub position: Option<Position>,
    pub align: Option<Align>,
    /// Settings file to read instead of the per-user one.
    pub config_path: Option<PathBuf>,
}
