// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the caller-facing [`ToastOptions`] builder, the
//! [`Category`] presets and the [`Toast`] entity owned by the container.

use super::animation::{Lifecycle, Phase, Transition};
use super::placement::{Align, Position};
use crate::config::OFFSCREEN_FRACTION;
use crate::ui::design_tokens::{palette, sizing};
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a toast, returned by `show` as its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Notification category, used by the convenience constructors to pick a
/// default accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    Error,
    Warning,
    Info,
}

impl Category {
    /// Returns the default accent color for this category.
    #[must_use]
    pub fn colour(self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }
}

/// Options for a single toast. Unset fields fall back to the manager's defaults.
///
/// Hooks are host messages: the manager hands them back when the matching
/// lifecycle point is reached, each at most once.
#[derive(Debug, Clone)]
pub struct ToastOptions<M> {
    pub title: String,
    pub message: Option<String>,
    pub duration: Option<Duration>,
    pub position: Option<Position>,
    pub align: Option<Align>,
    pub colour: Option<Color>,
    pub on_show: Option<M>,
    pub on_close: Option<M>,
    pub on_dismiss: Option<M>,
}

impl<M> Default for ToastOptions<M> {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: None,
            duration: None,
            position: None,
            align: None,
            colour: None,
            on_show: None,
            on_close: None,
            on_dismiss: None,
        }
    }
}

impl<M> ToastOptions<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }

    #[must_use]
    pub fn on_show(mut self, message: M) -> Self {
        self.on_show = Some(message);
        self
    }

    #[must_use]
    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Fills in the accent color unless one was given explicitly.
    #[must_use]
    pub(super) fn or_colour(mut self, colour: Color) -> Self {
        self.colour.get_or_insert(colour);
        self
    }
}

#[derive(Debug)]
struct Hooks<M> {
    on_show: Option<M>,
    on_close: Option<M>,
    on_dismiss: Option<M>,
}

/// A toast on screen.
#[derive(Debug)]
pub struct Toast<M> {
    id: ToastId,
    title: String,
    message: Option<String>,
    colour: Color,
    duration: Duration,
    position: Position,
    /// Auto-dismiss deadline; cleared once it fires or the toast is dismissed.
    deadline: Option<Instant>,
    lifecycle: Lifecycle,
    hooks: Hooks<M>,
}

impl<M> Toast<M> {
    /// Builds a toast from already merged values and inserts it at `now`.
    pub(super) fn new(
        options: ToastOptions<M>,
        duration: Duration,
        position: Position,
        now: Instant,
    ) -> Self {
        let mut lifecycle = Lifecycle::new(now);
        lifecycle.insert();

        Self {
            id: ToastId::new(),
            title: options.title,
            message: options.message.filter(|message| !message.is_empty()),
            colour: options.colour.unwrap_or(palette::NEUTRAL),
            duration,
            position,
            // Durations past the clock's range never time out.
            deadline: now.checked_add(duration),
            lifecycle,
            hooks: Hooks {
                on_show: options.on_show,
                on_close: options.on_close,
                on_dismiss: options.on_dismiss,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the body text, `None` when omitted or empty.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn colour(&self) -> Color {
        self.colour
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Placement the toast was shown with; decides its slide direction.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Returns whether the auto-dismiss deadline is still armed.
    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Horizontal translation in pixels at `now`; positive moves right.
    #[must_use]
    pub fn translation(&self, now: Instant) -> f32 {
        self.lifecycle.offset(now) * OFFSCREEN_FRACTION * sizing::TOAST_WIDTH * self.position.side()
    }

    pub(super) fn is_removed(&self) -> bool {
        self.lifecycle.phase() == Phase::Removed
    }

    /// Runs everything due at `now`: entry steps, the deadline, exit steps.
    pub(super) fn advance(&mut self, now: Instant, fired: &mut Vec<M>) {
        if let Some(deadline) = self.deadline.filter(|deadline| *deadline <= now) {
            self.step(deadline, fired);
            log::debug!("toast {:?} timed out", self.id);
            self.dismiss(deadline, fired);
        }
        self.step(now, fired);
    }

    /// Dismissal through the close control.
    pub(super) fn close(&mut self, now: Instant, fired: &mut Vec<M>) -> bool {
        if self.lifecycle.is_leaving() {
            return false;
        }
        fired.extend(self.hooks.on_dismiss.take());
        self.dismiss(now, fired)
    }

    /// Shared dismissal path: cancels the deadline, fires `on_close` and
    /// starts the exit slide.
    pub(super) fn dismiss(&mut self, now: Instant, fired: &mut Vec<M>) -> bool {
        if self.lifecycle.is_leaving() {
            return false;
        }
        self.deadline = None;
        // on_show is promised once per toast, even when it never finished entering
        fired.extend(self.hooks.on_show.take());
        fired.extend(self.hooks.on_close.take());
        self.lifecycle.leave(now)
    }

    fn step(&mut self, now: Instant, fired: &mut Vec<M>) {
        while let Some(transition) = self.lifecycle.advance(now) {
            log::trace!("toast {:?}: {transition:?}", self.id);
            if transition == Transition::SlideIn {
                fired.extend(self.hooks.on_show.take());
            }
        }
    }
}
