// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the default [`Settings`] and, once first used, the single
//! toast container. It creates toasts, drives their animation from the host's
//! tick and hands back hook messages as they fire.

use super::placement::{Align, ContainerLayout, Position};
use super::toast::{Category, Toast, ToastId, ToastOptions};
use crate::config::{Config, DEFAULT_DURATION_MS};
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a toast was pressed.
    Dismiss(ToastId),
    /// Animation tick carrying the current time.
    Tick(Instant),
}

/// Defaults applied to every toast that doesn't override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub duration: Duration,
    pub position: Position,
    pub align: Align,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_DURATION_MS),
            position: Position::default(),
            align: Align::default(),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            duration: config
                .duration_ms
                .filter(|ms| *ms > 0)
                .map_or(defaults.duration, Duration::from_millis),
            position: config.position.unwrap_or(defaults.position),
            align: config.align.unwrap_or(defaults.align),
        }
    }
}

#[derive(Debug)]
struct Container<M> {
    layout: ContainerLayout,
    /// Toasts in creation order.
    toasts: Vec<Toast<M>>,
}

/// Owns the toast container and the default settings.
#[derive(Debug)]
pub struct Manager<M> {
    settings: Settings,
    container: Option<Container<M>>,
    /// Latest time seen from the host; used to render and to time clicks.
    clock: Option<Instant>,
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            container: None,
            clock: None,
        }
    }
}

impl<M> Manager<M> {
    /// Creates a manager with default settings. The container is created on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager and configures it right away.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let mut manager = Self::new();
        manager.configure(settings);
        manager
    }

    /// Replaces the defaults, creating the container if needed and relaying it out.
    pub fn configure(&mut self, settings: Settings) {
        log::debug!(
            "configuring toasts: {}ms, {}/{}",
            settings.duration.as_millis(),
            settings.position,
            settings.align
        );
        self.settings = settings;
        self.apply_layout();
    }

    /// Changes the default placement for this and every later toast.
    pub fn set_default_placement(&mut self, position: Position, align: Align) {
        log::debug!("toast placement now {position}/{align}");
        self.settings.position = position;
        self.settings.align = align;
        self.apply_layout();
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Layout of the container, `None` until the container exists.
    #[must_use]
    pub fn container_layout(&self) -> Option<&ContainerLayout> {
        self.container.as_ref().map(|container| &container.layout)
    }

    /// Shows a toast and returns its handle.
    ///
    /// A `position` or `align` in `options` that differs from the current
    /// defaults is applied through [`Manager::set_default_placement`], so it
    /// also moves every toast shown afterwards.
    pub fn show(&mut self, options: ToastOptions<M>, now: Instant) -> ToastId {
        self.observe(now);

        if options.position.is_some() || options.align.is_some() {
            let position = options.position.unwrap_or(self.settings.position);
            let align = options.align.unwrap_or(self.settings.align);
            if (position, align) != (self.settings.position, self.settings.align) {
                self.set_default_placement(position, align);
            }
        }

        let duration = options
            .duration
            .filter(|duration| !duration.is_zero())
            .unwrap_or(self.settings.duration);
        let position = self.settings.position;
        let toast = Toast::new(options, duration, position, now);
        let id = toast.id();

        log::debug!("showing toast {id:?} for {}ms", duration.as_millis());
        self.container_mut().toasts.push(toast);
        id
    }

    /// Shows a toast with the success accent unless a colour is given.
    pub fn success(&mut self, options: ToastOptions<M>, now: Instant) -> ToastId {
        self.show_category(Category::Success, options, now)
    }

    /// Shows a toast with the error accent unless a colour is given.
    pub fn error(&mut self, options: ToastOptions<M>, now: Instant) -> ToastId {
        self.show_category(Category::Error, options, now)
    }

    /// Shows a toast with the warning accent unless a colour is given.
    pub fn warning(&mut self, options: ToastOptions<M>, now: Instant) -> ToastId {
        self.show_category(Category::Warning, options, now)
    }

    /// Shows a toast with the informational accent unless a colour is given.
    pub fn message(&mut self, options: ToastOptions<M>, now: Instant) -> ToastId {
        self.show_category(Category::Info, options, now)
    }

    fn show_category(
        &mut self,
        category: Category,
        options: ToastOptions<M>,
        now: Instant,
    ) -> ToastId {
        self.show(options.or_colour(category.colour()), now)
    }

    /// User dismissal through the close control: `on_dismiss`, then the
    /// regular dismissal. Unknown or already leaving toasts are ignored.
    pub fn close(&mut self, id: ToastId, now: Instant) -> Vec<M> {
        self.observe(now);
        let mut fired = Vec::new();
        if let Some(toast) = self.toast_mut(id) {
            if toast.close(now, &mut fired) {
                log::debug!("toast {id:?} closed by user");
            }
        }
        fired
    }

    /// Dismisses a toast through its handle: `on_close` and the exit slide.
    pub fn remove(&mut self, id: ToastId, now: Instant) -> Vec<M> {
        self.observe(now);
        let mut fired = Vec::new();
        if let Some(toast) = self.toast_mut(id) {
            toast.dismiss(now, &mut fired);
        }
        fired
    }

    /// Advances every toast to `now`, drops the ones whose exit slide has
    /// ended and returns the hooks that fired, in container order.
    pub fn tick(&mut self, now: Instant) -> Vec<M> {
        self.observe(now);
        let mut fired = Vec::new();
        let Some(container) = self.container.as_mut() else {
            return fired;
        };

        for toast in &mut container.toasts {
            toast.advance(now, &mut fired);
        }

        container.toasts.retain(|toast| {
            let removed = toast.is_removed();
            if removed {
                log::debug!("toast {:?} removed", toast.id());
            }
            !removed
        });

        fired
    }

    /// Handles a toast message and returns the hooks it fired.
    pub fn handle_message(&mut self, message: Message) -> Vec<M> {
        match message {
            Message::Dismiss(id) => {
                let now = self.clock.unwrap_or_else(Instant::now);
                self.close(id, now)
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Returns the toasts on screen, in creation order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast<M>> {
        self.container
            .iter()
            .flat_map(|container| container.toasts.iter())
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast<M>> {
        self.toasts().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.container
            .as_ref()
            .map_or(0, |container| container.toasts.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether any toast still needs ticks.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.is_empty()
    }

    /// Latest time passed in by the host.
    #[must_use]
    pub fn clock(&self) -> Option<Instant> {
        self.clock
    }

    /// Dismisses every toast still on screen and returns the hooks that fired.
    /// The toasts leave through their exit slide like any other dismissal.
    pub fn clear(&mut self, now: Instant) -> Vec<M> {
        self.observe(now);
        let mut fired = Vec::new();
        if let Some(container) = self.container.as_mut() {
            for toast in &mut container.toasts {
                toast.dismiss(now, &mut fired);
            }
        }
        fired
    }

    fn observe(&mut self, now: Instant) {
        if self.clock.is_none_or(|clock| now > clock) {
            self.clock = Some(now);
        }
    }

    fn apply_layout(&mut self) {
        let layout = ContainerLayout::new(self.settings.position, self.settings.align);
        self.container_mut().layout = layout;
    }

    fn container_mut(&mut self) -> &mut Container<M> {
        let settings = self.settings;
        self.container.get_or_insert_with(|| {
            log::debug!("creating toast container");
            Container {
                layout: ContainerLayout::new(settings.position, settings.align),
                toasts: Vec::new(),
            }
        })
    }

    fn toast_mut(&mut self, id: ToastId) -> Option<&mut Toast<M>> {
        self.container
            .as_mut()?
            .toasts
            .iter_mut()
            .find(|toast| toast.id() == id)
    }
}
