// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one toast manager.
//!
//! The window offers a button per toast category, pickers for the default
//! placement and a log of the hooks fired by each toast.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Hook, Message};

use crate::config::{self, Config};
use crate::ui::notifications::{Category, Manager, Settings, ToastOptions};
use iced::{window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

/// Number of hook events kept in the on-screen log.
const EVENT_LOG_LEN: usize = 8;

/// Root Iced application state.
pub struct App {
    toasts: Manager<Message>,
    events: Vec<Hook>,
    next_seq: u32,
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(900.0, 600.0),
        min_size: Some(iced::Size::new(400.0, 300.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an Fn boot closure; the flags are consumed only once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Merges command line flags over the loaded configuration.
pub fn resolve_settings(config: &Config, flags: &Flags) -> Settings {
    let mut settings = Settings::from(config);
    if let Some(ms) = flags.duration_ms.filter(|ms| *ms > 0) {
        settings.duration = Duration::from_millis(ms);
    }
    if let Some(position) = flags.position {
        settings.position = position;
    }
    if let Some(align) = flags.align {
        settings.align = align;
    }
    settings
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("using default toast settings: {err}");
        Config::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let app = Self::with_settings(resolve_settings(&config, &flags));
        (app, Task::none())
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            toasts: Manager::with_settings(settings),
            events: Vec::new(),
            next_seq: 1,
        }
    }

    fn title(&self) -> String {
        String::from("Iced Toaster")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_toasts())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                let hooks = self.toasts.handle_message(toast_message);
                Task::batch(hooks.into_iter().map(Task::done))
            }
            Message::Show(category) => {
                self.show(category, Instant::now());
                Task::none()
            }
            Message::Hook(hook) => {
                log::info!("toast hook: {hook:?}");
                self.events.push(hook);
                if self.events.len() > EVENT_LOG_LEN {
                    self.events.remove(0);
                }
                Task::none()
            }
            Message::SetPosition(position) => {
                let align = self.toasts.settings().align;
                self.toasts.set_default_placement(position, align);
                Task::none()
            }
            Message::SetAlign(align) => {
                let position = self.toasts.settings().position;
                self.toasts.set_default_placement(position, align);
                Task::none()
            }
        }
    }

    fn show(&mut self, category: Option<Category>, now: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let (title, body) = match category {
            None => ("Saved", ""),
            Some(Category::Success) => ("Done", "Everything went fine."),
            Some(Category::Error) => ("Failed", "Try again"),
            Some(Category::Warning) => ("Careful", "Disk space is getting low."),
            Some(Category::Info) => ("Heads up", "A new version is available."),
        };

        let options = ToastOptions::new(format!("{title} #{seq}"))
            .message(body)
            .on_show(Message::Hook(Hook::Shown(seq)))
            .on_close(Message::Hook(Hook::Closed(seq)))
            .on_dismiss(Message::Hook(Hook::Dismissed(seq)));

        match category {
            None => self.toasts.show(options, now),
            Some(Category::Success) => self.toasts.success(options, now),
            Some(Category::Error) => self.toasts.error(options, now),
            Some(Category::Warning) => self.toasts.warning(options, now),
            Some(Category::Info) => self.toasts.message(options, now),
        };
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            events: &self.events,
        })
    }
}
