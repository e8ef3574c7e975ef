// SPDX-License-Identifier: MPL-2.0
use iced_toaster::config::{self, Config};
use iced_toaster::ui::design_tokens::palette;
use iced_toaster::ui::notifications::{
    Align, Inset, Manager, Phase, Position, Settings, ToastMessage, ToastOptions, Translate,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hook {
    Show,
    Close,
    Dismiss,
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Ticks every 16ms from `from` to `to` (inclusive), collecting fired hooks.
fn run(manager: &mut Manager<Hook>, start: Instant, from: u64, to: u64) -> Vec<Hook> {
    let mut fired = Vec::new();
    let mut at = from;
    while at <= to {
        fired.extend(manager.tick(start + ms(at)));
        at += 16;
    }
    fired.extend(manager.tick(start + ms(to)));
    fired
}

#[test]
fn saved_toast_times_out_without_dismiss() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let id = manager.show(
        ToastOptions::new("Saved")
            .duration(ms(1000))
            .on_show(Hook::Show)
            .on_close(Hook::Close)
            .on_dismiss(Hook::Dismiss),
        start,
    );

    let toast = manager.get(id).expect("toast is shown synchronously");
    assert_eq!(toast.colour(), palette::NEUTRAL);
    assert!(toast.message().is_none());

    let fired = run(&mut manager, start, 0, 999);
    assert_eq!(fired, vec![Hook::Show]);
    assert_eq!(manager.get(id).map(|toast| toast.phase()), Some(Phase::Visible));

    let fired = run(&mut manager, start, 1000, 1299);
    assert_eq!(fired, vec![Hook::Close]);
    assert_eq!(manager.get(id).map(|toast| toast.phase()), Some(Phase::Leaving));

    assert!(manager.tick(start + ms(1300)).is_empty());
    assert!(manager.get(id).is_none());
}

#[test]
fn failed_toast_closed_by_user() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let id = manager.error(
        ToastOptions::new("Failed")
            .message("Try again")
            .on_close(Hook::Close)
            .on_dismiss(Hook::Dismiss),
        start,
    );

    {
        let toast = manager.get(id).unwrap();
        assert_eq!(toast.colour(), palette::ERROR_500);
        assert_eq!(toast.message(), Some("Try again"));
    }

    run(&mut manager, start, 0, 2000);
    assert_eq!(
        manager.handle_message(ToastMessage::Dismiss(id)),
        vec![Hook::Dismiss, Hook::Close]
    );

    // Still on screen during the exit slide, gone after it.
    assert!(manager.tick(start + ms(2299)).is_empty());
    assert!(manager.get(id).is_some());
    manager.tick(start + ms(2300));
    assert!(manager.get(id).is_none());

    // The original deadline passes without a second close.
    assert!(run(&mut manager, start, 2300, 6000).is_empty());
}

#[test]
fn every_toast_closes_exactly_once() {
    let start = Instant::now();
    let mut manager = Manager::new();
    let ids: Vec<_> = (0..6)
        .map(|i| {
            manager.show(
                ToastOptions::new(format!("t{i}"))
                    .duration(ms(500 + i * 100))
                    .on_close(Hook::Close)
                    .on_dismiss(Hook::Dismiss),
                start,
            )
        })
        .collect();

    let mut fired = run(&mut manager, start, 0, 200);
    fired.extend(manager.close(ids[1], start + ms(250)));
    fired.extend(manager.remove(ids[4], start + ms(260)));
    fired.extend(run(&mut manager, start, 260, 3000));

    assert_eq!(fired.iter().filter(|hook| **hook == Hook::Close).count(), 6);
    assert_eq!(fired.iter().filter(|hook| **hook == Hook::Dismiss).count(), 1);
    assert!(manager.is_empty());
}

#[test]
fn container_layout_for_every_placement() {
    let cases = [
        (Position::Right, Align::Top, Inset::Px(20.0), Inset::Px(20.0), Translate::NONE),
        (Position::Left, Align::Bottom, Inset::Px(20.0), Inset::Px(20.0), Translate::NONE),
        (
            Position::Center,
            Align::Top,
            Inset::Percent(50.0),
            Inset::Px(20.0),
            Translate { x: -50.0, y: 0.0 },
        ),
        (
            Position::Right,
            Align::Center,
            Inset::Px(20.0),
            Inset::Percent(50.0),
            Translate { x: 0.0, y: -50.0 },
        ),
        (
            Position::Center,
            Align::Center,
            Inset::Percent(50.0),
            Inset::Percent(50.0),
            Translate { x: -50.0, y: -50.0 },
        ),
    ];

    let mut manager = Manager::<Hook>::new();
    for (position, align, horizontal, vertical, translate) in cases {
        manager.set_default_placement(position, align);
        let layout = manager.container_layout().unwrap();

        let actual_horizontal = match position {
            Position::Right => layout.right,
            Position::Left | Position::Center => layout.left,
        };
        let actual_vertical = match align {
            Align::Bottom => layout.bottom,
            Align::Top | Align::Center => layout.top,
        };
        assert_eq!(actual_horizontal, horizontal, "{position}/{align}");
        assert_eq!(actual_vertical, vertical, "{position}/{align}");
        assert_eq!(layout.translate, translate, "{position}/{align}");
    }
}

#[test]
fn config_file_drives_manager_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        duration_ms: Some(1500),
        position: Some(Position::Left),
        align: Some(Align::Bottom),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let mut manager = Manager::<Hook>::with_settings(Settings::from(&loaded));
    let id = manager.show(ToastOptions::new("x"), Instant::now());

    assert_eq!(manager.get(id).unwrap().duration(), ms(1500));
    assert_eq!(manager.container_layout().unwrap().bottom, Inset::Px(20.0));
    assert_eq!(manager.container_layout().unwrap().left, Inset::Px(20.0));

    dir.close().expect("Failed to close temporary directory");
}
