// SPDX-License-Identifier: MPL-2.0
use iced_toaster::app::{self, Flags};
use std::fmt::Display;
use std::str::FromStr;

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        duration_ms: opt_flag(&mut args, "--duration"),
        position: opt_flag(&mut args, "--position"),
        align: opt_flag(&mut args, "--align"),
        config_path: opt_flag(&mut args, "--config"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    app::run(flags)
}

/// Reads an optional flag; malformed values fall back to the defaults.
fn opt_flag<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("ignoring {key}: {err}");
        None
    })
}
