// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button tinted with a toast accent color.
pub fn accent(colour: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::OVERLAY_MEDIUM + opacity::OVERLAY_SUBTLE,
                ..colour
            },
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colour
            },
            button::Status::Active | button::Status::Pressed => colour,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: colour,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Outline button used by pickers; `selected` fills it.
pub fn choice(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered);
        let (background, text_color) = if selected {
            (Some(Background::Color(palette::GRAY_800)), palette::WHITE)
        } else if hovered {
            (Some(Background::Color(palette::GRAY_200)), palette::GRAY_800)
        } else {
            (None, palette::GRAY_800)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: palette::GRAY_800,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
