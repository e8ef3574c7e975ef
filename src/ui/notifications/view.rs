// SPDX-License-Identifier: MPL-2.0
//! Toast widgets.
//!
//! Toasts are drawn as fixed-width cards with a colored accent bar on the left,
//! a bold title, an optional message and a `×` dismiss button. The overlay
//! fills the window and places the stack according to the container layout.

use super::manager::{Manager, Message};
use super::toast::Toast;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::widgets::slide;
use iced::border::Radius;
use iced::font::Weight;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

const DISMISS_GLYPH: &str = "\u{00d7}";

/// Renders a single toast card at rest.
pub fn view_toast<'a, M>(toast: &'a Toast<M>) -> Element<'a, Message> {
    let accent = toast.colour();

    let title = Text::new(toast.title())
        .size(typography::TITLE)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let mut content = Column::new().spacing(spacing::XXS).push(title);
    if let Some(message) = toast.message() {
        content = content.push(Text::new(message).size(typography::BODY));
    }

    let dismiss_button = button(
        text(DISMISS_GLYPH)
            .size(typography::DISMISS_GLYPH)
            .line_height(1.0),
    )
    .on_press(Message::Dismiss(toast.id()))
    .padding(Padding::from([0.0, spacing::XXS]))
    .style(dismiss_button_style);

    let body = Row::new()
        .align_y(alignment::Vertical::Top)
        .push(Container::new(content).width(Length::Fill))
        .push(Space::new().width(Length::Fixed(spacing::STACK_GAP)))
        .push(dismiss_button);

    let card = Container::new(body)
        .width(Length::Fill)
        .padding(Padding {
            top: spacing::SM,
            right: spacing::EDGE,
            bottom: spacing::SM,
            left: spacing::SM,
        })
        .style(toast_container_style);

    // The accent shows through as a bar along the card's left edge.
    Container::new(card)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(Padding {
            left: sizing::ACCENT_WIDTH,
            ..Padding::ZERO
        })
        .style(move |_theme: &Theme| accent_style(accent))
        .into()
}

/// Renders the overlay holding every toast, slid to its position at the
/// manager's latest tick.
pub fn view_overlay<'a, M>(manager: &'a Manager<M>) -> Element<'a, Message> {
    let (Some(layout), Some(now)) = (manager.container_layout(), manager.clock()) else {
        return empty();
    };
    if manager.is_empty() {
        return empty();
    }

    let stack = Column::with_children(manager.toasts().map(|toast| slid(toast, now)))
        .spacing(spacing::STACK_GAP)
        .align_x(layout.horizontal());

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(layout.horizontal())
        .align_y(layout.vertical())
        .padding(layout.padding())
        .clip(true)
        .into()
}

fn slid<'a, M>(toast: &'a Toast<M>, now: Instant) -> Element<'a, Message> {
    slide(view_toast(toast), toast.translation(now)).into()
}

fn empty<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Style function for the toast card body.
fn toast_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::WHITE)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: border::NONE,
            radius: Radius {
                top_left: radius::NONE,
                top_right: radius::SM,
                bottom_right: radius::SM,
                bottom_left: radius::NONE,
            },
        },
        text_color: Some(palette::GRAY_800),
        ..Default::default()
    }
}

/// Style function for the accent frame around the card body.
fn accent_style(accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(accent)),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: border::NONE,
            radius: radius::SM.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_800,
        button::Status::Active => palette::GRAY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_500
        },
    };

    button::Style {
        background: None,
        text_color,
        border: iced::Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
