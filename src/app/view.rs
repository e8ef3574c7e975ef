// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::message::Hook;
use super::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{view_overlay, Align, Category, Manager, Position};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Color, Element, Length};

const POSITIONS: [Position; 3] = [Position::Left, Position::Center, Position::Right];
const ALIGNS: [Align; 3] = [Align::Top, Align::Center, Align::Bottom];

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a Manager<Message>,
    pub events: &'a [Hook],
}

/// Renders the demo controls with the toast overlay stacked above them.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings = ctx.toasts.settings();

    let categories = Row::new()
        .spacing(spacing::STACK_GAP)
        .push(show_button("Show", palette::NEUTRAL, None))
        .push(show_button("Success", palette::SUCCESS_500, Some(Category::Success)))
        .push(show_button("Error", palette::ERROR_500, Some(Category::Error)))
        .push(show_button("Warning", palette::WARNING_500, Some(Category::Warning)))
        .push(show_button("Message", palette::INFO_500, Some(Category::Info)));

    let positions = POSITIONS.iter().fold(
        Row::new().spacing(spacing::XXS).push(caption("Position")),
        |row, position| {
            row.push(choice_button(
                position.to_string(),
                *position == settings.position,
                Message::SetPosition(*position),
            ))
        },
    );

    let aligns = ALIGNS.iter().fold(
        Row::new().spacing(spacing::XXS).push(caption("Align")),
        |row, align| {
            row.push(choice_button(
                align.to_string(),
                *align == settings.align,
                Message::SetAlign(*align),
            ))
        },
    );

    let events = ctx
        .events
        .iter()
        .rev()
        .fold(Column::new().spacing(spacing::XXS), |column, hook| {
            column.push(Text::new(describe(*hook)).size(typography::CAPTION))
        });

    let controls = Column::new()
        .spacing(spacing::EDGE)
        .padding(spacing::EDGE)
        .push(categories)
        .push(positions)
        .push(aligns)
        .push(caption("Events"))
        .push(events);

    Stack::new()
        .push(
            Container::new(controls)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(view_overlay(ctx.toasts).map(Message::Toast))
        .into()
}

/// Human readable line for the event log.
pub fn describe(hook: Hook) -> String {
    match hook {
        Hook::Shown(seq) => format!("#{seq} shown"),
        Hook::Closed(seq) => format!("#{seq} closed"),
        Hook::Dismissed(seq) => format!("#{seq} dismissed by user"),
    }
}

fn show_button<'a>(
    label: &'a str,
    colour: Color,
    category: Option<Category>,
) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(Message::Show(category))
        .style(button_styles::accent(colour))
        .into()
}

fn choice_button<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .on_press(message)
        .style(button_styles::choice(selected))
        .into()
}

fn caption<'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label).size(typography::CAPTION).into()
}
