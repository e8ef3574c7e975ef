// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws its content shifted horizontally.
//! Layout is left untouched, so neighbours don't move while a toast slides in or out.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

/// A widget that renders and hit-tests its content `offset` pixels to the side.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: f32,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Creates a new `Slide`; a positive `offset` moves the content right.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, offset: f32) -> Self {
        Self {
            content: content.into(),
            offset,
        }
    }

    fn translation(&self) -> Vector {
        Vector::new(self.offset, 0.0)
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let translation = self.translation();
        let cursor = shift_cursor(cursor, translation);

        renderer.with_translation(translation, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let cursor = shift_cursor(cursor, self.translation());

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            shift_cursor(cursor, self.translation()),
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let translation = translation + self.translation();
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Helper function to create a sliding wrapper.
pub fn slide<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    offset: f32,
) -> Slide<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    Slide::new(content, offset)
}

/// Moves the cursor into the content's untranslated space.
fn shift_cursor(cursor: mouse::Cursor, translation: Vector) -> mouse::Cursor {
    match cursor {
        mouse::Cursor::Available(position) => mouse::Cursor::Available(position - translation),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn available_cursor_is_shifted_back() {
        let cursor = mouse::Cursor::Available(Point::new(150.0, 40.0));
        let shifted = shift_cursor(cursor, Vector::new(100.0, 0.0));
        assert_eq!(shifted.position(), Some(Point::new(50.0, 40.0)));
    }

    #[test]
    fn unavailable_cursor_is_untouched() {
        let shifted = shift_cursor(mouse::Cursor::Unavailable, Vector::new(100.0, 0.0));
        assert_eq!(shifted.position(), None);
    }

    #[test]
    fn translation_is_horizontal_only() {
        let slide: Slide<'_, (), iced::Theme, iced::Renderer> =
            Slide::new(iced::widget::text("toast"), -42.0);
        assert_eq!(slide.translation(), Vector::new(-42.0, 0.0));
    }
}
