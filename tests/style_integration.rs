// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toaster::ui::design_tokens::{palette, sizing, spacing};
    use iced_toaster::ui::notifications::{Align, Category, ContainerLayout, Position};
    use iced_toaster::ui::styles::button;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Light;

        let _ = button::accent(palette::INFO_500)(&theme, iced::widget::button::Status::Active);
        let _ = button::choice(true)(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn category_colours_come_from_palette() {
        assert_eq!(Category::Success.colour(), palette::SUCCESS_500);
        assert_eq!(Category::Info.colour(), palette::INFO_500);
    }

    #[test]
    fn layout_padding_uses_edge_spacing() {
        let padding = ContainerLayout::new(Position::Right, Align::Top).padding();
        assert_eq!(padding.top, spacing::EDGE);
        assert_eq!(padding.right, spacing::EDGE);
        assert_eq!(padding.left, 0.0);
    }

    #[test]
    fn card_is_wider_than_its_accent_and_gaps() {
        assert!(sizing::TOAST_WIDTH > sizing::ACCENT_WIDTH + spacing::EDGE * 2.0);
    }
}
