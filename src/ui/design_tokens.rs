// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the toaster's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and accent colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Offsets and paddings
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toaster::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent shadow color
let shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};

// Distance between the container and the window edge
let inset = spacing::EDGE; // 20px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// #333, card text and the neutral accent.
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);
    /// #999, dismiss glyph.
    pub const GRAY_500: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.9, 0.9);

    // Accent colors
    pub const NEUTRAL: Color = GRAY_800;
    /// #4CAF50
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
    /// #F44336
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212);
    /// #FF9800
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.596, 0.0);
    /// #2196F3
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.2;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 5.0;
    /// Gap between stacked toasts.
    pub const STACK_GAP: f32 = 10.0;
    pub const SM: f32 = 15.0;
    /// Distance between the container and the window edges.
    pub const EDGE: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Fixed card width.
    pub const TOAST_WIDTH: f32 = 300.0;
    /// Width of the colored bar on the card's left edge.
    pub const ACCENT_WIDTH: f32 = 5.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast heading
    pub const TITLE: f32 = 16.0;

    /// Toast body text
    pub const BODY: f32 = 14.0;

    /// The `×` dismiss glyph
    pub const DISMISS_GLYPH: f32 = 20.0;

    /// Demo application labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const NONE: f32 = 0.0;
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// `0 2px 10px rgba(0, 0, 0, 0.2)`
    pub const CARD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::STACK_GAP > spacing::XXS);
    assert!(spacing::SM > spacing::STACK_GAP);
    assert!(spacing::EDGE > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(sizing::TOAST_WIDTH > sizing::ACCENT_WIDTH);

    assert!(typography::DISMISS_GLYPH > typography::TITLE);
    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
