// SPDX-License-Identifier: MPL-2.0
//! Container placement.
//!
//! `Position` picks the horizontal edge (and the side toasts slide from),
//! `Align` the vertical one. Together they resolve to a [`ContainerLayout`]:
//! edge insets plus a centering translation, the same box model a fixed-position
//! element would use.

use crate::error::{Error, Result};
use crate::ui::design_tokens::spacing;
use iced::{alignment, Padding};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal placement of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    #[default]
    Right,
    Center,
}

impl Position {
    /// Direction toasts slide in from and out to: `1.0` for the right edge,
    /// `-1.0` for the left. Centered toasts use the left side.
    #[must_use]
    pub fn side(self) -> f32 {
        match self {
            Position::Right => 1.0,
            Position::Left | Position::Center => -1.0,
        }
    }
}

/// Vertical placement of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Top,
    Bottom,
    Center,
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Position::Left),
            "right" => Ok(Position::Right),
            "center" => Ok(Position::Center),
            other => Err(Error::InvalidOption(format!("unknown position `{other}`"))),
        }
    }
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Align::Top),
            "bottom" => Ok(Align::Bottom),
            "center" => Ok(Align::Center),
            other => Err(Error::InvalidOption(format!("unknown align `{other}`"))),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Center => "center",
        })
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Align::Top => "top",
            Align::Bottom => "bottom",
            Align::Center => "center",
        })
    }
}

/// One edge offset of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Inset {
    #[default]
    Auto,
    Px(f32),
    Percent(f32),
}

/// Translation applied to the container, in percent of its own size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translate {
    pub x: f32,
    pub y: f32,
}

impl Translate {
    pub const NONE: Translate = Translate { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Resolved layout of the toast container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerLayout {
    pub position: Position,
    pub align: Align,
    pub top: Inset,
    pub right: Inset,
    pub bottom: Inset,
    pub left: Inset,
    pub translate: Translate,
}

impl ContainerLayout {
    /// Derives the layout for a placement. Every field is recomputed, so no
    /// translation survives from a previous placement.
    #[must_use]
    pub fn new(position: Position, align: Align) -> Self {
        let mut layout = Self {
            position,
            align,
            top: Inset::Auto,
            right: Inset::Auto,
            bottom: Inset::Auto,
            left: Inset::Auto,
            translate: Translate::NONE,
        };

        match align {
            Align::Top => layout.top = Inset::Px(spacing::EDGE),
            Align::Bottom => layout.bottom = Inset::Px(spacing::EDGE),
            Align::Center => {
                layout.top = Inset::Percent(50.0);
                layout.translate.y = -50.0;
            }
        }

        match position {
            Position::Right => layout.right = Inset::Px(spacing::EDGE),
            Position::Left => layout.left = Inset::Px(spacing::EDGE),
            Position::Center => {
                layout.left = Inset::Percent(50.0);
                layout.translate.x = -50.0;
            }
        }

        layout
    }

    /// Horizontal alignment equivalent of the insets.
    #[must_use]
    pub fn horizontal(&self) -> alignment::Horizontal {
        match self.position {
            Position::Left => alignment::Horizontal::Left,
            Position::Right => alignment::Horizontal::Right,
            Position::Center => alignment::Horizontal::Center,
        }
    }

    /// Vertical alignment equivalent of the insets.
    #[must_use]
    pub fn vertical(&self) -> alignment::Vertical {
        match self.align {
            Align::Top => alignment::Vertical::Top,
            Align::Bottom => alignment::Vertical::Bottom,
            Align::Center => alignment::Vertical::Center,
        }
    }

    /// Pixel insets as padding for a window-sized overlay. Percent insets are
    /// expressed through alignment instead and contribute nothing here.
    #[must_use]
    pub fn padding(&self) -> Padding {
        fn px(inset: Inset) -> f32 {
            match inset {
                Inset::Px(value) => value,
                Inset::Auto | Inset::Percent(_) => 0.0,
            }
        }

        Padding {
            top: px(self.top),
            right: px(self.right),
            bottom: px(self.bottom),
            left: px(self.left),
        }
    }
}

impl Default for ContainerLayout {
    fn default() -> Self {
        Self::new(Position::default(), Align::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [Position; 3] = [Position::Left, Position::Right, Position::Center];
    const ALIGNS: [Align; 3] = [Align::Top, Align::Bottom, Align::Center];

    #[test]
    fn right_top_uses_edge_offsets_without_translation() {
        let layout = ContainerLayout::new(Position::Right, Align::Top);
        assert_eq!(layout.right, Inset::Px(20.0));
        assert_eq!(layout.top, Inset::Px(20.0));
        assert_eq!(layout.left, Inset::Auto);
        assert_eq!(layout.bottom, Inset::Auto);
        assert!(layout.translate.is_none());
    }

    #[test]
    fn center_center_translates_both_axes() {
        let layout = ContainerLayout::new(Position::Center, Align::Center);
        assert_eq!(layout.left, Inset::Percent(50.0));
        assert_eq!(layout.top, Inset::Percent(50.0));
        assert_eq!(layout.translate, Translate { x: -50.0, y: -50.0 });
        assert_eq!(layout.horizontal(), alignment::Horizontal::Center);
        assert_eq!(layout.vertical(), alignment::Vertical::Center);
    }

    #[test]
    fn left_bottom_uses_left_and_bottom_edges() {
        let layout = ContainerLayout::new(Position::Left, Align::Bottom);
        assert_eq!(layout.left, Inset::Px(20.0));
        assert_eq!(layout.bottom, Inset::Px(20.0));
        assert_eq!(layout.padding(), Padding {
            top: 0.0,
            right: 0.0,
            bottom: 20.0,
            left: 20.0,
        });
    }

    #[test]
    fn centered_axis_translates_only_that_axis() {
        for align in [Align::Top, Align::Bottom] {
            let layout = ContainerLayout::new(Position::Center, align);
            assert_eq!(layout.translate, Translate { x: -50.0, y: 0.0 });
        }
        for position in [Position::Left, Position::Right] {
            let layout = ContainerLayout::new(position, Align::Center);
            assert_eq!(layout.translate, Translate { x: 0.0, y: -50.0 });
        }
    }

    #[test]
    fn every_placement_sets_exactly_one_inset_per_axis() {
        for position in POSITIONS {
            for align in ALIGNS {
                let layout = ContainerLayout::new(position, align);
                let vertical = [layout.top, layout.bottom]
                    .iter()
                    .filter(|inset| **inset != Inset::Auto)
                    .count();
                let horizontal = [layout.left, layout.right]
                    .iter()
                    .filter(|inset| **inset != Inset::Auto)
                    .count();
                assert_eq!(vertical, 1, "{position}/{align}");
                assert_eq!(horizontal, 1, "{position}/{align}");
            }
        }
    }

    #[test]
    fn parse_accepts_known_values_case_insensitively() {
        assert_eq!("LEFT".parse::<Position>().unwrap(), Position::Left);
        assert_eq!(" center ".parse::<Align>().unwrap(), Align::Center);
        assert!("diagonal".parse::<Position>().is_err());
        assert!(matches!("middle".parse::<Align>(), Err(Error::InvalidOption(_))));
    }

    #[test]
    fn display_matches_parse() {
        for position in POSITIONS {
            assert_eq!(position.to_string().parse::<Position>().unwrap(), position);
        }
        for align in ALIGNS {
            assert_eq!(align.to_string().parse::<Align>().unwrap(), align);
        }
    }

    #[test]
    fn only_right_slides_from_the_right() {
        assert_eq!(Position::Right.side(), 1.0);
        assert_eq!(Position::Left.side(), -1.0);
        assert_eq!(Position::Center.side(), -1.0);
    }
}
