// SPDX-License-Identifier: MPL-2.0
pub mod slide;

pub use slide::{slide, Slide};
