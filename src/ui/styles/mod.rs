// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the demo surface. Toast card styles live next to
//! the toast widgets.

pub mod button;
