// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared by all screens.

pub mod button;
pub mod container;
