// SPDX-License-Identifier: MPL-2.0
//! `smart` is a workspace desktop client built with the Iced GUI framework.
//!
//! It renders dashboards, community circles, learning paths, a content
//! review queue, and account screens over an in-memory mock data provider
//! with simulated latency, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
