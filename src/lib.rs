//! Sidebar navigation widget for a static website.
//!
//! The sidebar is a slide-in panel with a main menu, drill-down submenus,
//! and a light/dark theme control. All behavior lives in
//! [`controller::SidebarController`], which talks to the page only through
//! three seams: [`ui::UiBinding`] for the DOM, [`theme::ThemeStore`] for the
//! saved preference, and [`scheduler::Scheduler`] for the delayed submenu
//! reset. Native tests drive the controller with in-memory fakes; the
//! `browser` feature supplies the WebAssembly bindings and entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Event handling, panel and submenu transitions, theme apply |
//! | [`state`] | Panel and navigation state enums |
//! | [`ui`] | Element roles, UI events, and the [`ui::UiBinding`] seam |
//! | [`theme`] | Theme values, the [`theme::ThemeStore`] seam, in-memory store |
//! | [`scheduler`] | Timer tokens, the [`scheduler::Scheduler`] seam, manual clock |
//! | [`links`] | Active-link matching against the current path |
//! | [`config`] | Serde-backed [`config::SidebarConfig`] with defaults |
//! | [`error`] | [`error::SidebarError`] and the crate result alias |
//! | [`consts`] | Breakpoint, delays, class names, and labels |
//! | `browser` | `web-sys` bindings and the wasm entry point (feature `browser`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod links;
pub mod scheduler;
pub mod state;
pub mod theme;
pub mod ui;

#[cfg(feature = "browser")]
pub mod browser;
