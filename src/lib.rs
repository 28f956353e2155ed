//! a2a-docs: the A2A Publisher documentation, browsable in the terminal.
//!
//! A fixed registry of sections drives a two-pane view: navigation on one side, the resolved
//! page on the other. Pages are markdown compiled into the binary and parsed with tree-sitter;
//! code listings are highlighted with syntect and can be copied to the system clipboard.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod clipboard;
pub mod config;
pub mod content;
pub mod formats;
pub mod highlight;
pub mod input;
pub mod keymap;
pub mod logging;
pub mod navigation;
pub mod section;
pub mod theme;
pub mod ui;
