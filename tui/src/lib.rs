//! life-tui - Conway's Game of Life in the terminal
//!
//! A resizable, toroidal Game of Life grid with mouse editing and
//! pause/resume, drawn with ratatui on top of crossterm.
//!
//! # Architecture
//!
//! - **Grid**: the cell matrix and every pure state transition
//! - **App**: the single-task game loop, input dispatch and view state
//! - **Layout/Render**: screen/cell coordinate mapping and frame drawing
//! - **Surface**: the terminal seam (real terminal or ratatui's test backend)

pub mod app;
pub mod config;
pub mod events;
pub mod grid;
pub mod layout;
pub mod render;
pub mod surface;
pub mod theme;
pub mod view;

pub use app::{App, Control};
pub use config::LifeConfig;
pub use grid::Grid;
