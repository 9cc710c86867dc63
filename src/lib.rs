//! Retro Snake: a single-screen snake game on a fixed square grid.
//!
//! The game rules live in [`snake`], [`food`] and [`game`] and know nothing
//! about the terminal. [`app`] drives them with a fixed tick cadence and
//! draws every frame through [`renderer`].

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
