//! Snake on a fixed grid.
//!
//! The simulation core ([`snake`], [`food`], [`game`]) has no terminal or
//! network dependencies; [`renderer`], [`input`] and [`score`] are the
//! collaborators the binary wires around it.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
