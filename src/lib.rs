pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod trace;
pub mod ui;
