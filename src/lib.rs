//! A small side-scrolling platformer rendered in the terminal.
//!
//! The library holds everything that can be tested without a terminal:
//! tuning constants, entity data, the simulation step, key bindings and the
//! renderer (which writes to any `std::io::Write`).

pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod input;
