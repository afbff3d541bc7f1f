//! Terminal front-end for the 24 game.
//!
//! [`app::App`] reads commands line by line, drives a
//! [`Session`](twentyfour_game::Session) and prints the result. Hints and
//! solutions are computed on a background [`async_work::Worker`] so the game
//! never waits on them.

pub mod advice;
pub mod app;
pub mod async_work;
pub mod command;
pub mod config;
pub mod render;
