// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;

pub mod boards;
pub mod csv;
pub mod export;
pub mod loader;
pub mod session;
pub mod source;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
