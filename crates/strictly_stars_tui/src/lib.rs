//! Terminal front end for Strictly Stars.
//!
//! The [`Controller`] is the only writer of the game session. Key presses and
//! clock ticks reach it one at a time from the event loop in [`run_tui`], and
//! it arms or cancels the [`Ticker`] as the session starts and ends.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod controller;
mod input;
pub mod logging;
mod sample;
mod ticker;
mod ui;

pub use app::{App, TICK_PERIOD, run_tui};
pub use cli::{Cli, Command as CliCommand};
pub use config::{ConfigError, Palette, StarsConfig, Theme};
pub use controller::{Controller, seeded_rng};
pub use input::{Command, command_for, move_cursor};
pub use sample::{SampleError, SampleReport, SampleRequest};
pub use ticker::{Epoch, Ticker};
pub use ui::draw;
