//! Line-driven terminal front end for [`libgame`].

pub mod cli;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod terminal;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
