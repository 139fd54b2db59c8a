//! On-target test harness for a floating-point `max` routine
//!
//! Runs a fixed table of test vectors through an externally supplied
//! routine, one vector per timer tick, grades every result against
//! reference IEEE-754 semantics and reports the tally over a serial
//! link.
//!
//! The harness core (`bitcast`, `reference`, `verifier`, `tally`,
//! `report`, `scheduler`) is hardware independent. The Nucleo-144 board
//! layer is enabled with the `board` feature.
//!
//! # Usage - see demos/

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "board")]
pub use stm32h7xx_hal as hal;
#[cfg(feature = "board")]
pub use hal::hal as embedded_hal;
#[cfg(feature = "board")]
pub use hal::pac;


// - modules ------------------------------------------------------------------

pub mod bitcast;
pub mod config;
pub mod error;
pub mod reference;
pub mod report;
pub mod routine;
pub mod scheduler;
pub mod signal;
pub mod tally;
pub mod vectors;
pub mod verifier;

pub use config::Config;
pub use error::{Error, Result};
pub use scheduler::{Scheduler, State, Summary};


// - board support ------------------------------------------------------------

#[cfg(feature = "board")]
pub mod board;
#[cfg(feature = "board")]
pub mod clocks;
#[cfg(feature = "board")]
pub use clocks::configure as configure_clocks;
#[cfg(feature = "board")]
pub mod led;
#[cfg(feature = "board")]
pub mod logger;
#[cfg(feature = "board")]
pub mod pins;
#[cfg(feature = "board")]
pub mod serial;
#[cfg(feature = "board")]
pub mod timer;

#[cfg(feature = "board")]
pub use board::Board;
