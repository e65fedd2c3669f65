#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use opponent::*;
pub use outcome::*;
pub use rng::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod opponent;
mod outcome;
mod rng;
mod snapshot;
mod types;
