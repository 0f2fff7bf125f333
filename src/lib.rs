#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod core;

#[cfg(feature = "std")]
pub mod button;
#[cfg(feature = "std")]
pub mod clock;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use clock::MonotonicClock;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::Assets;
