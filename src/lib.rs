//! time-window library - recurring daily time window checks
//!
//! The core is [`between`]: is an instant inside `[start, stop)` of its day,
//! where the window may cross midnight.

pub mod between;
pub mod cli;
pub mod config;
pub mod time_of_day;
pub mod window;

pub use between::between;
pub use time_of_day::{ParseTimeError, TimeOfDay};
pub use window::{DayZone, Window};
