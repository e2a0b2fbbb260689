pub mod clock;
pub mod service;

pub use crate::clock::{format_timestamp, Clock, SystemClock};
pub use crate::service::{run, running_line, startup_line, Config};
