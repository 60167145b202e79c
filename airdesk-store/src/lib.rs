pub mod app_config;
pub mod schedule;

pub use app_config::{Config, OutputFormat};
pub use schedule::{load_schedule, parse_schedule, ScheduleError};
