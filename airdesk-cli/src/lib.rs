pub mod command;
pub mod error;
pub mod render;
pub mod session;

pub use command::{Command, CommandError, ViewTarget};
pub use error::AppError;
pub use session::{Flow, Session};
