#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate slog_global;

mod errors;
pub use errors::*;

mod record;
pub use record::*;

mod engine;
pub use engine::*;

pub mod setup;
