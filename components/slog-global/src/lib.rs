//! A global logger for `slog`, allowing logging through free macros that
//! target a process-wide `Logger` installed via `set_global`.

#[doc(hidden)]
pub extern crate slog;

use std::sync::Arc;

use arc_swap::ArcSwap;
use slog::{Drain, Logger, OwnedKVList, Record};

lazy_static::lazy_static! {
    static ref GLOBAL_LOGGER: ArcSwap<Logger> =
        ArcSwap::from_pointee(Logger::root(Discard, slog::o!()));
}

/// A drain that discards every record.
struct Discard;

impl Drain for Discard {
    type Ok = ();
    type Err = slog::Never;
    fn log(&self, _: &Record, _: &OwnedKVList) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

/// Sets the global `Logger`.
pub fn set_global(l: Logger) {
    GLOBAL_LOGGER.store(Arc::new(l));
}

/// Gets the global `Logger`.
pub fn get_global() -> Arc<Logger> {
    GLOBAL_LOGGER.load_full()
}

/// Clears the global `Logger`, discarding all future records until another
/// logger is installed.
pub fn clear_global() {
    GLOBAL_LOGGER.store(Arc::new(Logger::root(Discard, slog::o!())));
}

#[macro_export]
macro_rules! crit {
    ($($args:tt)+) => { $crate::slog::crit!($crate::get_global(), $($args)+) };
}

#[macro_export]
macro_rules! error {
    ($($args:tt)+) => { $crate::slog::error!($crate::get_global(), $($args)+) };
}

#[macro_export]
macro_rules! warn {
    ($($args:tt)+) => { $crate::slog::warn!($crate::get_global(), $($args)+) };
}

#[macro_export]
macro_rules! info {
    ($($args:tt)+) => { $crate::slog::info!($crate::get_global(), $($args)+) };
}

#[macro_export]
macro_rules! debug {
    ($($args:tt)+) => { $crate::slog::debug!($crate::get_global(), $($args)+) };
}

#[macro_export]
macro_rules! trace {
    ($($args:tt)+) => { $crate::slog::trace!($crate::get_global(), $($args)+) };
}
