//! Internal logging macros.
//!
//! With the `log` feature these forward to the `log` crate; without it they
//! expand to nothing and their arguments are never evaluated.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { ::log::trace!(target: "zentga", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { ::log::debug!(target: "zentga", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "log")]
macro_rules! __warn {
    ($($arg:tt)+) => { ::log::warn!(target: "zentga", $($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! __warn {
    ($($arg:tt)+) => {};
}

pub(crate) use {__warn as warn, debug, trace};
