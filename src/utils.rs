//! Logging helpers that compile to nothing unless the `log` feature is enabled.

macro_rules! search_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!(target: "route_planner", $($arg)+);
    };
}

macro_rules! search_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!(target: "route_planner", $($arg)+);
    };
}

pub(crate) use search_debug;
pub(crate) use search_trace;
