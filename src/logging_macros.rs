#![warn(clippy::all, rust_2018_idioms)]

//! Logging macros that tag every record with file, module and line.
//!
//! All records go through `tracing`; `log` records emitted by eframe and egui
//! reach the same subscriber through the `tracing-log` bridge set up in
//! `main.rs`.

#[doc(hidden)]
#[macro_export]
macro_rules! __deck_log {
    ($level:ident, $($arg:tt)*) => {
        tracing::$level!(
            "[{}:{}:{}] {}",
            file!(),
            module_path!(),
            line!(),
            format_args!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => { $crate::__deck_log!(trace, $($arg)*) };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::__deck_log!(debug, $($arg)*) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::__deck_log!(info, $($arg)*) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::__deck_log!(warn, $($arg)*) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::__deck_log!(error, $($arg)*) };
}
