//! Error macros for waypath

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaypathError::UsageError($msg.to_string()))
    };
}
