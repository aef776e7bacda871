/// Logging macros that tag every event with a `domain` field.
///
/// Domains: `conf` (configuration), `parse` (schema input), `est`
/// (estimation).
///
/// ```ignore
/// pc_info!(est, rows = 5_000_000, "estimate complete");
/// pc_debug!(conf, sizes = 2, "size estimates from config");
/// ```

#[doc(hidden)]
macro_rules! pc_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

macro_rules! pc_warn {
    ($domain:ident, $($rest:tt)*) => {
        pc_log!(warn, $domain, $($rest)*)
    };
}

macro_rules! pc_info {
    ($domain:ident, $($rest:tt)*) => {
        pc_log!(info, $domain, $($rest)*)
    };
}

macro_rules! pc_debug {
    ($domain:ident, $($rest:tt)*) => {
        pc_log!(debug, $domain, $($rest)*)
    };
}
