// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging and CHECK macros for convenient use

/// Log a message with debug severity
///
/// # Examples
/// ```ignore
/// log_debug!(logger, "parsed {} records", count);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(&::std::format!($($arg)+))
    };
}

/// Log a message with info severity
///
/// # Examples
/// ```ignore
/// log_info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(&::std::format!($($arg)+))
    };
}

/// Log a message with warning severity
///
/// # Examples
/// ```ignore
/// log_warning!(logger, "queue at {}% capacity", pct);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(&::std::format!($($arg)+))
    };
}

/// Log a message with error severity
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(&::std::format!($($arg)+))
    };
}

/// Log a message with fatal severity
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(&::std::format!($($arg)+))
    };
}

/// Log with sampling / first-N options and a `{}` template
///
/// The template itself (not the rendered text) keys the first-N counter.
///
/// # Examples
/// ```ignore
/// log_with!(logger, Severity::Warning, LogOptions::new().first_n(3),
///           "dropping packet from {}", src);
/// ```
#[macro_export]
macro_rules! log_with {
    ($logger:expr, $severity:expr, $options:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with(
            $severity,
            &$options,
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),*],
        )
    };
}

/// Fail unless the condition holds
///
/// Evaluates to `Result<(), CheckFailure>`; an optional format string
/// replaces the default message.
///
/// # Examples
/// ```ignore
/// check!(logger, queue.is_empty())?;
/// check!(logger, n % 2 == 0, "odd batch size {}", n)?;
/// ```
#[macro_export]
macro_rules! check {
    ($logger:expr, $cond:expr $(,)?) => {
        $logger.check($cond, ::std::option::Option::None)
    };
    ($logger:expr, $cond:expr, $($msg:tt)+) => {
        $logger.check($cond, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail if the operands differ
#[macro_export]
macro_rules! check_eq {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_eq($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_eq($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail if the operands are equal
#[macro_export]
macro_rules! check_ne {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_ne($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_ne($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail unless `a <= b`
#[macro_export]
macro_rules! check_le {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_le($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_le($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail unless `a >= b`
#[macro_export]
macro_rules! check_ge {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_ge($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_ge($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail unless `a < b`
#[macro_export]
macro_rules! check_lt {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_lt($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_lt($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail unless `a > b`
#[macro_export]
macro_rules! check_gt {
    ($logger:expr, $a:expr, $b:expr $(,)?) => {
        $logger.check_gt($a, $b, ::std::option::Option::None)
    };
    ($logger:expr, $a:expr, $b:expr, $($msg:tt)+) => {
        $logger.check_gt($a, $b, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}

/// Fail on `None`, otherwise evaluate to `Ok(value)`
#[macro_export]
macro_rules! check_notnone {
    ($logger:expr, $obj:expr $(,)?) => {
        $logger.check_notnone($obj, ::std::option::Option::None)
    };
    ($logger:expr, $obj:expr, $($msg:tt)+) => {
        $logger.check_notnone($obj, ::std::option::Option::Some(::std::format!($($msg)+).as_str()))
    };
}
