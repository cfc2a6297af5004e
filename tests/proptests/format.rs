// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Property-Based Tests: Line Formatting
//!
//! Generates arbitrary timestamps, levels, source locations and messages and
//! checks properties of the rendered line rather than exact output.
//!
//! # Coverage
//!
//! - **Fixed-width prefix:** every timestamp field is zero-padded, so the
//!   prefix up to the process id always has the same length.
//! - **Parse back:** any line produced by `format_event` for a known severity
//!   is recognized by `LogPrefix::parse` with the same field values.
//! - **Interpolation:** `interpolate` never panics, whatever the template.

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, Timelike};
    use glogcheck::logging::{format_event, interpolate, LogEvent, LogPrefix};
    use glogcheck::Severity;
    use proptest::prelude::*;
    use std::fmt::Display;

    fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
        (
            1970i32..2100,
            1u32..=12,
            1u32..=28,
            0u32..24,
            0u32..60,
            0u32..60,
            0u32..1_000_000,
        )
            .prop_map(|(y, mo, d, h, mi, s, us)| {
                NaiveDate::from_ymd_opt(y, mo, d)
                    .and_then(|date| date.and_hms_micro_opt(h, mi, s, us))
                    .unwrap()
            })
    }

    fn severity() -> impl Strategy<Value = Severity> {
        prop::sample::select(Severity::ALL.to_vec())
    }

    proptest! {
        /// **Property:** the date/time portion of the prefix is always
        /// `LMMDD HH:MM:SS.uuuuuu ` (22 characters).
        #[test]
        fn test_prefix_is_fixed_width(ts in timestamp(), level in any::<u8>()) {
            let event = LogEvent::with_level(level, "a.rs", 1, "m").at(ts);
            let line = format_event(&event);
            let bytes = line.as_bytes();
            prop_assert_eq!(bytes[5], b' ');
            prop_assert_eq!(bytes[8], b':');
            prop_assert_eq!(bytes[11], b':');
            prop_assert_eq!(bytes[14], b'.');
            prop_assert_eq!(bytes[21], b' ');
            prop_assert!(line[1..5].chars().all(|c| c.is_ascii_digit()));
            prop_assert!(line[15..21].chars().all(|c| c.is_ascii_digit()));
        }

        /// **Property:** formatted lines parse back into the same fields.
        #[test]
        fn test_formatted_line_parses_back(
            ts in timestamp(),
            sev in severity(),
            pid in prop::option::of(any::<u32>()),
            file in "[a-z_][a-z0-9_]{0,12}\\.rs",
            line_no in 0u32..100_000,
            message in "[^\r\n]{0,80}",
        ) {
            let event = LogEvent::new(sev, &format!("src/{}", file), line_no, &message)
                .at(ts)
                .with_process_id(pid);
            let parsed = LogPrefix::parse(&format_event(&event)).unwrap();

            prop_assert_eq!(parsed.severity, sev.letter());
            prop_assert_eq!(parsed.microsecond, ts.nanosecond() / 1_000);
            prop_assert_eq!(parsed.process_id, pid.map(i64::from));
            prop_assert_eq!(parsed.filename, file);
            prop_assert_eq!(parsed.line, line_no);
            prop_assert_eq!(parsed.message, message);
        }

        /// **Property:** `interpolate` never panics and leaves templates
        /// without arguments untouched.
        #[test]
        fn test_interpolate_does_not_panic(template in ".{0,64}", args in prop::collection::vec(any::<i32>(), 0..4)) {
            let refs: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
            let _ = interpolate(&template, &refs);
            let untouched = interpolate(&template, &[]);
            prop_assert_eq!(untouched.as_ref(), template.as_str());
        }
    }
}
