//! Literal codecs for timestamps, durations and numeric datatypes
//!
//! Pure text conversions. Timestamps use the unambiguous calendar form
//! `YYYY-MM-DDTHH:MM:SS[.ffffff]`; durations use ISO 8601 (`P1DT2H3M4.5S`).

use crate::model::Value;
use crate::rdf::vocab::xsd;
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error};

/// Codec parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text is not a calendar timestamp
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Text is not an ISO 8601 duration
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// The duration pattern failed to compile
    #[error("Duration pattern error: {0}")]
    Pattern(String),
}

const TIMESTAMP_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIMESTAMP_PLAIN: &str = "%Y-%m-%dT%H:%M:%S";

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Render a timestamp; microseconds are only written when non-zero.
pub fn timestamp_to_text(t: &NaiveDateTime) -> String {
    if t.nanosecond() / 1_000 == 0 {
        t.format(TIMESTAMP_PLAIN).to_string()
    } else {
        t.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Parse a timestamp, trying the fractional-seconds form before the plain one.
pub fn text_to_timestamp(text: &str) -> Result<NaiveDateTime, ParseError> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FRACTIONAL)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TIMESTAMP_PLAIN))
        .map_err(|_| ParseError::InvalidTimestamp(text.to_string()))
}

/// Render elapsed seconds as an ISO 8601 duration.
///
/// The value is split into whole seconds and microseconds (rounded). Zero and
/// non-finite input render as `P0D`.
pub fn duration_seconds_to_text(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "P0D".to_string();
    }

    let abs = seconds.abs();
    let mut whole = abs.trunc() as u64;
    let mut micros = ((abs - abs.trunc()) * 1_000_000.0).round() as u64;
    if micros >= 1_000_000 {
        whole += 1;
        micros -= 1_000_000;
    }

    let days = whole / 86_400;
    let hours = (whole % 86_400) / 3_600;
    let minutes = (whole % 3_600) / 60;
    let secs = whole % 60;

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || secs > 0 || micros > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if micros > 0 {
            let fraction = format!("{micros:06}");
            out.push_str(&format!("{secs}.{}S", fraction.trim_end_matches('0')));
        } else if secs > 0 {
            out.push_str(&format!("{secs}S"));
        }
    }

    if out.len() == 1 {
        return "P0D".to_string();
    }
    if seconds < 0.0 {
        out.insert(0, '-');
    }
    out
}

const DURATION_PATTERN: &str = concat!(
    r"^(?P<sign>[-+])?P",
    r"(?:(?P<years>\d+(?:[.,]\d+)?)Y)?",
    r"(?:(?P<months>\d+(?:[.,]\d+)?)M)?",
    r"(?:(?P<weeks>\d+(?:[.,]\d+)?)W)?",
    r"(?:(?P<days>\d+(?:[.,]\d+)?)D)?",
    r"(?P<time>T(?:(?P<hours>\d+(?:[.,]\d+)?)H)?",
    r"(?:(?P<minutes>\d+(?:[.,]\d+)?)M)?",
    r"(?:(?P<seconds>\d+(?:[.,]\d+)?)S)?)?$",
);

fn duration_pattern() -> Result<&'static Regex, ParseError> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = PATTERN.get() {
        return Ok(re);
    }
    let re = Regex::new(DURATION_PATTERN).map_err(|e| ParseError::Pattern(e.to_string()))?;
    Ok(PATTERN.get_or_init(|| re))
}

/// Parse an ISO 8601 duration into seconds, failing on malformed text.
///
/// Weeks count as seven days. Years and months have no fixed length in
/// seconds and contribute nothing. The result is rounded to microseconds.
pub fn try_text_to_duration_seconds(text: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidDuration(text.to_string());
    let caps = duration_pattern()?
        .captures(text.trim())
        .ok_or_else(invalid)?;

    let field = |name: &str| -> Result<Option<f64>, ParseError> {
        caps.name(name)
            .map(|m| m.as_str().replace(',', ".").parse::<f64>().map_err(|_| invalid()))
            .transpose()
    };

    let date_parts = ["years", "months", "weeks", "days"];
    let time_parts = ["hours", "minutes", "seconds"];
    if caps.name("time").is_some() && time_parts.iter().all(|p| caps.name(p).is_none()) {
        return Err(invalid());
    }
    if date_parts.iter().chain(&time_parts).all(|p| caps.name(p).is_none()) {
        return Err(invalid());
    }
    if caps.name("years").is_some() || caps.name("months").is_some() {
        debug!("Ignoring calendar years/months in duration '{}'", text);
    }

    let total = field("weeks")?.unwrap_or(0.0) * 7.0 * SECONDS_PER_DAY
        + field("days")?.unwrap_or(0.0) * SECONDS_PER_DAY
        + field("hours")?.unwrap_or(0.0) * 3_600.0
        + field("minutes")?.unwrap_or(0.0) * 60.0
        + field("seconds")?.unwrap_or(0.0);
    let total = (total * 1_000_000.0).round() / 1_000_000.0;

    Ok(match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => -total,
        _ => total,
    })
}

/// Parse an ISO 8601 duration into seconds; anything unparsable yields `0.0`.
///
/// Callers that must tell a zero duration from bad input should use
/// [`try_text_to_duration_seconds`].
pub fn text_to_duration_seconds(text: &str) -> f64 {
    try_text_to_duration_seconds(text).unwrap_or_else(|e| {
        match e {
            ParseError::Pattern(_) => error!("{}; using zero", e),
            _ => debug!("{}; using zero", e),
        }
        0.0
    })
}

/// Native class a literal datatype is coerced to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Float,
    Integer,
}

/// Closed datatype table; anything not listed stays text.
pub fn numeric_kind(datatype: &str) -> Option<NumericKind> {
    match datatype {
        xsd::FLOAT | xsd::DOUBLE => Some(NumericKind::Float),
        xsd::INTEGER
        | xsd::LONG
        | xsd::INT
        | xsd::SHORT
        | xsd::BYTE
        | xsd::NON_POSITIVE_INTEGER
        | xsd::NON_NEGATIVE_INTEGER
        | xsd::POSITIVE_INTEGER
        | xsd::NEGATIVE_INTEGER
        | xsd::UNSIGNED_LONG
        | xsd::UNSIGNED_INT
        | xsd::UNSIGNED_SHORT
        | xsd::UNSIGNED_BYTE => Some(NumericKind::Integer),
        _ => None,
    }
}

/// Coerce literal text by its declared datatype.
///
/// Text that does not parse as the declared numeric type is returned unchanged.
pub fn coerce_literal(text: &str, datatype: &str) -> Value {
    let coerced = match numeric_kind(datatype) {
        Some(NumericKind::Float) => text.trim().parse::<f64>().ok().map(Value::Float),
        Some(NumericKind::Integer) => text
            .trim()
            .trim_start_matches('+')
            .parse::<i64>()
            .ok()
            .map(Value::Integer),
        None => return Value::String(text.to_string()),
    };
    coerced.unwrap_or_else(|| {
        debug!("Literal '{}' is not a valid {}; keeping text", text, datatype);
        Value::String(text.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2011, 6, 8)
            .unwrap()
            .and_hms_micro_opt(h, m, s, micro)
            .unwrap()
    }

    #[test]
    fn test_timestamp_text() {
        assert_eq!(timestamp_to_text(&at(16, 47, 9, 0)), "2011-06-08T16:47:09");
        assert_eq!(
            timestamp_to_text(&at(16, 47, 9, 250_000)),
            "2011-06-08T16:47:09.250000"
        );
    }

    #[test]
    fn test_text_to_timestamp() {
        assert_eq!(text_to_timestamp("2011-06-08T16:47:09").unwrap(), at(16, 47, 9, 0));
        assert_eq!(
            text_to_timestamp("2011-06-08T16:47:09.250000").unwrap(),
            at(16, 47, 9, 250_000)
        );
        assert!(matches!(
            text_to_timestamp("8 June 2011"),
            Err(ParseError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_duration_to_text() {
        assert_eq!(duration_seconds_to_text(0.0), "P0D");
        assert_eq!(duration_seconds_to_text(1.5), "PT1.5S");
        assert_eq!(duration_seconds_to_text(3600.0), "PT1H");
        assert_eq!(duration_seconds_to_text(90061.25), "P1DT1H1M1.25S");
        assert_eq!(duration_seconds_to_text(86400.0), "P1D");
        assert_eq!(duration_seconds_to_text(-2.5), "-PT2.5S");
    }

    #[test]
    fn test_duration_round_trip() {
        for secs in [0.0, 1.0, -1.0, 0.1, -0.7, 3600.7, 12.345678, 86399.999999, -90061.5] {
            let back = text_to_duration_seconds(&duration_seconds_to_text(secs));
            assert!((back - secs).abs() < 1e-6, "{} -> {}", secs, back);
        }
    }

    #[test]
    fn test_duration_parse_forms() {
        assert_eq!(text_to_duration_seconds("PT1M30S"), 90.0);
        assert_eq!(text_to_duration_seconds("P1W"), 604_800.0);
        assert_eq!(text_to_duration_seconds("PT0,5S"), 0.5);
        assert_eq!(text_to_duration_seconds("-P1D"), -86_400.0);
        assert_eq!(text_to_duration_seconds("P1Y"), 0.0);
    }

    #[test]
    fn test_duration_pattern_compiles() {
        let first = duration_pattern().unwrap();
        let second = duration_pattern().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_match("P1DT2H3M4.5S"));
    }

    #[test]
    fn test_duration_leniency() {
        assert_eq!(text_to_duration_seconds("not-a-duration"), 0.0);
        assert_eq!(text_to_duration_seconds("P"), 0.0);
        assert_eq!(text_to_duration_seconds("PT"), 0.0);

        assert!(try_text_to_duration_seconds("not-a-duration").is_err());
        assert!(try_text_to_duration_seconds("P1DT").is_err());
        assert_eq!(try_text_to_duration_seconds("PT2S"), Ok(2.0));
    }

    #[test]
    fn test_coerce_literal() {
        assert_eq!(coerce_literal("256.0", xsd::DOUBLE), Value::Float(256.0));
        assert_eq!(coerce_literal("3", xsd::UNSIGNED_BYTE), Value::Integer(3));
        assert_eq!(coerce_literal("+7", xsd::INTEGER), Value::Integer(7));
        assert_eq!(coerce_literal("abc", xsd::DOUBLE), Value::from("abc"));
        assert_eq!(coerce_literal("PT1S", xsd::DURATION), Value::from("PT1S"));
        assert_eq!(numeric_kind(xsd::STRING), None);
    }
}
