//! `gx:Instant` and `gx:Duration`.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde_json::Value;

use super::expect_str;
use crate::error::{GraphSONError, Result};
use crate::registry::{ObjectDecoder, TypeHandler};
use crate::tag::{self, typed_value};
use crate::value::GraphValue;

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FRACTIONAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const WHOLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Renders a UTC instant with microseconds only when they are nonzero.
pub fn format_instant(dt: &DateTime<Utc>) -> String {
    let micros = dt.timestamp_subsec_micros();
    let seconds = dt.format(SECONDS_FORMAT);
    if micros == 0 {
        format!("{seconds}Z")
    } else {
        format!("{seconds}.{micros:06}Z")
    }
}

pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, FRACTIONAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, WHOLE_FORMAT))
        .ok()
        .map(|naive| naive.and_utc())
}

const MICROS_PER_SECOND: i128 = 1_000_000;
const SECONDS_PER_DAY: i128 = 86_400;

/// Formats as `[-]P[nD][T[nH][nM][n[.f]S]]`, truncated to microseconds.
/// Zero is `P0D`.
pub fn format_duration(d: TimeDelta) -> String {
    let nanos = i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos());
    let micros = nanos / 1_000;
    let mut out = String::from(if micros < 0 { "-P" } else { "P" });

    let micros = micros.unsigned_abs();
    let frac = micros % MICROS_PER_SECOND as u128;
    let seconds = micros / MICROS_PER_SECOND as u128;
    let (minutes, seconds) = (seconds / 60, seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);

    if days > 0 {
        out.push_str(&format!("{days}D"));
    }
    if hours > 0 || minutes > 0 || seconds > 0 || frac > 0 {
        out.push('T');
        if hours > 0 {
            out.push_str(&format!("{hours}H"));
        }
        if minutes > 0 {
            out.push_str(&format!("{minutes}M"));
        }
        if frac > 0 {
            let text = format!("{seconds}.{frac:06}");
            out.push_str(text.trim_end_matches('0'));
            out.push('S');
        } else if seconds > 0 {
            out.push_str(&format!("{seconds}S"));
        }
    }
    if out.ends_with('P') {
        out.push_str("0D");
    }
    out
}

/// Parses ISO-8601 duration text through `speedate`, at microsecond
/// precision and with an optional leading sign.
///
/// `speedate` maps years and months onto fixed day counts, so those are
/// refused before it sees them.
pub fn parse_duration(s: &str) -> std::result::Result<TimeDelta, String> {
    let date_part = s.split(['T', 't']).next().unwrap_or(s);
    if let Some(unit) = date_part.chars().find(|c| matches!(c, 'Y' | 'y' | 'M' | 'm')) {
        return Err(format!("calendar component `{unit}` has no fixed length"));
    }
    let parsed = speedate::Duration::parse_str(s).map_err(|e| format!("{e:?}"))?;
    let seconds = i128::from(parsed.day) * SECONDS_PER_DAY + i128::from(parsed.second);
    let micros = seconds * MICROS_PER_SECOND + i128::from(parsed.microsecond);
    let micros = if parsed.positive { micros } else { -micros };
    i64::try_from(micros)
        .map(TimeDelta::microseconds)
        .map_err(|_| "duration out of range".to_string())
}

/// Dates are written as an instant at UTC midnight; both decode to `Instant`.
pub struct InstantCodec;

impl TypeHandler for InstantCodec {
    fn tag(&self) -> &'static str {
        tag::INSTANT
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        let dt = match value {
            GraphValue::Instant(dt) => *dt,
            GraphValue::Date(d) => d.and_time(NaiveTime::MIN).and_utc(),
            other => return Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        };
        Ok(typed_value(self.tag(), Value::String(format_instant(&dt))))
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let s = expect_str(self.tag(), payload)?;
        parse_instant(s).map(GraphValue::Instant).ok_or_else(|| {
            GraphSONError::parse(self.tag(), payload, "not an ISO-8601 UTC instant")
        })
    }
}

pub struct DurationCodec;

impl TypeHandler for DurationCodec {
    fn tag(&self) -> &'static str {
        tag::DURATION
    }

    fn encode(&self, value: &GraphValue) -> Result<Value> {
        match value {
            GraphValue::Duration(d) => {
                Ok(typed_value(self.tag(), Value::String(format_duration(*d))))
            }
            other => Err(GraphSONError::UnsupportedType(other.kind().to_string())),
        }
    }

    fn decode(&self, payload: &Value, _: &dyn ObjectDecoder) -> Result<GraphValue> {
        let s = expect_str(self.tag(), payload)?;
        parse_duration(s)
            .map(GraphValue::Duration)
            .map_err(|e| GraphSONError::parse(self.tag(), payload, e))
    }
}
