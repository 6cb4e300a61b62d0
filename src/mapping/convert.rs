//! Value converters attached to attribute rules

use super::rule::ConversionError;
use crate::codec;
use crate::model::Value;
use crate::rdf::RdfObject;
use tracing::error;

/// Timestamp → calendar text
pub fn timestamp_to_serial(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::DateTime(dt) => Ok(Value::String(codec::timestamp_to_text(dt))),
        Value::String(s) => codec::text_to_timestamp(s)
            .map(|dt| Value::String(codec::timestamp_to_text(&dt)))
            .map_err(|e| ConversionError::InvalidText {
                converter: "timestamp",
                text: s.clone(),
                reason: e.to_string(),
            }),
        other => Err(ConversionError::UnexpectedType {
            converter: "timestamp",
            found: other.type_name(),
        }),
    }
}

/// Calendar text → timestamp. Unparsable text is logged and becomes null.
pub fn timestamp_from_serial(value: Value) -> Value {
    match value {
        Value::String(s) => match codec::text_to_timestamp(&s) {
            Ok(dt) => Value::DateTime(dt),
            Err(e) => {
                error!("Cannot convert datetime '{}': {}", s, e);
                Value::Null
            }
        },
        other => other,
    }
}

/// Seconds → ISO 8601 duration text
pub fn duration_to_serial(value: &Value) -> Result<Value, ConversionError> {
    match value {
        Value::Float(_) | Value::Integer(_) => {
            let seconds = value.as_float().unwrap_or_default();
            seconds_to_serial(seconds, || value.to_text())
        }
        Value::String(s) => {
            if codec::try_text_to_duration_seconds(s).is_ok() {
                return Ok(value.clone());
            }
            let seconds = s.trim().parse::<f64>().map_err(|e| ConversionError::InvalidText {
                converter: "duration",
                text: s.clone(),
                reason: e.to_string(),
            })?;
            seconds_to_serial(seconds, || s.clone())
        }
        other => Err(ConversionError::UnexpectedType {
            converter: "duration",
            found: other.type_name(),
        }),
    }
}

/// Non-finite seconds have no duration form.
fn seconds_to_serial(
    seconds: f64,
    text: impl FnOnce() -> String,
) -> Result<Value, ConversionError> {
    if !seconds.is_finite() {
        return Err(ConversionError::InvalidText {
            converter: "duration",
            text: text(),
            reason: "not a finite number of seconds".to_string(),
        });
    }
    Ok(Value::String(codec::duration_seconds_to_text(seconds)))
}

/// ISO 8601 duration text → seconds (malformed text gives zero)
pub fn duration_from_serial(value: Value) -> Value {
    match value {
        Value::String(s) => Value::Float(codec::text_to_duration_seconds(&s)),
        Value::Integer(i) => Value::Float(i as f64),
        other => other,
    }
}

/// Anything naming a resource → a resource reference
pub fn reference_to_serial(value: &Value) -> Result<Value, ConversionError> {
    Ok(match value.as_iri() {
        Some(iri) => Value::Resource(iri.to_string()),
        None => Value::Resource(value.to_text()),
    })
}

/// Identifier text → resource reference
pub fn reference_from_serial(value: Value) -> Value {
    match value {
        Value::String(s) => Value::Resource(s),
        Value::Node(RdfObject::NamedNode(n)) => Value::Resource(n.as_str().to_string()),
        other => other,
    }
}
