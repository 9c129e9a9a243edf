//! Bill-of-materials entry type.

use super::PartRecord;
use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// A validated bill-of-materials entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    number: String,
    name: String,
    quantity: u64,
}

impl Part {
    /// Validate a part record. `index` is 1-based and only used for errors.
    pub(crate) fn from_record(index: usize, record: PartRecord) -> Result<Self, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            entry: "part",
            index,
            field,
        };

        let number = record.number.ok_or_else(|| missing("number"))?;
        let name = record.name.ok_or_else(|| missing("name"))?;
        let quantity = match record.quantity {
            None | Some(Value::Null) => return Err(missing("quantity")),
            Some(ref value) => parse_quantity(index, value)?,
        };

        Ok(Self {
            number,
            name,
            quantity,
        })
    }

    /// Part number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of pieces.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }
}

/// Accept JSON integers and digit strings; reject negatives and everything else.
fn parse_quantity(index: usize, value: &Value) -> Result<u64, ValidationError> {
    let non_numeric = |value: String| ValidationError::NonNumericQuantity { index, value };

    match value {
        Value::Number(n) => {
            if let Some(q) = n.as_u64() {
                Ok(q)
            } else if let Some(q) = n.as_i64() {
                Err(ValidationError::NegativeQuantity { index, value: q })
            } else {
                Err(non_numeric(n.to_string()))
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(q) = trimmed.parse::<u64>() {
                return Ok(q);
            }
            match trimmed.parse::<i64>() {
                Ok(q) if q < 0 => Err(ValidationError::NegativeQuantity { index, value: q }),
                // "-0"
                Ok(q) => Ok(q.unsigned_abs()),
                Err(_) => Err(non_numeric(s.clone())),
            }
        }
        other => Err(non_numeric(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_quantity(quantity: Option<Value>) -> PartRecord {
        PartRecord {
            number: Some("A1".to_string()),
            name: Some("Screw".to_string()),
            quantity,
        }
    }

    #[test]
    fn test_valid_quantities() {
        let part = Part::from_record(1, PartRecord::new("A1", "Screw", 4)).unwrap();
        assert_eq!(part.number(), "A1");
        assert_eq!(part.name(), "Screw");
        assert_eq!(part.quantity(), 4);

        let zero = Part::from_record(1, PartRecord::new("A2", "Washer", 0)).unwrap();
        assert_eq!(zero.quantity(), 0);

        let from_string =
            Part::from_record(1, record_with_quantity(Some(Value::from(" 12 ")))).unwrap();
        assert_eq!(from_string.quantity(), 12);

        let negative_zero =
            Part::from_record(1, record_with_quantity(Some(Value::from("-0")))).unwrap();
        assert_eq!(negative_zero.quantity(), 0);
    }

    #[test]
    fn test_negative_quantity() {
        assert_eq!(
            Part::from_record(2, PartRecord::new("A1", "Screw", -1)),
            Err(ValidationError::NegativeQuantity { index: 2, value: -1 })
        );
        assert_eq!(
            Part::from_record(2, record_with_quantity(Some(Value::from("-5")))),
            Err(ValidationError::NegativeQuantity { index: 2, value: -5 })
        );
        for result in [
            Part::from_record(2, PartRecord::new("A1", "Screw", -1)),
            Part::from_record(2, record_with_quantity(Some(Value::from("-5")))),
        ] {
            match result {
                Err(ValidationError::NegativeQuantity { value, .. }) => assert!(value < 0),
                other => panic!("expected negative quantity, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_numeric_quantity() {
        for value in [
            Value::from("four"),
            Value::from(2.5),
            Value::from(true),
            serde_json::json!([1]),
        ] {
            let result = Part::from_record(1, record_with_quantity(Some(value)));
            assert!(
                matches!(result, Err(ValidationError::NonNumericQuantity { index: 1, .. })),
                "unexpected result: {:?}",
                result
            );
        }
    }

    #[test]
    fn test_missing_fields() {
        let no_name = PartRecord {
            name: None,
            ..PartRecord::new("A1", "Screw", 1)
        };
        assert_eq!(
            Part::from_record(1, no_name),
            Err(ValidationError::MissingField {
                entry: "part",
                index: 1,
                field: "name"
            })
        );

        assert_eq!(
            Part::from_record(4, record_with_quantity(Some(Value::Null))),
            Err(ValidationError::MissingField {
                entry: "part",
                index: 4,
                field: "quantity"
            })
        );
    }
}
