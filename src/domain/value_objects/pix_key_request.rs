use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::value_objects::enums::plan_types::PlanType;

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 10_000;

pub const PLAN_TYPE_FIELD: &str = "planType";
pub const PRICE_FIELD: &str = "price";
pub const BODY_FIELD: &str = "body";

/// A plan selection that passed every field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixKeyRequest {
    pub plan_type: PlanType,
    pub price: i32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{}", summary(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new(field, message)],
        }
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn summary(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_pix_key_request(body: &Value) -> Result<PixKeyRequest, ValidationError> {
    let Some(object) = body.as_object() else {
        return Err(ValidationError::single(BODY_FIELD, "must be a JSON object"));
    };

    let mut fields = Vec::new();

    let plan_type = validate_plan_type(object).map_err(|err| fields.push(err)).ok();
    let price = validate_price(object).map_err(|err| fields.push(err)).ok();

    match (plan_type, price) {
        (Some(plan_type), Some(price)) => Ok(PixKeyRequest { plan_type, price }),
        _ => Err(ValidationError { fields }),
    }
}

fn validate_plan_type(object: &Map<String, Value>) -> Result<PlanType, FieldError> {
    let raw = match object.get(PLAN_TYPE_FIELD) {
        None | Some(Value::Null) => return Err(FieldError::new(PLAN_TYPE_FIELD, "is required")),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(FieldError::new(PLAN_TYPE_FIELD, "must be a string")),
    };

    PlanType::from_str(raw).ok_or_else(|| {
        let allowed = PlanType::ALL
            .iter()
            .map(|p| format!("'{}'", p))
            .collect::<Vec<_>>()
            .join(", ");
        FieldError::new(
            PLAN_TYPE_FIELD,
            format!("must be one of {allowed}, received '{raw}'"),
        )
    })
}

fn validate_price(object: &Map<String, Value>) -> Result<i32, FieldError> {
    let number = match object.get(PRICE_FIELD) {
        None | Some(Value::Null) => return Err(FieldError::new(PRICE_FIELD, "is required")),
        Some(Value::Number(number)) => number,
        Some(_) => return Err(FieldError::new(PRICE_FIELD, "must be a number")),
    };

    let whole = match number.as_i64() {
        Some(whole) => whole,
        None => match number.as_f64() {
            // Saturates past i64, so the range check below still rejects it.
            Some(value) if value.fract() == 0.0 => value as i64,
            _ => return Err(FieldError::new(PRICE_FIELD, "must be a whole number")),
        },
    };

    if !(MIN_PRICE..=MAX_PRICE).contains(&whole) {
        return Err(FieldError::new(
            PRICE_FIELD,
            format!("must be between {MIN_PRICE} and {MAX_PRICE}"),
        ));
    }

    i32::try_from(whole).map_err(|_| FieldError::new(PRICE_FIELD, "is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_selection() {
        let request = validate_pix_key_request(&json!({"planType": "monthly", "price": 8})).unwrap();
        assert_eq!(
            request,
            PixKeyRequest {
                plan_type: PlanType::Monthly,
                price: 8
            }
        );
    }

    #[test]
    fn accepts_integral_float_price() {
        let request = validate_pix_key_request(&json!({"planType": "annual", "price": 79.0})).unwrap();
        assert_eq!(request.price, 79);
    }

    #[test]
    fn rejects_unknown_plan_type() {
        let err = validate_pix_key_request(&json!({"planType": "weekly", "price": 8})).unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert!(err.has_field(PLAN_TYPE_FIELD));
        assert!(err.fields[0].message.contains("weekly"));
    }

    #[test]
    fn rejects_non_numeric_price() {
        let err =
            validate_pix_key_request(&json!({"planType": "monthly", "price": "8"})).unwrap_err();
        assert_eq!(err.fields, vec![FieldError::new(PRICE_FIELD, "must be a number")]);
    }

    #[test]
    fn reports_every_offending_field() {
        let err = validate_pix_key_request(&json!({"planType": 3})).unwrap_err();
        assert_eq!(
            err.fields,
            vec![
                FieldError::new(PLAN_TYPE_FIELD, "must be a string"),
                FieldError::new(PRICE_FIELD, "is required"),
            ]
        );
        assert_eq!(err.to_string(), "planType: must be a string; price: is required");
    }

    #[test]
    fn rejects_fractional_and_out_of_range_prices() {
        let err =
            validate_pix_key_request(&json!({"planType": "monthly", "price": 8.5})).unwrap_err();
        assert!(err.has_field(PRICE_FIELD));

        let err = validate_pix_key_request(&json!({"planType": "monthly", "price": 0})).unwrap_err();
        assert!(err.has_field(PRICE_FIELD));

        let err =
            validate_pix_key_request(&json!({"planType": "monthly", "price": -8})).unwrap_err();
        assert!(err.has_field(PRICE_FIELD));

        let err = validate_pix_key_request(&json!({"planType": "monthly", "price": 10_001}))
            .unwrap_err();
        assert!(err.has_field(PRICE_FIELD));
    }

    #[test]
    fn whole_prices_beyond_i64_report_the_range() {
        for raw in [
            r#"{"planType": "monthly", "price": 10000000000000000000}"#,
            r#"{"planType": "monthly", "price": 1e20}"#,
        ] {
            let body: Value = serde_json::from_str(raw).unwrap();
            let err = validate_pix_key_request(&body).unwrap_err();
            assert_eq!(
                err.fields,
                vec![FieldError::new(PRICE_FIELD, "must be between 1 and 10000")]
            );
        }
    }

    #[test]
    fn rejects_non_object_body() {
        let err = validate_pix_key_request(&json!(["monthly", 8])).unwrap_err();
        assert_eq!(err.fields, vec![FieldError::new(BODY_FIELD, "must be a JSON object")]);
    }
}
