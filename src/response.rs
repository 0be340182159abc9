//! Shape validation for the status endpoint payload

use serde_json::Value;

use crate::error::HeraldError;

const REQUIRED_KEYS: [&str; 2] = ["homeworks", "current_date"];

/// Validate that a decoded response has the expected shape.
///
/// The value must be a JSON object carrying both `homeworks` (an array)
/// and `current_date`. Validation only; the input is never mutated.
pub fn check_response(value: &Value) -> crate::Result<()> {
    let object = value
        .as_object()
        .ok_or_else(|| HeraldError::Shape("response is not a JSON object".to_string()))?;

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(HeraldError::MissingKeys(missing.join(", ")));
    }

    if !object["homeworks"].is_array() {
        return Err(HeraldError::Shape(
            "`homeworks` is not an array".to_string(),
        ));
    }

    Ok(())
}

/// A validated status report.
///
/// Items stay as raw values; each is checked individually when translated
/// into a [`crate::homework::Homework`].
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub homeworks: Vec<Value>,
}

impl StatusReport {
    /// Validate a decoded response body and take ownership of its item list
    pub fn from_value(value: Value) -> crate::Result<Self> {
        check_response(&value)?;
        match value {
            Value::Object(mut object) => match object.remove("homeworks") {
                Some(Value::Array(homeworks)) => Ok(Self { homeworks }),
                _ => Err(HeraldError::Shape(
                    "`homeworks` is not an array".to_string(),
                )),
            },
            _ => Err(HeraldError::Shape(
                "response is not a JSON object".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_valid_response() {
        let value = json!({"homeworks": [], "current_date": 1000});
        check_response(&value).unwrap();
    }

    #[test]
    fn validation_is_idempotent() {
        let value = json!({"homeworks": [{"homework_name": "x"}], "current_date": 1000});
        let before = value.clone();
        check_response(&value).unwrap();
        check_response(&value).unwrap();
        assert_eq!(value, before);
    }

    #[test]
    fn rejects_non_object() {
        for value in [json!([1, 2]), json!("text"), json!(42), Value::Null] {
            let err = check_response(&value).unwrap_err();
            assert!(matches!(err, HeraldError::Shape(_)), "{value}");
        }
    }

    #[test]
    fn rejects_missing_homeworks_key() {
        let err = check_response(&json!({"current_date": 1000})).unwrap_err();
        assert!(matches!(err, HeraldError::MissingKeys(ref keys) if keys == "homeworks"));
    }

    #[test]
    fn rejects_missing_current_date_key() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, HeraldError::MissingKeys(ref keys) if keys == "current_date"));
    }

    #[test]
    fn reports_all_missing_keys() {
        let err = check_response(&json!({})).unwrap_err();
        assert!(
            matches!(err, HeraldError::MissingKeys(ref keys) if keys == "homeworks, current_date")
        );
    }

    #[test]
    fn rejects_scalar_homeworks() {
        let value = json!({"homeworks": "not-a-list", "current_date": 1000});
        let err = check_response(&value).unwrap_err();
        assert!(matches!(err, HeraldError::Shape(_)));
    }

    #[test]
    fn report_preserves_item_order() {
        let value = json!({
            "homeworks": [
                {"homework_name": "first", "status": "approved"},
                {"homework_name": "second", "status": "rejected"}
            ],
            "current_date": 1000
        });
        let report = StatusReport::from_value(value).unwrap();
        assert_eq!(report.homeworks.len(), 2);
        assert_eq!(report.homeworks[0]["homework_name"], "first");
        assert_eq!(report.homeworks[1]["homework_name"], "second");
    }

    #[test]
    fn report_rejects_invalid_shape() {
        let err = StatusReport::from_value(json!({"homeworks": 7, "current_date": 1})).unwrap_err();
        assert!(matches!(err, HeraldError::Shape(_)));
    }
}
