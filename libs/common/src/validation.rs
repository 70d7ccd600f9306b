//! Input validation utilities

use serde_json::Value;

use crate::{
    catalog::parse_categories,
    error::{ValidationError, ValidationResult},
    models::{LoginRequest, NewMovie},
};

/// Validate a wallet deposit, which must be a strictly positive amount
pub fn validate_deposit(amount: Option<f64>) -> ValidationResult<f64> {
    match amount {
        Some(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidDeposit),
    }
}

/// Read the `deposit` field of a JSON body as a number
///
/// Numeric strings are accepted the same way a browser form submits them.
pub fn deposit_from_json(body: &Value) -> ValidationResult<f64> {
    let amount = match body.get("deposit") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    validate_deposit(amount)
}

/// Validate login credentials
pub fn validate_credentials(username: &str, password: &str) -> ValidationResult<LoginRequest> {
    if username.trim().is_empty() {
        return Err(ValidationError::MissingField("Username"));
    }
    if password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }

    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Raw admin form input for a new movie
#[derive(Debug, Clone, Default)]
pub struct MovieForm {
    pub title: String,
    pub pub_date: String,
    pub duration: String,
    pub rating: String,
    pub description: String,
    pub categories: String,
}

impl MovieForm {
    /// Turn the form into the upstream payload
    pub fn validate(&self) -> ValidationResult<NewMovie> {
        let title = required("Title", &self.title)?;
        let pub_date = parse_number("Publication date", required("Publication date", &self.pub_date)?)?;
        let duration = parse_number("Duration", required("Duration", &self.duration)?)?;
        let rating = parse_number("Rating", required("Rating", &self.rating)?)?;
        let description = required("Description", &self.description)?;
        let categories = parse_categories(required("Categories", &self.categories)?);
        if categories.is_empty() {
            return Err(ValidationError::MissingField("Categories"));
        }

        Ok(NewMovie {
            title: title.to_string(),
            pub_date,
            duration,
            rating,
            description: description.to_string(),
            categories,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> ValidationResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> ValidationResult<T> {
    value.parse().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deposit_must_be_positive() {
        assert_eq!(validate_deposit(Some(10.0)), Ok(10.0));
        assert_eq!(validate_deposit(Some(0.0)), Err(ValidationError::InvalidDeposit));
        assert_eq!(validate_deposit(Some(-5.0)), Err(ValidationError::InvalidDeposit));
        assert_eq!(validate_deposit(Some(f64::NAN)), Err(ValidationError::InvalidDeposit));
        assert_eq!(validate_deposit(None), Err(ValidationError::InvalidDeposit));
    }

    #[test]
    fn deposit_read_from_json_body() {
        assert_eq!(deposit_from_json(&json!({"deposit": 25})), Ok(25.0));
        assert_eq!(deposit_from_json(&json!({"deposit": "7.5"})), Ok(7.5));
        assert!(deposit_from_json(&json!({})).is_err());
        assert!(deposit_from_json(&json!({"deposit": null})).is_err());
        assert!(deposit_from_json(&json!({"deposit": "abc"})).is_err());
        assert!(deposit_from_json(&json!({"deposit": true})).is_err());
    }

    #[test]
    fn credentials_are_required() {
        assert!(validate_credentials("ana", "secret").is_ok());
        assert_eq!(
            validate_credentials("  ", "secret").unwrap_err(),
            ValidationError::MissingField("Username")
        );
        assert_eq!(
            validate_credentials("ana", "").unwrap_err(),
            ValidationError::MissingField("Password")
        );
    }

    #[test]
    fn movie_form_builds_payload() {
        let form = MovieForm {
            title: "Heat".into(),
            pub_date: "1995".into(),
            duration: "170".into(),
            rating: "8.3".into(),
            description: "Crime saga".into(),
            categories: "Crime, Drama".into(),
        };

        let movie = form.validate().unwrap();
        assert_eq!(movie.pub_date, 1995);
        assert_eq!(movie.duration, 170);
        assert_eq!(movie.categories, vec!["Crime", "Drama"]);
    }

    #[test]
    fn movie_form_rejects_bad_numbers() {
        let form = MovieForm {
            title: "Heat".into(),
            pub_date: "nineteen".into(),
            duration: "170".into(),
            rating: "8.3".into(),
            description: "Crime saga".into(),
            categories: "Crime".into(),
        };

        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidNumber { field: "Publication date", .. })
        ));
    }
}
