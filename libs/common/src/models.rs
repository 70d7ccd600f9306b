//! Data transfer objects mirrored from the upstream rent-store API
//!
//! The upstream service owns every invariant on these entities. The types
//! here only describe the JSON shapes exchanged with it, and they tolerate
//! the loose typing the upstream uses for years and decimal amounts.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Upstream pagination envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Total number of items across all pages
    pub count: u64,
    /// Items of the requested page
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
            next: None,
            previous: None,
        }
    }
}

/// Movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub uuid: Uuid,
    pub title: String,
    /// Publication year
    #[serde(default, deserialize_with = "lenient::year")]
    pub pub_date: Option<i32>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient::number")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Movie category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
}

/// Rental of a movie by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rental {
    pub uuid: Uuid,
    /// Movie reference as rendered by the upstream
    #[serde(deserialize_with = "lenient::text")]
    pub movie: String,
    /// User reference, only present on the admin listing
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub user: Option<String>,
    pub rental_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub charge: Option<String>,
}

impl Rental {
    /// Whether the movie has not been returned yet
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Profile of the signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Wallet balance
    #[serde(default, deserialize_with = "lenient::amount")]
    pub wallet: f64,
}

/// Request for user login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token used as the bearer credential
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Request to add funds to the wallet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DepositRequest {
    pub deposit: f64,
}

/// Request to rent a movie
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentRequest {
    pub movie: Uuid,
}

/// Admin payload for adding a movie to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub pub_date: i32,
    pub duration: u32,
    pub rating: f64,
    pub description: String,
    pub categories: Vec<String>,
}

/// Deserializers accepting both JSON numbers and numeric strings
mod lenient {
    use super::*;
    use serde_json::Value;

    /// Leading integer of a value such as `1999` or `"1999-05-01"`
    pub fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(leading_integer))
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(as_f64))
    }

    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(number(deserializer)?.unwrap_or_default())
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_text(deserializer)?.unwrap_or_default())
    }

    pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        })
    }

    fn as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn leading_integer(value: &Value) -> Option<i32> {
        match value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => {
                let s = s.trim();
                let end = s
                    .char_indices()
                    .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                    .map_or(s.len(), |(i, _)| i);
                s[..end].parse().ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_accepts_year_as_date_string() {
        let movie: Movie = serde_json::from_value(json!({
            "uuid": "6f1c1a8e-9a4b-4d5c-8f0e-2b1d3c4e5f60",
            "title": "Heat",
            "pub_date": "1995-12-15",
            "duration": 170,
            "rating": "8.3",
            "description": "Crime",
            "categories": ["Crime", "Drama"],
            "poster_url": null,
            "extra": true
        }))
        .unwrap();

        assert_eq!(movie.pub_date, Some(1995));
        assert_eq!(movie.duration, Some(170.0));
        assert_eq!(movie.rating, Some(8.3));
        assert!(movie.poster_url.is_none());
    }

    #[test]
    fn movie_without_optional_fields() {
        let movie: Movie = serde_json::from_value(json!({
            "uuid": "6f1c1a8e-9a4b-4d5c-8f0e-2b1d3c4e5f60",
            "title": "Untitled",
            "pub_date": "unknown"
        }))
        .unwrap();

        assert_eq!(movie.pub_date, None);
        assert!(movie.categories.is_empty());
        assert!(movie.description.is_empty());
    }

    #[test]
    fn rental_charge_and_movie_accept_numbers() {
        let rental: Rental = serde_json::from_value(json!({
            "uuid": "0a7e3b52-51a4-4f0e-9a4e-0c6b1f8d2e11",
            "movie": 42,
            "rental_date": "2024-10-01",
            "return_date": null,
            "is_paid": false,
            "charge": 3.5
        }))
        .unwrap();

        assert_eq!(rental.movie, "42");
        assert_eq!(rental.charge.as_deref(), Some("3.5"));
        assert!(rental.user.is_none());
        assert!(rental.is_open());
    }

    #[test]
    fn profile_wallet_from_decimal_string() {
        let profile: Profile = serde_json::from_value(json!({
            "email": "ana@example.com",
            "first_name": "Ana",
            "last_name": "Lima",
            "wallet": "12.50"
        }))
        .unwrap();

        assert_eq!(profile.wallet, 12.5);
    }

    #[test]
    fn page_envelope_defaults_links() {
        let page: Page<Category> = serde_json::from_value(json!({
            "count": 1,
            "results": [{"name": "Drama"}]
        }))
        .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].name, "Drama");
        assert!(page.next.is_none());
    }
}
