//! Custom Axum extractors
//!
//! Wrap the stock `Json`, `Path` and `Query` extractors so rejections render as
//! `ApiError` bodies instead of plain text.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::error::ApiError;

/// JSON body; any rejection becomes 422
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Unprocessable {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Path parameters; any rejection becomes 400
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Query string; any rejection (e.g. a repeated `page` key) becomes 400
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Deserialize an id sent either as a JSON number or a numeric string.
///
/// Browser forms post `"category": "3"`; API clients post `3`.
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntRepr {
        Int(i64),
        Str(String),
    }

    let raw = match IntRepr::deserialize(deserializer)? {
        IntRepr::Int(n) => n,
        IntRepr::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid integer '{s}'")))?,
    };

    T::try_from(raw).map_err(|_| serde::de::Error::custom(format!("integer {raw} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(deserialize_with = "lenient_int")]
        category: i64,
        #[serde(deserialize_with = "lenient_int")]
        difficulty: i32,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Payload = serde_json::from_str(r#"{"category": 3, "difficulty": "2"}"#).unwrap();
        assert_eq!(p.category, 3);
        assert_eq!(p.difficulty, 2);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Payload>(r#"{"category": "x", "difficulty": 1}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"category": 1, "difficulty": 9999999999}"#).is_err());
    }
}
