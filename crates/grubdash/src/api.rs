//! # Boundary Envelope
//!
//! The shapes a transport layer exchanges with the resource clients: request bodies
//! arrive as `{ "data": { … } }`, successes leave as `{ "data": … }` and failures as
//! `{ "status": 400, "message": "…" }`. Routing and HTTP plumbing live elsewhere.

use crate::error::RecordError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success wrapper around a record or a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Failure body: classification status plus the check's message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl From<&RecordError> for ErrorBody {
    fn from(e: &RecordError) -> Self {
        Self {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

/// Kind of success an operation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// list, read, update
    Ok,
    /// create
    Created,
    /// destroy
    NoContent,
}

impl Outcome {
    pub const fn status(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
        }
    }
}

/// Status plus JSON body, ready for any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` for no-content responses.
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Wraps an operation result: `Ok` values in an [`Envelope`] (no body for
    /// [`Outcome::NoContent`]), errors as an [`ErrorBody`].
    pub fn from_result<T: Serialize>(outcome: Outcome, result: Result<T, RecordError>) -> Self {
        match result {
            Ok(_) if outcome == Outcome::NoContent => Self {
                status: outcome.status(),
                body: None,
            },
            Ok(data) => match serde_json::to_value(Envelope { data }) {
                Ok(body) => Self {
                    status: outcome.status(),
                    body: Some(body),
                },
                Err(e) => Self::error(&RecordError::Unavailable(e.to_string())),
            },
            Err(e) => Self::error(&e),
        }
    }

    pub fn error(e: &RecordError) -> Self {
        let body = ErrorBody::from(e);
        Self {
            status: body.status,
            body: serde_json::to_value(body).ok(),
        }
    }
}

#[derive(Deserialize)]
struct Incoming<P> {
    #[serde(default)]
    data: Option<P>,
}

/// Reads a `{ "data": { … } }` request body into a payload.
///
/// A missing or `null` `data` is an empty payload, so the field checks report what
/// is missing. Payload fields are loosely typed, so a field of the wrong JSON type is
/// left for the checks to report. Bodies that are not JSON are rejected as invalid input.
pub fn parse_payload<P>(body: &str) -> Result<P, RecordError>
where
    P: DeserializeOwned + Default,
{
    let incoming: Incoming<P> = serde_json::from_str(body)
        .map_err(|e| RecordError::invalid(format!("Malformed request body: {e}")))?;
    Ok(incoming.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishPayload, OrderPayload};
    use serde_json::json;

    #[test]
    fn test_parse_payload_reads_envelope() {
        let payload: DishPayload =
            parse_payload(r#"{ "data": { "name": "Taco", "price": 5 } }"#).unwrap();
        assert_eq!(payload.name, Some(json!("Taco")));
        assert_eq!(payload.price, Some(json!(5)));
    }

    #[test]
    fn test_parse_payload_missing_data_is_empty() {
        let payload: OrderPayload = parse_payload("{}").unwrap();
        assert_eq!(payload, OrderPayload::default());

        let payload: OrderPayload = parse_payload(r#"{ "data": null }"#).unwrap();
        assert_eq!(payload, OrderPayload::default());
    }

    #[test]
    fn test_parse_payload_rejects_malformed_body() {
        let err = parse_payload::<DishPayload>("not json").unwrap_err();
        assert!(matches!(err, RecordError::InvalidInput(_)));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_wrongly_typed_field_reaches_the_checks() {
        let payload: DishPayload =
            parse_payload(r#"{ "data": { "name": 7, "description": "Spicy" } }"#).unwrap();
        assert_eq!(payload.name, Some(json!(7)));

        let err = crate::dish_actor::checks::create().run(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name");
    }

    #[test]
    fn test_success_envelopes() {
        let created = ApiResponse::from_result(Outcome::Created, Ok(json!({ "id": "d1" })));
        assert_eq!(created.status, 201);
        assert_eq!(created.body, Some(json!({ "data": { "id": "d1" } })));

        let listed = ApiResponse::from_result(Outcome::Ok, Ok(vec![1, 2]));
        assert_eq!(listed.status, 200);
        assert_eq!(listed.body, Some(json!({ "data": [1, 2] })));

        let deleted = ApiResponse::from_result(Outcome::NoContent, Ok(()));
        assert_eq!(deleted.status, 204);
        assert_eq!(deleted.body, None);
    }

    #[test]
    fn test_error_bodies() {
        let response = ApiResponse::from_result::<()>(
            Outcome::NoContent,
            Err(RecordError::NotFound("Order not found for id: o9".into())),
        );
        assert_eq!(response.status, 404);
        assert_eq!(
            response.body,
            Some(json!({ "status": 404, "message": "Order not found for id: o9" }))
        );

        let response = ApiResponse::from_result::<()>(
            Outcome::Ok,
            Err(RecordError::illegal("A delivered order cannot be changed")),
        );
        assert_eq!(response.status, 400);
    }
}
