use crate::rules::{positive_integer, text};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a dish on the menu.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](record_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](record_actor::ResourceActor).
///
/// See [`impl ActorEntity for Dish`](#impl-ActorEntity-for-Dish) for the checks run
/// on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Fields submitted to create or update a dish. Every field may be missing.
///
/// Fields stay loosely typed so a value of the wrong JSON type reaches the dish
/// checks and fails there with the field's own message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

impl Dish {
    /// Builds the stored record from a payload that already passed the dish checks.
    ///
    /// All non-id fields come from `payload`; nothing is carried over from a
    /// previous version of the record.
    pub fn from_payload(id: String, payload: DishPayload) -> Self {
        Self {
            id,
            name: text(payload.name),
            description: text(payload.description),
            price: payload
                .price
                .as_ref()
                .and_then(positive_integer)
                .unwrap_or_default(),
            image_url: text(payload.image_url),
        }
    }
}

impl From<&Dish> for DishPayload {
    fn from(dish: &Dish) -> Self {
        Self {
            id: Some(Value::from(dish.id.as_str())),
            name: Some(Value::from(dish.name.as_str())),
            description: Some(Value::from(dish.description.as_str())),
            price: Some(Value::from(dish.price)),
            image_url: Some(Value::from(dish.image_url.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_from_partial_json() {
        let payload: DishPayload = serde_json::from_value(json!({ "price": 0 })).unwrap();
        assert_eq!(payload.price, Some(json!(0)));
        assert!(payload.name.is_none());
        assert!(payload.id.is_none());
    }

    #[test]
    fn test_payload_keeps_wrongly_typed_text() {
        let payload: DishPayload =
            serde_json::from_value(json!({ "name": 7, "description": ["x"] })).unwrap();
        assert_eq!(payload.name, Some(json!(7)));
        assert_eq!(payload.description, Some(json!(["x"])));
    }

    #[test]
    fn test_from_payload_replaces_every_field() {
        let payload = DishPayload {
            id: Some(json!("ignored")),
            name: Some(json!("Taco")),
            description: Some(json!("Spicy")),
            price: Some(json!(5)),
            image_url: Some(json!("x")),
        };

        let dish = Dish::from_payload("d1".to_string(), payload);
        assert_eq!(
            dish,
            Dish {
                id: "d1".to_string(),
                name: "Taco".to_string(),
                description: "Spicy".to_string(),
                price: 5,
                image_url: "x".to_string(),
            }
        );
    }
}
