use crate::model::OrderStatus;
use crate::rules::{positive_integer, text};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](record_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](record_actor::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for the checks run
/// on create, update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLineItem>,
}

/// One line of an order.
///
/// Everything except `quantity` is kept as submitted. The dish reference is never
/// checked against the dish collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

/// Fields submitted to create or update an order. Every field may be missing.
///
/// Every field stays loosely typed: the order checks report a bad value with the
/// right message instead of the body parser rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

impl OrderLineItem {
    /// Splits a submitted line item into its quantity and the opaque remainder.
    fn from_submitted(item: &Value) -> Self {
        let mut dish = item.as_object().cloned().unwrap_or_default();
        let quantity = dish
            .remove("quantity")
            .as_ref()
            .and_then(positive_integer)
            .unwrap_or_default();
        Self { dish, quantity }
    }
}

impl Order {
    /// Builds the stored record from a payload that already passed the order checks.
    ///
    /// A missing or empty status becomes [`OrderStatus::Pending`]. All other fields come from
    /// `payload`; nothing is carried over from a previous version of the record.
    pub fn from_payload(id: String, payload: OrderPayload) -> Self {
        let status = payload
            .status
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|submitted| submitted.parse().ok())
            .unwrap_or_default();
        let dishes = payload
            .dishes
            .as_ref()
            .and_then(Value::as_array)
            .map(|items| items.iter().map(OrderLineItem::from_submitted).collect())
            .unwrap_or_default();

        Self {
            id,
            deliver_to: text(payload.deliver_to),
            mobile_number: text(payload.mobile_number),
            status,
            dishes,
        }
    }
}

impl From<&Order> for OrderPayload {
    fn from(order: &Order) -> Self {
        let dishes = order
            .dishes
            .iter()
            .map(|item| {
                let mut line = item.dish.clone();
                line.insert("quantity".to_string(), Value::from(item.quantity));
                Value::Object(line)
            })
            .collect();

        Self {
            id: Some(Value::from(order.id.as_str())),
            deliver_to: Some(Value::from(order.deliver_to.as_str())),
            mobile_number: Some(Value::from(order.mobile_number.as_str())),
            status: Some(Value::from(order.status.to_string())),
            dishes: Some(Value::Array(dishes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> OrderPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_payload_reads_camel_case() {
        let p = payload(json!({
            "deliverTo": "A",
            "mobileNumber": "555",
            "dishes": [{ "dish": "d1", "quantity": 2 }]
        }));
        assert_eq!(p.deliver_to, Some(json!("A")));
        assert_eq!(p.mobile_number, Some(json!("555")));
        assert!(p.status.is_none());
    }

    #[test]
    fn test_from_payload_defaults_status_to_pending() {
        let p = payload(json!({
            "deliverTo": "A",
            "mobileNumber": "555",
            "dishes": [{ "dish": "d1", "quantity": 2 }]
        }));

        let order = Order::from_payload("o1".to_string(), p);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.dishes.len(), 1);
        assert_eq!(order.dishes[0].quantity, 2);
        assert_eq!(order.dishes[0].dish.get("dish"), Some(&json!("d1")));
    }

    #[test]
    fn test_line_items_serialize_flat() {
        let order = Order::from_payload(
            "o1".to_string(),
            payload(json!({
                "deliverTo": "A",
                "mobileNumber": "555",
                "status": "preparing",
                "dishes": [{ "id": "d1", "name": "Taco", "quantity": 3 }]
            })),
        );

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "o1",
                "deliverTo": "A",
                "mobileNumber": "555",
                "status": "preparing",
                "dishes": [{ "id": "d1", "name": "Taco", "quantity": 3 }]
            })
        );
    }
}
