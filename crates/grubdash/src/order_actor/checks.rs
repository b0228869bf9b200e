//! Order check chains.
//!
//! | Check | Failure |
//! |---|---|
//! | not delivered (update only) | `A delivered order cannot be changed` |
//! | id agreement (update only) | `Order id does not match route id. Order: {id}, Route: {route}` |
//! | status value (update; create when given) | `Order must have a status of pending, preparing, out-for-delivery, delivered` |
//! | deliverTo | `Order must include a deliverTo` |
//! | mobileNumber | `Order must include a mobileNumber` |
//! | dishes present | `Order must include a dish` |
//! | dishes non-empty list | `Order must include one dish` |
//! | quantities | `Dish {index} must have a quantity that is an integer greater than 0` |
//!
//! On create the status check runs after the field checks, and only when a status
//! was submitted.

use crate::error::RecordError;
use crate::model::{Order, OrderPayload, OrderStatus};
use crate::order_actor::lifecycle;
use crate::rules::{has_text, ids_agree, is_truthy, positive_integer, shown};
use record_actor::validation::Chain;
use serde_json::Value;

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

fn line_items(payload: &OrderPayload) -> Option<&Vec<Value>> {
    payload.dishes.as_ref().and_then(Value::as_array)
}

fn has_valid_quantity(item: &Value) -> bool {
    item.get("quantity").and_then(positive_integer).is_some()
}

fn is_known_status(status: &Value) -> bool {
    status
        .as_str()
        .is_some_and(|s| s.parse::<OrderStatus>().is_ok())
}

/// Every line item is scanned; the error names the last offending index.
fn quantities(payload: &OrderPayload) -> Result<(), RecordError> {
    let last_bad = line_items(payload)
        .into_iter()
        .flatten()
        .enumerate()
        .filter(|(_, item)| !has_valid_quantity(item))
        .map(|(index, _)| index)
        .last();

    match last_bad {
        Some(index) => Err(RecordError::invalid(format!(
            "Dish {index} must have a quantity that is an integer greater than 0"
        ))),
        None => Ok(()),
    }
}

/// Field checks shared by create and update.
pub fn fields<'a>() -> Chain<'a, OrderPayload, RecordError> {
    Chain::new("order fields")
        .ensure(
            "deliverTo",
            |o: &OrderPayload| has_text(&o.deliver_to),
            || RecordError::invalid("Order must include a deliverTo"),
        )
        .ensure(
            "mobileNumber",
            |o: &OrderPayload| has_text(&o.mobile_number),
            || RecordError::invalid("Order must include a mobileNumber"),
        )
        .ensure(
            "dishes present",
            |o: &OrderPayload| o.dishes.as_ref().is_some_and(is_truthy),
            || RecordError::invalid("Order must include a dish"),
        )
        .ensure(
            "dishes non-empty",
            |o: &OrderPayload| line_items(o).is_some_and(|items| !items.is_empty()),
            || RecordError::invalid("Order must include one dish"),
        )
        .check("quantities", quantities)
}

/// The submitted status must be one of the four values.
pub fn status_value<'a>() -> Chain<'a, OrderPayload, RecordError> {
    Chain::new("order status").ensure(
        "status",
        |o: &OrderPayload| o.status.as_ref().is_some_and(is_known_status),
        || RecordError::invalid(STATUS_MESSAGE),
    )
}

/// The payload id, when given, must be the id of the order being updated.
pub fn id_agreement(route_id: &str) -> Chain<'_, OrderPayload, RecordError> {
    Chain::new("order id agreement").check("id", move |o: &OrderPayload| {
        if ids_agree(&o.id, route_id) {
            Ok(())
        } else {
            Err(RecordError::invalid(format!(
                "Order id does not match route id. Order: {}, Route: {route_id}",
                shown(&o.id)
            )))
        }
    })
}

pub fn create<'a>() -> Chain<'a, OrderPayload, RecordError> {
    fields().ensure(
        "status if given",
        |o: &OrderPayload| match o.status.as_ref() {
            Some(status) if is_truthy(status) => is_known_status(status),
            _ => true,
        },
        || RecordError::invalid(STATUS_MESSAGE),
    )
}

/// Update chain for `stored`. The terminal guard comes first, so a delivered order
/// rejects every payload.
pub fn update(stored: &Order) -> Chain<'_, OrderPayload, RecordError> {
    Chain::new("order update")
        .check("not delivered", move |_: &OrderPayload| {
            lifecycle::ensure_mutable(stored)
        })
        .then(id_agreement(&stored.id))
        .then(status_value())
        .then(fields())
}
