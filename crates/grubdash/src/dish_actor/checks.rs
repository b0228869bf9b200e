//! Dish check chains.
//!
//! | Check | Failure |
//! |---|---|
//! | id agreement (update only) | `Dish id does not match route id. Dish: {id}, Route: {route}` |
//! | name | `Dish must include a name` |
//! | description | `Dish must include a description` |
//! | price present | `Dish must include a price` |
//! | price value | `Dish must have a price that is an integer greater than 0` |
//! | image_url | `Dish must include an image_url` |

use crate::error::RecordError;
use crate::model::DishPayload;
use crate::rules::{has_text, ids_agree, is_truthy, positive_integer, shown};
use record_actor::validation::Chain;

/// Field checks shared by create and update.
pub fn fields<'a>() -> Chain<'a, DishPayload, RecordError> {
    Chain::new("dish fields")
        .ensure(
            "name",
            |d: &DishPayload| has_text(&d.name),
            || RecordError::invalid("Dish must include a name"),
        )
        .ensure(
            "description",
            |d: &DishPayload| has_text(&d.description),
            || RecordError::invalid("Dish must include a description"),
        )
        .ensure(
            "price present",
            |d: &DishPayload| d.price.as_ref().is_some_and(is_truthy),
            || RecordError::invalid("Dish must include a price"),
        )
        .ensure(
            "price value",
            |d: &DishPayload| d.price.as_ref().and_then(positive_integer).is_some(),
            || RecordError::invalid("Dish must have a price that is an integer greater than 0"),
        )
        .ensure(
            "image_url",
            |d: &DishPayload| has_text(&d.image_url),
            || RecordError::invalid("Dish must include an image_url"),
        )
}

/// The payload id, when given, must be the id of the dish being updated.
pub fn id_agreement(route_id: &str) -> Chain<'_, DishPayload, RecordError> {
    Chain::new("dish id agreement").check("id", move |d: &DishPayload| {
        if ids_agree(&d.id, route_id) {
            Ok(())
        } else {
            Err(RecordError::invalid(format!(
                "Dish id does not match route id. Dish: {}, Route: {route_id}",
                shown(&d.id)
            )))
        }
    })
}

pub fn create<'a>() -> Chain<'a, DishPayload, RecordError> {
    fields()
}

pub fn update(route_id: &str) -> Chain<'_, DishPayload, RecordError> {
    id_agreement(route_id).then(fields())
}
