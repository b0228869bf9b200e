use grubdash::api::{parse_payload, ApiResponse, Outcome};
use grubdash::error::{ErrorKind, RecordError};
use grubdash::lifecycle::Kitchen;
use grubdash::model::{DishPayload, OrderPayload, OrderStatus};
use record_actor::ActorClient;
use serde_json::{json, Value};

fn dish(value: Value) -> DishPayload {
    serde_json::from_value(value).unwrap()
}

fn order(value: Value) -> OrderPayload {
    serde_json::from_value(value).unwrap()
}

fn taco() -> DishPayload {
    dish(json!({ "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x" }))
}

fn order_body(dish_id: &str) -> Value {
    json!({
        "deliverTo": "A",
        "mobileNumber": "555",
        "dishes": [{ "dish": dish_id, "quantity": 2 }]
    })
}

/// The walkthrough from the service description, end to end with real actors.
#[tokio::test]
async fn test_dish_and_order_walkthrough() {
    let kitchen = Kitchen::new();

    let created = kitchen.dishes.create(taco()).await.unwrap();
    assert_eq!(created.id, "d1");

    let err = kitchen
        .dishes
        .update("d1", dish(json!({ "price": 0 })))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.to_string().contains("price"));
    assert_eq!(kitchen.dishes.read("d1").await.unwrap(), created);

    let placed = kitchen.orders.create(order(order_body("d1"))).await.unwrap();
    assert_eq!(placed.status, OrderStatus::Pending);

    let mut delivered = order_body("d1");
    delivered["status"] = json!("delivered");
    let updated = kitchen
        .orders
        .update(&placed.id, order(delivered))
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);

    for status in ["pending", "preparing", "out-for-delivery", "delivered"] {
        let mut body = order_body("d1");
        body["status"] = json!(status);
        let err = kitchen
            .orders
            .update(&placed.id, order(body))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalStateTransition);
    }

    let err = kitchen.orders.destroy(&placed.id).await.unwrap_err();
    assert_eq!(
        err,
        RecordError::illegal("An order cannot be deleted unless it is pending")
    );
    assert_eq!(kitchen.orders.read(&placed.id).await.unwrap(), updated);

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_created_dish_id_is_fresh() {
    let kitchen = Kitchen::new();
    kitchen.dishes.create(taco()).await.unwrap();

    let before = kitchen.dishes.list().await.unwrap();
    let created = kitchen.dishes.create(taco()).await.unwrap();
    let after = kitchen.dishes.list().await.unwrap();

    assert!(before.iter().all(|d| d.id != created.id));
    assert!(after.iter().any(|d| d.id == created.id));
    assert_eq!(after.len(), before.len() + 1);

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_dish_create_leaves_collection_unchanged() {
    let kitchen = Kitchen::new();
    kitchen.dishes.create(taco()).await.unwrap();
    let before = kitchen.dishes.list().await.unwrap();

    for field in ["name", "description", "price", "image_url"] {
        let mut body = json!({ "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x" });
        body.as_object_mut().unwrap().remove(field);

        let err = kitchen.dishes.create(dish(body)).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "missing {field}");
        assert_eq!(kitchen.dishes.list().await.unwrap(), before);
    }

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dish_update_id_agreement() {
    let kitchen = Kitchen::new();
    let created = kitchen.dishes.create(taco()).await.unwrap();

    let mut body = json!({ "id": "d2", "name": "Burrito", "description": "Big", "price": 7, "image_url": "y" });
    let err = kitchen
        .dishes
        .update(&created.id, dish(body.clone()))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dish id does not match route id. Dish: d2, Route: d1"
    );

    body["id"] = json!("d1");
    let updated = kitchen.dishes.update("d1", dish(body.clone())).await.unwrap();
    assert_eq!(updated.id, "d1");
    assert_eq!(updated.name, "Burrito");

    body.as_object_mut().unwrap().remove("id");
    let updated = kitchen.dishes.update("d1", dish(body)).await.unwrap();
    assert_eq!(updated.id, "d1");

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_dishes_must_be_present_and_non_empty() {
    let kitchen = Kitchen::new();

    let mut body = order_body("d1");
    body.as_object_mut().unwrap().remove("dishes");
    let err = kitchen.orders.create(order(body.clone())).await.unwrap_err();
    assert_eq!(err, RecordError::invalid("Order must include a dish"));

    body["dishes"] = json!([]);
    let err = kitchen.orders.create(order(body)).await.unwrap_err();
    assert_eq!(err, RecordError::invalid("Order must include one dish"));

    let placed = kitchen.orders.create(order(order_body("d1"))).await.unwrap();
    let mut update = order_body("d1");
    update["status"] = json!("preparing");
    update["dishes"] = json!([]);
    let err = kitchen
        .orders
        .update(&placed.id, order(update))
        .await
        .unwrap_err();
    assert_eq!(err, RecordError::invalid("Order must include one dish"));

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bad_quantity_names_index() {
    let kitchen = Kitchen::new();

    let mut body = order_body("d1");
    body["dishes"] = json!([
        { "dish": "d1", "quantity": 1 },
        { "dish": "d2", "quantity": -4 }
    ]);
    let err = kitchen.orders.create(order(body)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Dish 1 must have a quantity that is an integer greater than 0"
    );
    assert!(kitchen.orders.list().await.unwrap().is_empty());

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_pending_order_removes_exactly_one() {
    let kitchen = Kitchen::new();
    let first = kitchen.orders.create(order(order_body("d1"))).await.unwrap();
    let second = kitchen.orders.create(order(order_body("d2"))).await.unwrap();

    let mut preparing = order_body("d2");
    preparing["status"] = json!("preparing");
    kitchen
        .orders
        .update(&second.id, order(preparing))
        .await
        .unwrap();

    let err = kitchen.orders.destroy(&second.id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalStateTransition);
    assert_eq!(kitchen.orders.list().await.unwrap().len(), 2);

    kitchen.orders.destroy(&first.id).await.unwrap();
    let remaining = kitchen.orders.list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let kitchen = Kitchen::new();
    kitchen.dishes.create(taco()).await.unwrap();
    let dishes = kitchen.dishes.list().await.unwrap();

    let err = kitchen.dishes.read("nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Dish does not exist: nope");
    let err = kitchen.dishes.update("nope", taco()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(kitchen.dishes.list().await.unwrap(), dishes);

    let err = kitchen.orders.read("nope").await.unwrap_err();
    assert_eq!(err.to_string(), "Order not found for id: nope");
    let err = kitchen
        .orders
        .update("nope", order(order_body("d1")))
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);
    let err = kitchen.orders.destroy("nope").await.unwrap_err();
    assert_eq!(err.status(), 404);

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_is_stable_without_mutation() {
    let kitchen = Kitchen::new();
    kitchen.dishes.create(taco()).await.unwrap();
    kitchen.orders.create(order(order_body("d1"))).await.unwrap();

    assert_eq!(
        kitchen.dishes.list().await.unwrap(),
        kitchen.dishes.list().await.unwrap()
    );
    assert_eq!(
        kitchen.orders.list().await.unwrap(),
        kitchen.orders.list().await.unwrap()
    );

    kitchen.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_request_bodies_through_the_envelope() {
    let kitchen = Kitchen::new();

    let payload: DishPayload = parse_payload(
        r#"{ "data": { "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x" } }"#,
    )
    .unwrap();
    let response = ApiResponse::from_result(Outcome::Created, kitchen.dishes.create(payload).await);
    assert_eq!(response.status, 201);
    assert_eq!(response.body.unwrap()["data"]["id"], json!("d1"));

    let payload: OrderPayload = parse_payload("{}").unwrap();
    let response = ApiResponse::from_result(Outcome::Created, kitchen.orders.create(payload).await);
    assert_eq!(response.status, 400);
    assert_eq!(
        response.body,
        Some(json!({ "status": 400, "message": "Order must include a deliverTo" }))
    );

    let response = ApiResponse::from_result(Outcome::NoContent, kitchen.orders.destroy("o1").await);
    assert_eq!(response.status, 404);

    kitchen.shutdown().await.unwrap();
}
