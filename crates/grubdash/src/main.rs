//! Demo binary: starts a kitchen and walks a dish and an order through their lifecycle,
//! printing each response as the transport layer would send it.

use clap::Parser;
use grubdash::api::{parse_payload, ApiResponse, Outcome};
use grubdash::config::KitchenConfig;
use grubdash::error::RecordError;
use grubdash::lifecycle::Kitchen;
use grubdash::model::{DishPayload, OrderPayload};
use record_actor::tracing::setup_tracing;
use record_actor::ActorClient;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{info, Instrument};

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file; defaults apply when omitted
    #[arg(short, long, env = "GRUBDASH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides `log_filter`
    #[arg(short, long)]
    log_level: Option<String>,
}

fn show<T: Serialize>(step: &str, outcome: Outcome, result: Result<T, RecordError>) {
    let response = ApiResponse::from_result(outcome, result);
    let body = response.body.map(|b| b.to_string()).unwrap_or_default();
    info!(step, status = response.status, %body, "Response");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => KitchenConfig::from_file(path)?,
        None => KitchenConfig::default(),
    };
    setup_tracing(args.log_level.as_deref().unwrap_or(&config.log_filter));

    let kitchen = Kitchen::start(&config)?;
    info!("Starting demo");

    let dish_id = async {
        let payload: DishPayload = parse_payload(
            r#"{ "data": { "name": "Taco", "description": "Spicy", "price": 5, "image_url": "x" } }"#,
        )?;
        let created = kitchen.dishes.create(payload).await;
        let id = created
            .as_ref()
            .map(|dish| dish.id.clone())
            .map_err(RecordError::clone);
        show("create dish", Outcome::Created, created);
        id
    }
    .instrument(tracing::info_span!("dish"))
    .await?;

    async {
        let payload: DishPayload = parse_payload(r#"{ "data": { "price": 0 } }"#)?;
        show(
            "update dish with price 0",
            Outcome::Ok,
            kitchen.dishes.update(&dish_id, payload).await,
        );
        show("read dish", Outcome::Ok, kitchen.dishes.read(&dish_id).await);
        Ok::<_, RecordError>(())
    }
    .instrument(tracing::info_span!("dish"))
    .await?;

    async {
        let body = format!(
            r#"{{ "data": {{ "deliverTo": "A", "mobileNumber": "555", "dishes": [{{ "dish": "{dish_id}", "quantity": 2 }}] }} }}"#
        );
        let created = kitchen.orders.create(parse_payload(&body)?).await;
        let order_id = created
            .as_ref()
            .map(|order| order.id.clone())
            .map_err(RecordError::clone);
        show("create order", Outcome::Created, created);
        let order_id = order_id?;

        let mut delivered: OrderPayload = parse_payload(&body)?;
        delivered.status = Some(Value::from("delivered"));
        show(
            "mark delivered",
            Outcome::Ok,
            kitchen.orders.update(&order_id, delivered.clone()).await,
        );

        delivered.status = Some(Value::from("preparing"));
        show(
            "update delivered order",
            Outcome::Ok,
            kitchen.orders.update(&order_id, delivered).await,
        );
        show(
            "delete delivered order",
            Outcome::NoContent,
            kitchen.orders.destroy(&order_id).await,
        );
        show("list orders", Outcome::Ok, kitchen.orders.list().await);
        Ok::<_, RecordError>(())
    }
    .instrument(tracing::info_span!("order"))
    .await?;

    kitchen.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
