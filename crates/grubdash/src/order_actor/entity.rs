use crate::error::RecordError;
use crate::model::{Order, OrderPayload};
use crate::order_actor::{checks, lifecycle};
use async_trait::async_trait;
use record_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = String;
    type Create = OrderPayload;
    type Update = OrderPayload;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn validate_create(params: &OrderPayload) -> Result<(), RecordError> {
        checks::create().run(params)
    }

    fn from_create_params(id: String, params: OrderPayload) -> Result<Self, RecordError> {
        Ok(Order::from_payload(id, params))
    }

    /// Full replacement, including the status. Fields missing from `update` do not
    /// survive from the stored order.
    async fn on_update(&mut self, update: OrderPayload, _ctx: &()) -> Result<(), RecordError> {
        checks::update(self).run(&update)?;
        *self = Order::from_payload(self.id.clone(), update);
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), RecordError> {
        lifecycle::ensure_deletable(self)
    }
}
