use crate::dish_actor::checks;
use crate::error::RecordError;
use crate::model::{Dish, DishPayload};
use async_trait::async_trait;
use record_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Dish {
    type Id = String;
    type Create = DishPayload;
    type Update = DishPayload;
    type Context = ();
    type Error = RecordError;

    fn id(&self) -> &String {
        &self.id
    }

    fn validate_create(params: &DishPayload) -> Result<(), RecordError> {
        checks::create().run(params)
    }

    /// A submitted `id` is ignored; the actor assigns a fresh one.
    fn from_create_params(id: String, params: DishPayload) -> Result<Self, RecordError> {
        Ok(Dish::from_payload(id, params))
    }

    /// Full replacement: every field except the id comes from `update`.
    async fn on_update(&mut self, update: DishPayload, _ctx: &()) -> Result<(), RecordError> {
        checks::update(&self.id).run(&update)?;
        *self = Dish::from_payload(self.id.clone(), update);
        Ok(())
    }
}
