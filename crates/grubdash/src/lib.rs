//! # GrubDash
//!
//! An in-memory dishes and orders service built on [`record_actor`].
//!
//! ## Core Components
//!
//! - **[model]**: [`Dish`](model::Dish), [`Order`](model::Order) and their submitted payloads.
//! - **[dish_actor] / [order_actor]**: the check chains and entity hooks that guard every mutation,
//!   including the order status lifecycle.
//! - **[clients]**: [`DishClient`](clients::DishClient) and [`OrderClient`](clients::OrderClient),
//!   the resource operations callers use.
//! - **[api]**: the `{ data }` / `{ status, message }` boundary shapes.
//! - **[config]** and **[lifecycle]**: settings, seed data, and the [`Kitchen`](lifecycle::Kitchen)
//!   that starts and stops the actors.
//!
//! ## Errors
//!
//! Every operation fails with a [`RecordError`](error::RecordError): `InvalidInput` and
//! `IllegalStateTransition` are 400-class, `NotFound` is 404-class. The first failing
//! check decides the error, and a failed operation never changes a collection.

pub mod api;
pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod rules;
