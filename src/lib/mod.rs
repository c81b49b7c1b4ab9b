#[macro_use]
extern crate rocket;

pub mod api;
pub mod client;
pub mod core;
pub mod store;
