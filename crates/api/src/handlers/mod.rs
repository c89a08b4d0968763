//! Axum handlers. Each one binds the request, hands it to a controller, and
//! wraps the result in the `{ "data": ... }` envelope.

pub mod labs;
pub mod users;
