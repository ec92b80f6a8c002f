//! Application layer: the background compute activity, zoom gestures and
//! the batch front end, all talking to the engine core through the ports
//! in `ports/`.

pub mod batch;
pub mod data;
pub mod engine;
pub mod ports;
pub mod zoom;
