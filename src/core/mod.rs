pub mod cancellation;
pub mod data;
pub mod engine;
pub mod util;
