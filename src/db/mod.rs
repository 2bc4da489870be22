pub mod catalog;
pub mod engine;
pub mod goals;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod stats;
pub mod store;
pub mod users;
