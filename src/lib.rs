pub mod config;
pub mod core;
pub mod history;
pub mod lab;
pub mod models;
pub mod store;
#[cfg(test)]
pub mod test_helpers;
