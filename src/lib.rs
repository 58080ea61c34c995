pub mod config;
pub mod error;
pub mod journal;
pub mod models;
pub mod psychology;
#[cfg(test)]
pub mod test_helpers;
