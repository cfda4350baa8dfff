// Core pipeline exports
pub mod relay;

pub use relay::{RelayError, SearchRelay};
