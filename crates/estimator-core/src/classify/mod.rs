pub mod engine;

pub use engine::{classify_scopes, detected};
