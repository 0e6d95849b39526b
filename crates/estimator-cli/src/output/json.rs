use estimator_core::error::EstimatorError;
use serde::Serialize;

/// A per-document result tagged with the document name.
#[derive(Serialize)]
pub struct Named<'a, T: Serialize + ?Sized> {
    pub document: &'a str,
    pub result: &'a T,
}

impl<'a, T: Serialize + ?Sized> Named<'a, T> {
    pub fn new(document: &'a str, result: &'a T) -> Self {
        Named { document, result }
    }
}

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), EstimatorError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
