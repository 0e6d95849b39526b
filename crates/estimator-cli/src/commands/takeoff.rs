use estimator_core::catalog::builtin;
use estimator_core::catalog::schema::PriceBook;
use estimator_core::error::EstimatorError;
use estimator_core::model::{ScheduleResult, TakeoffLine};
use estimator_core::pricing::price_takeoff;
use serde::Serialize;
use std::path::PathBuf;

use crate::commands;
use crate::output;
use crate::Backend;

/// Takeoff for one document: raw schedule results and their priced lines.
#[derive(Serialize)]
pub struct DocumentTakeoff<'a> {
    pub document: &'a str,
    pub schedules: &'a [ScheduleResult],
    pub lines: Vec<TakeoffLine>,
}

pub fn run(
    input_files: &[PathBuf],
    backend: Backend,
    prices: Option<PathBuf>,
    price_preset: &str,
    output_format: &str,
) -> Result<(), EstimatorError> {
    let book: PriceBook = match prices {
        Some(path) => estimator_core::catalog::load_price_book(&path)?,
        None => builtin::load_price_preset(price_preset)?,
    };

    let catalog = commands::preset_or_default(None)?;
    let results = commands::process(input_files, backend, &catalog)?;

    let mut takeoffs = Vec::with_capacity(results.len());
    for r in &results {
        takeoffs.push(DocumentTakeoff {
            document: &r.name,
            schedules: &r.schedules,
            lines: price_takeoff(&r.schedules, &book)?,
        });
    }

    match output_format {
        "json" => output::json::print(&takeoffs)?,
        _ => output::table::print_takeoff(&takeoffs, &book)?,
    }

    Ok(())
}
