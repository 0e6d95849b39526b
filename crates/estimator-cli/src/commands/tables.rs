use std::path::PathBuf;

use crate::commands;
use crate::output;
use crate::Backend;

pub fn run(
    input_files: &[PathBuf],
    backend: Backend,
    output_format: &str,
) -> Result<(), estimator_core::error::EstimatorError> {
    let catalog = commands::preset_or_default(None)?;
    let results = commands::process(input_files, backend, &catalog)?;

    match output_format {
        "json" => {
            let tables: Vec<_> = results
                .iter()
                .map(|r| output::json::Named::new(&r.name, &r.tables))
                .collect();
            output::json::print(&tables)?
        }
        _ => output::table::print_tables(&results),
    }

    Ok(())
}
