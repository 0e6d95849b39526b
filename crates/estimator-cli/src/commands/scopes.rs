use estimator_core::catalog::schema::ScopeCatalog;
use estimator_core::error::EstimatorError;
use std::path::PathBuf;

use crate::commands;
use crate::output;
use crate::Backend;

pub fn run(
    input_files: &[PathBuf],
    backend: Backend,
    catalog_file: Option<PathBuf>,
    preset: Option<String>,
    show_all: bool,
    output_format: &str,
) -> Result<(), EstimatorError> {
    let catalog: ScopeCatalog = match catalog_file {
        Some(path) => estimator_core::catalog::load_catalog(&path)?,
        None => commands::preset_or_default(preset.as_deref())?,
    };

    let results = commands::process(input_files, backend, &catalog)?;

    match output_format {
        "json" => {
            let scopes: Vec<_> = results
                .iter()
                .map(|r| output::json::Named::new(&r.name, &r.scopes))
                .collect();
            output::json::print(&scopes)?
        }
        _ => output::table::print_scopes(&results, &catalog, show_all),
    }

    Ok(())
}
