use estimator_core::catalog::schema::{PriceBook, ScopeCatalog};
use estimator_core::error::EstimatorError;
use estimator_core::classify::detected;
use estimator_core::model::UploadResult;
use estimator_core::pricing::takeoff_total;

use crate::commands::takeoff::DocumentTakeoff;

pub fn print_tables(results: &[UploadResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===\n", result.name);

        if result.error.is_some() {
            println!("  (no usable text)");
            continue;
        }

        if result.tables.is_empty() {
            println!("  No candidate tables found.");
            continue;
        }

        for table in &result.tables {
            println!("  [page {}] {}", table.page, table.header.trim());
            for row in &table.rows {
                println!("      {}", row.trim());
            }
            println!();
        }
    }
}

pub fn print_takeoff(
    takeoffs: &[DocumentTakeoff],
    book: &PriceBook,
) -> Result<(), EstimatorError> {
    for (i, doc) in takeoffs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ===\n", doc.document);

        if doc.lines.is_empty() {
            println!("  No door schedules found.");
            continue;
        }

        println!(
            "  {:<8} {:<6} {:>8} {:<5} {:>12} {:>14}",
            "Scope", "Page", "Qty", "Unit", "Unit cost", "Extended"
        );
        println!("  {}", "-".repeat(58));

        for line in &doc.lines {
            let unit_cost = line
                .unit_cost
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into());
            let extended = line
                .extended_cost
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".into());
            println!(
                "  {:<8} {:<6} {:>8} {:<5} {:>12} {:>14}",
                line.scope, line.source_page, line.quantity, line.unit, unit_cost, extended
            );
            if !line.sizes.is_empty() {
                println!("           sizes: {}", line.sizes.join(", "));
            }
        }

        let total = takeoff_total(&doc.lines)?;
        println!("\n  Total: {} {}", total, book.currency);
    }

    if takeoffs.len() > 1 {
        let all_lines: Vec<_> = takeoffs
            .iter()
            .flat_map(|doc| doc.lines.iter().cloned())
            .collect();
        println!(
            "\nAll documents: {} {} ({})",
            takeoff_total(&all_lines)?,
            book.currency,
            book.name
        );
    }

    Ok(())
}

pub fn print_scopes(results: &[UploadResult], catalog: &ScopeCatalog, show_all: bool) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("=== {} ({}) ===\n", result.name, catalog.name);

        let found: Vec<_> = detected(&result.scopes).collect();
        if found.is_empty() && !show_all {
            println!("  No trade detected (no known keywords found).");
            continue;
        }

        let title_width = result
            .scopes
            .iter()
            .map(|m| m.title.len())
            .max()
            .unwrap_or(10);

        for m in &result.scopes {
            if !m.matched && !show_all {
                continue;
            }
            let marker = if m.matched { "found" } else { "-" };
            let detail = catalog
                .scopes
                .iter()
                .find(|s| s.id == m.id)
                .and_then(|s| s.detail.as_deref())
                .filter(|_| m.matched)
                .unwrap_or("");
            println!(
                "  {:<4} {:<width$}  {:<5}  {}",
                m.id,
                m.title,
                marker,
                detail,
                width = title_width
            );
        }
    }
}

