use estimator_core::catalog::builtin;
use std::path::Path;

pub fn list() -> Result<(), estimator_core::error::EstimatorError> {
    println!("Available scope catalogs:\n");
    for name in builtin::PRESETS {
        let catalog = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<8} {} (v{}){}",
            name, catalog.name, catalog.version, default_marker
        );
        if let Some(ref desc) = catalog.description {
            println!("           {}", desc);
        }
        println!("           {} scopes", catalog.scopes.len());
        println!();
    }

    println!("Available price books:\n");
    for name in builtin::PRICE_PRESETS {
        let book = builtin::load_price_preset(name)?;
        println!(
            "  {:<8} {} (v{}, {})",
            name, book.name, book.version, book.currency
        );
        for price in &book.prices {
            println!(
                "           {:<10} {} {} per {}",
                price.scope, price.unit_cost, book.currency, price.unit
            );
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), estimator_core::error::EstimatorError> {
    let catalog = builtin::load_preset(preset)?;

    println!("{} (version {})\n", catalog.name, catalog.version);

    if let Some(ref desc) = catalog.description {
        println!("{}\n", desc);
    }

    println!(
        "A document is checked against {} scopes. A scope is found when any of",
        catalog.scopes.len()
    );
    println!("its keywords appears anywhere in the text, ignoring case.\n");

    let id_width = catalog
        .scopes
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(2)
        .max(2);
    let title_width = catalog
        .scopes
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<id_width$}  {:<title_width$}  Keywords",
        "ID",
        "Scope",
        id_width = id_width,
        title_width = title_width
    );
    println!("  {}", "-".repeat(id_width + title_width + 14));

    for scope in &catalog.scopes {
        println!(
            "  {:<id_width$}  {:<title_width$}  {}",
            scope.id,
            scope.title,
            scope.keywords.join(", "),
            id_width = id_width,
            title_width = title_width
        );
    }

    println!();

    Ok(())
}

pub fn schema() -> Result<(), estimator_core::error::EstimatorError> {
    print!(
        r#"JSON Catalog Schema
===================

A catalog lists the scopes (trades or CSI divisions) a document is
checked against. When you run `estimator scopes`, every scope gets one
result line saying whether any of its keywords was found.

Top-level fields:
  name          (string, required)  Human-readable name of the catalog
  description   (string, optional)  What this catalog is for
  version       (string, required)  Version identifier (e.g., "2018.1")
  scopes        (array, required)   Scopes in the order they are reported

Each scope in the "scopes" array:
  id            (string, required)  Unique identifier (e.g., "08")
  title         (string, required)  Display name (e.g., "Openings")
  keywords      (array, required)   Lowercase substrings. The document text
                                    is lowercased and the scope is found if
                                    any keyword occurs at least once.
                                    Substring match: "door" also matches
                                    "doorway" and "outdoor".
  detail        (string, optional)  Note shown with a found scope.

Example:
{{
  "name": "Site work",
  "description": "Scopes for a site package",
  "version": "1.0",
  "scopes": [
    {{
      "id": "31",
      "title": "Earthwork",
      "keywords": ["excavation", "grading", "backfill"]
    }},
    {{
      "id": "32",
      "title": "Paving",
      "keywords": ["asphalt", "paving"],
      "detail": "Includes striping"
    }}
  ]
}}

Price books (`estimator takeoff --prices FILE`) use:
{{
  "name": "Project prices",
  "version": "1",
  "currency": "USD",
  "prices": [
    {{ "scope": "Doors", "unit": "EA", "unit_cost": "1250.00" }}
  ]
}}

Note: unit_cost values must be quoted strings, not bare numbers,
to preserve exact decimal precision (e.g., "1250.00" not 1250.00).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), estimator_core::error::EstimatorError> {
    let catalog = estimator_core::catalog::load_catalog(file)?;

    println!(
        "Catalog '{}' (v{}) is valid.",
        catalog.name, catalog.version
    );
    println!("  Scopes: {}", catalog.scopes.len());

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (i, scope) in catalog.scopes.iter().enumerate() {
        for keyword in &scope.keywords {
            if keyword.chars().count() < 3 {
                warnings.push(format!(
                    "scope '{}' keyword '{}' is very short and may match unrelated words",
                    scope.id, keyword
                ));
            }
            for other in &catalog.scopes[i + 1..] {
                if other.keywords.contains(keyword) {
                    warnings.push(format!(
                        "keyword '{}' appears in both '{}' and '{}'",
                        keyword, scope.id, other.id
                    ));
                }
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
