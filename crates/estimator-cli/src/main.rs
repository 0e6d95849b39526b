mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "estimator",
    version,
    about = "Takeoff extraction for construction project documents"
)]
struct Cli {
    /// PDF text extraction backend
    #[arg(long, global = true, value_enum, default_value_t = Backend::PdfExtract)]
    backend: Backend,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Backend {
    /// Built-in pure Rust extraction (default layout)
    PdfExtract,
    /// poppler's `pdftotext -layout`, keeps column gaps
    Pdftotext,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the candidate tables found in each document
    Tables {
        /// Documents to read (PDF, XLSX, DOCX or text)
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Count doors and collect sizes from door schedules, priced per unit
    Takeoff {
        /// Documents to read (PDF, XLSX, DOCX or text)
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Custom JSON price book
        #[arg(long = "prices", value_name = "FILE", conflicts_with = "price_preset")]
        prices: Option<PathBuf>,

        /// Predefined price book
        #[arg(long = "price-preset", value_name = "NAME", default_value = "default")]
        price_preset: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Detect trade scopes or CSI divisions by keyword
    Scopes {
        /// Documents to read (PDF, XLSX, DOCX or text)
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Custom JSON scope catalog
        #[arg(short, long = "catalog", value_name = "FILE", conflicts_with = "preset")]
        catalog: Option<PathBuf>,

        /// Predefined catalog: trades (default) or csi
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Show unmatched scopes too
        #[arg(long)]
        show_all: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Title and one-line scope summary per document
    Summarize {
        /// Documents to read (PDF, XLSX, DOCX or text)
        #[arg(required = true)]
        input_files: Vec<PathBuf>,

        /// Predefined catalog used for the summary
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Manage and inspect scope catalogs
    Catalogs {
        #[command(subcommand)]
        action: CatalogsAction,
    },
}

#[derive(Subcommand)]
enum CatalogsAction {
    /// List predefined catalogs and price books
    List,
    /// Show the scopes and keywords of a catalog
    Explain {
        /// Preset name (e.g., "csi")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let backend = cli.backend;

    let result = match cli.command {
        Commands::Tables {
            input_files,
            output,
        } => commands::tables::run(&input_files, backend, &output),
        Commands::Takeoff {
            input_files,
            prices,
            price_preset,
            output,
        } => commands::takeoff::run(&input_files, backend, prices, &price_preset, &output),
        Commands::Scopes {
            input_files,
            catalog,
            preset,
            show_all,
            output,
        } => commands::scopes::run(&input_files, backend, catalog, preset, show_all, &output),
        Commands::Summarize {
            input_files,
            preset,
            output,
        } => commands::summarize::run(&input_files, backend, preset, &output),
        Commands::Catalogs { action } => match action {
            CatalogsAction::List => commands::catalogs::list(),
            CatalogsAction::Explain { preset } => commands::catalogs::explain(&preset),
            CatalogsAction::Schema => commands::catalogs::schema(),
            CatalogsAction::Validate { file } => commands::catalogs::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
