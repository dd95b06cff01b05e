mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "voltrix",
    version,
    about = "Assembly matching and BOM generation for switchgear quotes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match quote specifications against the assembly catalog
    Match {
        /// Free-text specification, e.g. "90H x 40W x 60D, Emax 6.2, fixed"
        specs: Option<String>,

        /// Structured quote JSON file from the upstream extraction step
        #[arg(short, long, value_name = "FILE", conflicts_with = "specs")]
        quote: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Pattern memory file: record exact matches, consult on no-match
        #[arg(short, long, value_name = "FILE")]
        memory: Option<PathBuf>,
    },
    /// Print the bill of materials for an assembly
    Bom {
        /// Assembly id, e.g. 123456-0100-101
        assembly_id: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also write the flattened CSV form to a file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,
    },
    /// Inspect the assembly catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Generate a box identifier code from section specifications
    Boxcode {
        /// Section height in inches
        #[arg(long)]
        height: Option<String>,

        /// Section width in inches
        #[arg(long)]
        width: Option<String>,

        /// Section depth in inches
        #[arg(long)]
        depth: Option<String>,

        /// Breaker manufacturer or model text
        #[arg(long)]
        breaker: Option<String>,

        /// Mounting description (fixed, drawout, ...)
        #[arg(long)]
        mounting: Option<String>,

        /// Seismic inclusions text from the board specs
        #[arg(long)]
        seismic: Option<String>,

        /// Hardware notes from the board specs
        #[arg(long)]
        hardware: Option<String>,

        /// Finish description
        #[arg(long)]
        finish: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the learned pattern memory
    Patterns {
        #[command(subcommand)]
        action: PatternsAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all assemblies with their specifications
    List,
    /// Show one assembly: specs, parts, and what the parts themselves imply
    Show {
        /// Assembly id, e.g. 123456-0100-101
        assembly_id: String,
    },
}

#[derive(Subcommand)]
enum PatternsAction {
    /// List stored patterns
    List {
        /// Pattern memory file
        #[arg(short, long, value_name = "FILE")]
        memory: PathBuf,
    },
    /// Suggest a box identifier for a free-text specification
    Suggest {
        /// Free-text specification to look up
        specs: String,

        /// Pattern memory file
        #[arg(short, long, value_name = "FILE")]
        memory: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Match {
            specs,
            quote,
            output,
            memory,
        } => commands::match_cmd::run(specs, quote, &output, memory),
        Commands::Bom {
            assembly_id,
            output,
            csv,
        } => commands::bom::run(&assembly_id, &output, csv),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Show { assembly_id } => commands::catalog::show(&assembly_id),
        },
        Commands::Boxcode {
            height,
            width,
            depth,
            breaker,
            mounting,
            seismic,
            hardware,
            finish,
            output,
        } => commands::boxcode::run(
            height, width, depth, breaker, mounting, seismic, hardware, finish, &output,
        ),
        Commands::Patterns { action } => match action {
            PatternsAction::List { memory } => commands::patterns::list(&memory),
            PatternsAction::Suggest { specs, memory } => {
                commands::patterns::suggest(&specs, &memory)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
