use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timetable_json::cli::{self, ConvertArgs};
use timetable_json::writer::DEFAULT_OUTPUT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Convert a course timetable workbook into JSON")]
#[command(long_about = "Timetable - course timetable workbook to JSON

Each worksheet describes one course: the course code, title and credit
structure sit in fixed cells at the top, and the rows below list the
sections with instructor, room, days/hours and numeric time-slot codes.

COMMANDS:
  convert  - Write timetable.json from a workbook
  inspect  - List worksheets, their columns and any missing columns

EXAMPLES:
  timetable convert timetable.xlsx
  timetable convert timetable.xlsx -o out.json --code-key course_code
  timetable inspect timetable.xlsx")]
#[command(version)]
struct Cli {
    /// Show debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert every worksheet of a workbook into one JSON document.

Time-slot codes 1-9 become hour ranges (1 -> \"8-9\", 9 -> \"4-5\"); any other
code becomes \"Unknown\". Missing section columns produce warnings and
fallback values. If the workbook cannot be opened, nothing is written.

NOTE: the course code is written under an empty key (\"\") for compatibility
with existing consumers. Use --code-key to name it.")]
    /// Convert a timetable workbook to JSON
    Convert {
        /// Path to the workbook (.xlsx, .xls, .ods)
        #[arg(env = "TIMETABLE_WORKBOOK")]
        input: PathBuf,

        /// Output JSON file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT, env = "TIMETABLE_OUTPUT")]
        output: PathBuf,

        /// JSON key for the course code
        #[arg(long, default_value = "")]
        code_key: String,

        /// JSON file overriding the worksheet layout
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Skip worksheets too short to hold course metadata instead of failing
        #[arg(long)]
        skip_short_sheets: bool,

        /// Print the JSON to stdout instead of writing a file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List worksheets and their columns
    Inspect {
        /// Path to the workbook
        input: PathBuf,

        /// JSON file overriding the worksheet layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            code_key,
            layout,
            skip_short_sheets,
            dry_run,
        } => cli::convert(ConvertArgs {
            input,
            output,
            code_key,
            layout,
            skip_short_sheets,
            dry_run,
        })?,

        Commands::Inspect { input, layout } => cli::inspect(input, layout)?,
    }

    Ok(())
}
