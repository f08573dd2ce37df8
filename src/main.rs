//! soal-import CLI - Parse a question CSV and emit JSON
//!
//! ```bash
//! soal-import soal.csv                     # Tryout pool, JSON to stdout
//! soal-import soal.csv --pool latihan      # Practice pool
//! soal-import soal.csv --output soal.json  # Write JSON to a file
//! ```

use clap::Parser;
use soal_import::{import_file_report, QuestionPool};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "soal-import")]
#[command(about = "Parse an exam question CSV into validated JSON", long_about = None)]
struct Cli {
    /// Input CSV file
    input: PathBuf,

    /// Target question pool: tryout or latihan
    #[arg(short, long, default_value = "tryout", value_parser = QuestionPool::from_str)]
    pool: QuestionPool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.input, cli.pool, cli.output.as_deref()) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(
    input: &Path,
    pool: QuestionPool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let report = import_file_report(input, pool)?;

    eprintln!("   Pool: {}", pool);
    eprintln!("   Encoding: {}", report.encoding);
    eprintln!("   Delimiter: '{}'", report.delimiter);
    eprintln!("✅ Parsed {} questions", report.questions.len());

    let json = serde_json::to_string_pretty(&report.questions)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("💾 Written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
