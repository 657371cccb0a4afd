use clap::{Parser, Subcommand};
use std::{fs, io, path::PathBuf, process::ExitCode};
use tabled::{Table as TextTable, Tabled};
use ukbraille::{
    Page, PrintView, Transliterator, UKRAINIAN, WritePrinter,
    check_yaml::{TestResult, check_yaml},
};

#[derive(Debug, Subcommand)]
enum Commands {
    /// Transliterate <INPUT> to Braille
    #[command(arg_required_else_help = true)]
    Translate {
        /// Show how every character was translated
        #[arg(long)]
        trace: bool,
        /// String to transliterate
        input: String,
    },
    /// Print the built-in Ukrainian table
    Table,
    /// Print every line of <FILE> as a tagged element of a page
    #[command(arg_required_else_help = true)]
    Print {
        /// Check the braille box before printing
        #[arg(long)]
        braille: bool,
        /// Text file, one element per line
        file: PathBuf,
    },
    /// Run the tests defined in the <YAML_TEST_FILE>. Return 0 if all
    /// tests pass or 1 if any of the tests fail.
    CheckYaml {
        /// YAML file listing all the tests
        yaml: PathBuf,
    },
}

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "ukbraille")]
#[command(about = "A command line tool to transliterate Ukrainian text to Braille")]
#[command(author, version, long_about = None)] // Read from `Cargo.toml`
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Tabled)]
struct TraceRow {
    input: String,
    output: String,
    rule: String,
}

#[derive(Tabled)]
struct TableRow {
    kind: String,
    character: char,
    dots: String,
    cell: char,
}

fn print_failure(result: &TestResult) {
    if let TestResult::Failure {
        input,
        expected,
        actual,
    } = result
    {
        eprintln!("FAIL {input:?}: expected {expected:?}, got {actual:?}");
    }
}

fn run(command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Translate { trace, input } => {
            let transliterator = Transliterator::default();
            if trace {
                let rows = transliterator.trace(&input).into_iter().map(|t| TraceRow {
                    input: t.input().to_string(),
                    output: t.output().to_string(),
                    rule: t.kind().to_string(),
                });
                println!("{}", TextTable::new(rows));
            }
            println!("{}", transliterator.transliterate(&input));
        }
        Commands::Table => {
            let rows = UKRAINIAN.entries().iter().map(|e| TableRow {
                kind: e.kind.to_string(),
                character: e.character,
                dots: e.cell.notation(),
                cell: e.cell.to_unicode(),
            });
            println!("{}", TextTable::new(rows));
        }
        Commands::Print { braille, file } => {
            let content = fs::read_to_string(&file)?;
            let mut page = Page::new();
            for line in content.lines().filter(|l| !l.trim().is_empty()) {
                page.add_tagged(line);
            }
            let mut view = PrintView::new(page, false);
            view.on_toggle(braille);
            view.print(&mut WritePrinter::new(io::stdout().lock()))?;
        }
        Commands::CheckYaml { yaml } => {
            println!("Testing with {:?}", yaml);
            let results = check_yaml(&yaml)?;
            results.iter().for_each(print_failure);
            let failures = results.iter().filter(|r| r.is_failure()).count();
            println!("Pass: {}", results.iter().filter(|r| r.is_success()).count());
            println!("Fail: {}", failures);
            println!(
                "Expected failures: {}",
                results.iter().filter(|r| r.is_expected_failure()).count()
            );
            println!(
                "Unexpected successes: {}",
                results.iter().filter(|r| r.is_unexpected_success()).count()
            );
            if failures > 0 {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
