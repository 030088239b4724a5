use clap::{Parser, Subcommand, ValueEnum};
use feedmix::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StageCli {
    Starter,
    Grower,
    Finisher,
}

impl From<StageCli> for Stage {
    fn from(stage: StageCli) -> Self {
        match stage {
            StageCli::Starter => Stage::Starter,
            StageCli::Grower => Stage::Grower,
            StageCli::Finisher => Stage::Finisher,
        }
    }
}

/// Swine ration formulation and nutrient analysis
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON ingredient catalog replacing the built-in one
    #[arg(long, env = "FEEDMIX_CATALOG", global = true)]
    catalog: Option<PathBuf>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Allocate ingredients for a herd and analyze the resulting ration
    Formulate {
        /// Ingredient names as listed by `ingredients` (quote names with spaces)
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Growth stage of the herd
        #[arg(short, long, value_enum)]
        stage: StageCli,

        /// Number of animals
        #[arg(short = 'n', long)]
        herd_size: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the recommended nutrient minimums of a growth stage
    Recommend {
        #[arg(value_enum)]
        stage: StageCli,
    },

    /// List the ingredients of the active catalog
    Ingredients,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let formulator = build_formulator(cli.catalog.as_deref());

    if cli.human {
        run_interactive(&formulator);
        return;
    }

    match cli.command {
        Some(Commands::Formulate {
            ingredients,
            stage,
            herd_size,
            json,
        }) => run_formulation(&formulator, ingredients, stage.into(), herd_size, json),
        Some(Commands::Recommend { stage }) => print_recommendations(&formulator, stage.into()),
        Some(Commands::Ingredients) => {
            print!("{}", ReportFormatter::format_catalog(formulator.catalog()))
        }
        None => exit_with_error("A subcommand is required in non-interactive mode. See --help."),
    }
}

fn build_formulator(catalog_path: Option<&Path>) -> Formulator {
    match catalog_path {
        Some(path) => {
            let catalog = Catalog::from_file(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to load catalog '{}': {}", path.display(), e))
            });
            tracing::info!(path = %path.display(), ingredients = catalog.len(), "loaded catalog");
            Formulator::builder(catalog).build()
        }
        None => Formulator::default(),
    }
}

fn run_formulation(
    formulator: &Formulator,
    ingredients: Vec<String>,
    stage: Stage,
    herd_size: u32,
    json: bool,
) {
    let request = FormulationRequest::new(ingredients, stage, herd_size)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid request: {}", e)));
    let report = formulator
        .evaluate(&request)
        .unwrap_or_else(|e| exit_with_error(&format!("Formulation failed: {}", e)));

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
        println!("{}", rendered);
    } else {
        print!("{}", ReportFormatter::format_report(&report));
    }
}

fn print_recommendations(formulator: &Formulator, stage: Stage) {
    let intake = formulator
        .requirements_table()
        .profile(stage)
        .daily_intake_per_animal();
    print!(
        "{}",
        ReportFormatter::format_recommendations(stage, intake, &formulator.recommendations(stage))
    );
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(formulator: &Formulator) {
    println!("--- feedmix Interactive Mode ---");
    println!(
        "Available ingredients: {}",
        formulator.catalog().names().collect::<Vec<_>>().join(", ")
    );

    let ingredients: Vec<String> = loop {
        let line = prompt_for_input("Enter ingredients (comma separated)", None);
        let names: Vec<String> = line
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        if names.is_empty() {
            println!("Please enter at least one ingredient.");
            continue;
        }
        if let Some(unknown) = names.iter().find(|n| !formulator.catalog().contains(n)) {
            println!("Unknown ingredient '{}'. Please try again.", unknown);
            continue;
        }
        break names;
    };

    let stage = loop {
        let choice =
            prompt_for_input("Enter growth stage (starter/grower/finisher)", Some("starter"));
        match choice.parse::<Stage>() {
            Ok(stage) => break stage,
            Err(e) => println!("{}", e),
        }
    };

    let herd_size = loop {
        let choice = prompt_for_input("Enter herd size", Some("1"));
        match choice.parse::<u32>() {
            Ok(n) if n > 0 => break n,
            _ => println!("Invalid herd size. Please enter a whole number greater than 0."),
        }
    };

    println!();
    run_formulation(formulator, ingredients, stage, herd_size, false);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }
    match io::stdin().read_line(&mut line) {
        Ok(0) => exit_with_error("Unexpected end of input"),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
