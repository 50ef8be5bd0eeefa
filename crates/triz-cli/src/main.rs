//! TRIZ CLI
//!
//! Command-line front end for:
//! - Browsing the 39 engineering parameters and 40 inventive principles
//! - Resolving a contradiction to suggested principles
//! - Browsing the contradiction matrix
//! - Analyzing a patent PDF through the remote service (or offline)
//! - Reading TRIZ reference data from the remote service

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use triz_client::ClientConfig;
use triz_core::{common_contradictions, PrincipleDraft, TrizEngine};

mod analyze;
mod matrix_view;

#[derive(Parser)]
#[command(name = "triz")]
#[command(author, version, about = "TRIZ contradiction resolution for patent analysis")]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Analysis API base URL (overrides TRIZ_API_BASE_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Engineering parameters
    Params {
        #[command(subcommand)]
        command: ParamCommands,
    },

    /// Inventive principles
    Principles {
        #[command(subcommand)]
        command: PrincipleCommands,
    },

    /// Suggest principles for an improving/worsening pair
    Suggest {
        improving: String,
        worsening: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the contradiction matrix
    Matrix {
        /// Only show one improving parameter's row
        #[arg(long)]
        improving: Option<String>,
    },

    /// List the common contradictions
    Common,

    /// Analyze a patent PDF and store the result
    Analyze(analyze::AnalyzeArgs),

    /// Read TRIZ reference data from the analysis API
    Remote {
        #[command(subcommand)]
        command: analyze::RemoteCommands,
    },
}

#[derive(Subcommand)]
enum ParamCommands {
    /// List built-in and custom parameters
    List,
    /// Add custom parameters, then list all
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Subcommand)]
enum PrincipleCommands {
    /// List principle ids and names
    List,
    /// Show one principle by id or name
    Show { principle: String },
    /// Add a custom principle and print it
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Example (repeatable)
        #[arg(long = "example")]
        examples: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "triz=debug" } else { "triz=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn client_config(api_url: Option<&str>) -> Result<ClientConfig> {
    let config = ClientConfig::from_env()?;
    match api_url {
        Some(url) => Ok(config.with_base_url(url)?),
        None => Ok(config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut engine = TrizEngine::new();

    match cli.command {
        Commands::Params { command } => match command {
            ParamCommands::List => print_parameters(&engine),
            ParamCommands::Add { names } => {
                for name in &names {
                    engine.add_parameter(name);
                }
                print_parameters(&engine);
            }
        },
        Commands::Principles { command } => match command {
            PrincipleCommands::List => {
                for p in engine.principles().list() {
                    println!("{:>3}  {}", p.id.to_string().cyan(), p.name);
                }
            }
            PrincipleCommands::Show { principle } => cmd_show_principle(&engine, &principle)?,
            PrincipleCommands::Add {
                name,
                description,
                examples,
            } => {
                let added = engine
                    .add_principle(PrincipleDraft::new(name, description).with_examples(examples))?;
                eprintln!("{} principle {}", "ok".green().bold(), added.id);
                println!("{}", serde_json::to_string_pretty(&added)?);
            }
        },
        Commands::Suggest {
            improving,
            worsening,
            json,
        } => cmd_suggest(&engine, &improving, &worsening, json)?,
        Commands::Matrix { improving } => {
            print!("{}", matrix_view::render(&engine, improving.as_deref()));
        }
        Commands::Common => {
            for (i, c) in common_contradictions().iter().enumerate() {
                println!("{:>2}. {}", i + 1, c);
            }
        }
        Commands::Analyze(args) => {
            let config = client_config(cli.api_url.as_deref())?;
            analyze::cmd_analyze(args, config, &mut engine)?;
        }
        Commands::Remote { command } => {
            let config = client_config(cli.api_url.as_deref())?;
            analyze::cmd_remote(command, config, &mut engine)?;
        }
    }

    Ok(())
}

fn print_parameters(engine: &TrizEngine) {
    let registry = engine.parameters();
    for (i, name) in registry.list_all().iter().enumerate() {
        if registry.is_builtin(name) {
            println!("{:>3}  {}", i + 1, name);
        } else {
            println!("{:>3}  {} {}", i + 1, name, "(custom)".yellow());
        }
    }
}

fn cmd_show_principle(engine: &TrizEngine, query: &str) -> Result<()> {
    let catalog = engine.principles();
    let principle = match query.trim().parse::<u32>() {
        Ok(id) => catalog.get_by_id(id),
        Err(_) => catalog.get_by_name(query),
    }
    .ok_or_else(|| anyhow!("no principle matches '{query}'"))?;

    println!("{} {}", format!("#{}", principle.id).cyan().bold(), principle.name.bold());
    if !principle.description.is_empty() {
        println!("{}", principle.description);
    }
    for example in &principle.examples {
        println!("  - {example}");
    }
    Ok(())
}

fn cmd_suggest(engine: &TrizEngine, improving: &str, worsening: &str, json: bool) -> Result<()> {
    let suggested = engine.suggest_principles(improving, worsening);
    let from_matrix = engine.is_in_matrix(improving.trim(), worsening.trim());

    if json {
        let out = serde_json::json!({
            "improving_parameter": improving.trim(),
            "worsening_parameter": worsening.trim(),
            "from_matrix": from_matrix,
            "suggested_principles": suggested,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if !from_matrix {
        eprintln!(
            "{} no matrix cell for this pair; showing default principles",
            "info:".yellow().bold()
        );
    }
    for name in suggested {
        match engine.principles().id_of(&name) {
            Some(id) => println!("{:>3}  {}", id.to_string().cyan(), name),
            None => println!("     {name}"),
        }
    }
    Ok(())
}
