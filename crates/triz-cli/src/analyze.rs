//! Commands that talk to the analysis API (or stand in for it offline).

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use triz_client::{adapter, run_analysis, AnalysisBackend, ClientConfig, OfflineBackend, TrizApiClient, UploadFile, UploadPolicy};
use triz_core::TrizEngine;
use triz_storage::{AnalysisStore, StoreConfig};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Patent PDF (at most 100 MiB)
    pub pdf: PathBuf,

    /// Patent id to file the analysis under (defaults to the reported
    /// patent number, then the file name)
    #[arg(long)]
    pub patent_id: Option<String>,

    /// Build the analysis locally instead of calling the API
    #[arg(long)]
    pub offline: bool,

    /// Approve the analysis right after storing it
    #[arg(long)]
    pub approve: bool,
}

#[derive(Subcommand)]
pub enum RemoteCommands {
    /// Check that the API is reachable
    Health,
    /// List principles known to the API
    Principles,
    /// List parameters known to the API
    Parameters,
    /// Look up one matrix cell by parameter names
    MatrixCell { improving: String, worsening: String },
    /// Load the API's matrix into the engine, then suggest principles
    Suggest { improving: String, worsening: String },
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow!("failed to initialize tokio runtime: {e}"))
}

/// Cancel `token` on Ctrl-C.
fn cancel_on_interrupt(token: &CancellationToken) {
    let token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling analysis");
            token.cancel();
        }
    });
}

pub fn cmd_analyze(args: AnalyzeArgs, config: ClientConfig, engine: &mut TrizEngine) -> Result<()> {
    let rt = runtime()?;
    rt.block_on(async move {
        let policy = UploadPolicy::default();
        let file = UploadFile::load(&args.pdf, &policy).await?;

        let backend: Box<dyn AnalysisBackend> = if args.offline {
            Box::new(OfflineBackend)
        } else {
            Box::new(TrizApiClient::new(config)?.with_policy(policy))
        };

        let store = AnalysisStore::new(StoreConfig::default());
        let cancel = CancellationToken::new();
        cancel_on_interrupt(&cancel);

        eprintln!(
            "{} {} ({})",
            "Analyzing".green().bold(),
            args.pdf.display(),
            backend.name()
        );
        let mut analysis = run_analysis(
            backend.as_ref(),
            &file,
            args.patent_id.as_deref(),
            engine,
            &store,
            &cancel,
        )
        .await?;

        if args.approve {
            analysis = store.approve(&analysis.id)?;
            eprintln!("{} analysis {}", "approved".green().bold(), analysis.id);
        }

        println!("{}", serde_json::to_string_pretty(&analysis)?);

        let recent = store.recently_approved();
        if !recent.is_empty() {
            eprintln!("{}", "Recently approved:".bold());
            for a in recent {
                eprintln!(
                    "  {}  {}  {}",
                    a.patent_id.cyan(),
                    a.title.as_deref().unwrap_or("-"),
                    a.principles.unwrap_or_default().join(", ")
                );
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}

pub fn cmd_remote(command: RemoteCommands, config: ClientConfig, engine: &mut TrizEngine) -> Result<()> {
    let rt = runtime()?;
    rt.block_on(async move {
        let client = TrizApiClient::new(config)?;
        match command {
            RemoteCommands::Health => {
                let status = client.health().await?;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            RemoteCommands::Principles => {
                for p in client.principles().await? {
                    println!("{:>3}  {}", p.number.to_string().cyan(), p.name);
                }
            }
            RemoteCommands::Parameters => {
                for p in client.parameters().await? {
                    println!("{:>3}  {}", p.number.to_string().cyan(), p.name);
                }
            }
            RemoteCommands::MatrixCell {
                improving,
                worsening,
            } => {
                let parameters = client.parameters().await?;
                let number = |name: &str| {
                    adapter::parameter_number(&parameters, name)
                        .ok_or_else(|| anyhow!("the API has no parameter named '{name}'"))
                };
                let cell = client
                    .matrix_principles(number(&improving)?, number(&worsening)?)
                    .await?;
                println!(
                    "{} vs {}",
                    cell.improving_parameter.name.bold(),
                    cell.worsening_parameter.name.bold()
                );
                for p in cell.principles {
                    println!("{:>3}  {}", p.number.to_string().cyan(), p.name);
                }
            }
            RemoteCommands::Suggest {
                improving,
                worsening,
            } => {
                let principles = client.principles().await?;
                let cells = client.matrix().await?;
                let loaded = adapter::sync_matrix(engine, &principles, &cells);
                eprintln!("{} {} matrix cells", "loaded".green().bold(), loaded);
                for name in engine.suggest_principles(&improving, &worsening) {
                    println!("{name}");
                }
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}
