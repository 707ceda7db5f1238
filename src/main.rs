// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flink_jobs::config::Config;
use flink_jobs::kubernetes::create_client;
use flink_jobs::{list_flink_jobs, patch_flink_session_job_state, update_flink_session_job};

#[derive(Parser, Debug)]
#[command(name = "flink-jobs", version, about = "List and control Flink session jobs")]
struct Cli {
    /// Namespace of the FlinkSessionJob resources, overrides FLINK_NAMESPACE
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print all session jobs as JSON
    List,
    /// Set the desired state of a session job
    SetState {
        name: String,
        state: String,
        /// Send a merge patch instead of replacing the whole resource
        #[arg(long)]
        merge: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(namespace) = cli.namespace {
        config.namespace = namespace;
    }
    debug!("Configuration loaded: namespace={}", config.namespace);

    let client = create_client(&config).await?;

    match cli.cmd {
        Commands::List => {
            let jobs = list_flink_jobs(&client, &config.namespace).await?;
            println!("{}", serde_json::to_string_pretty(&jobs)?);
        }
        Commands::SetState { name, state, merge } => {
            if merge {
                patch_flink_session_job_state(&client, &config.namespace, &name, &state).await?;
            } else {
                update_flink_session_job(&client, &config.namespace, &name, &state).await?;
            }
        }
    }

    Ok(())
}
