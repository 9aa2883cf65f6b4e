//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::cloudformation::CfnStackApi;
use crate::infra::overrides::YamlOverrideStore;
use crate::infra::template::FileTemplateSource;
use crate::output::OutputContext;

/// CloudFormation stack deployment for applications
#[derive(Parser)]
#[command(
    name = "liftoff",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a stack if it does not exist yet
    Create(commands::create::CreateArgs),

    /// Show a stack's status and outputs
    Status(commands::status::StatusArgs),

    /// Show version
    Version {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { quiet, no_color, command } = self;
        match command {
            Command::Version { json } => {
                commands::version::run(json);
                Ok(())
            }
            Command::Status(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                let api = CfnStackApi::connect().await;
                commands::status::run(&args, &api, &ctx).await
            }
            Command::Create(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                let config = args.stack_config();
                let api = CfnStackApi::connect().await;
                let store = YamlOverrideStore::new()?;
                let templates = FileTemplateSource::new(&config.app_name)?;
                let created =
                    commands::create::run(&config, &api, &store, &templates, &ctx).await?;
                if !created {
                    std::process::exit(1);
                }
                Ok(())
            }
        }
    }
}
