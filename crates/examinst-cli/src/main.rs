//! examinst CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use examinst_core::Role;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "examinst",
    version,
    about = "Deterministic per-examinee exam instances"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Materialize the view of an examination for one or more subjects
    Instance {
        /// Examination id
        #[arg(long)]
        examination: String,

        /// Entrance token id
        #[arg(long)]
        token: String,

        /// Subject ids (comma-separated)
        #[arg(long)]
        subject: String,

        /// Caller role
        #[arg(long, value_enum, default_value_t = RoleArg::Examinee)]
        role: RoleArg,

        /// Examination directory (overrides config)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate examination TOML files
    Validate {
        /// Path to examination file or directory
        #[arg(long)]
        path: PathBuf,
    },

    /// Create starter config and a sample examination
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    /// Sees a redacted, per-subject instance
    #[value(alias = "student")]
    Examinee,
    /// Sees the canonical examination
    #[value(alias = "admin")]
    Privileged,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Examinee => Role::Examinee,
            RoleArg::Privileged => Role::Privileged,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Instance { config, .. } => config.clone(),
        _ => None,
    };
    let directive = match examinst_store::load_config_from(config_path.as_deref()) {
        Ok(config) => config.log_filter,
        Err(e) => {
            eprintln!("Warning: {e:#}, logging with examinst=info");
            "examinst=info".to_string()
        }
    };
    let filter = match directive.parse::<Directive>() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(e) => {
            eprintln!("Warning: ignoring log_filter '{directive}': {e}");
            EnvFilter::from_default_env()
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Instance {
            examination,
            token,
            subject,
            role,
            dir,
            config,
        } => {
            commands::instance::execute(examination, token, subject, role.into(), dir, config)
                .await
        }
        Commands::Validate { path } => commands::validate::execute(path),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
