//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use pawnkyc::config::KycConfig;
use pawnkyc::core::models::FormData;
use pawnkyc::output::OutputMode;

/// pawnkyc - Identity verification for collateral-backed loans
#[derive(Parser, Debug)]
#[command(
    name = "pawnkyc",
    version,
    about = "Identity verification for collateral-backed loans",
    long_about = "Compare what a customer entered against their identity document.\n\n\
                  Documents are read through the configured extraction backend, \
                  scored field by field, and turned into an auditable decision."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/pawnkyc/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Identity fields entered by the customer
#[derive(clap::Args, Debug, Clone)]
pub struct FormArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<String>,

    /// Document number
    #[arg(long)]
    pub doc_number: Option<String>,

    /// National register number
    #[arg(long)]
    pub national_number: Option<String>,
}

impl From<FormArgs> for FormData {
    fn from(args: FormArgs) -> Self {
        Self {
            full_name: args.name,
            dob: args.dob,
            document_number: args.doc_number,
            national_number: args.national_number,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse MRZ text from a file
    ParseMrz {
        /// Text file containing the MRZ lines
        file: PathBuf,
    },

    /// Evaluate a document against form data without saving
    Evaluate {
        #[command(flatten)]
        form: FormArgs,

        /// Document to extract from
        #[arg(long)]
        document: PathBuf,

        /// Automatic attempt number to record
        #[arg(long, default_value_t = 1)]
        attempts: u32,
    },

    /// Verify a subject and save the record
    Verify {
        /// Subject id
        #[arg(long)]
        subject: String,

        #[command(flatten)]
        form: FormArgs,

        /// Document to extract from
        #[arg(long)]
        document: PathBuf,
    },

    /// Request a manual review of the subject's latest decision
    Override {
        /// Subject id
        #[arg(long)]
        subject: String,
    },

    /// Show a subject's KYC record
    Status {
        /// Subject id
        #[arg(long)]
        subject: String,
    },

    /// Set a record's status (administrators)
    Review {
        /// Administrator id
        #[arg(long)]
        admin: String,

        /// Subject id
        #[arg(long)]
        subject: String,

        /// New status: pending, verified, rejected
        #[arg(long)]
        status: String,
    },

    /// Monthly payment for a loan
    Quote {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Term in months
        #[arg(long)]
        months: u32,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = KycConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Command::ParseMrz { file }) => commands::parse_mrz(&file, output_mode),
        Some(Command::Evaluate {
            form,
            document,
            attempts,
        }) => commands::evaluate(&config, &form.into(), &document, attempts, output_mode),
        Some(Command::Verify {
            subject,
            form,
            document,
        }) => commands::verify(&config, &subject, &form.into(), &document, output_mode),
        Some(Command::Override { subject }) => {
            commands::request_review(&config, &subject, output_mode)
        },
        Some(Command::Status { subject }) => commands::status(&config, &subject, output_mode),
        Some(Command::Review {
            admin,
            subject,
            status,
        }) => commands::review(&config, &admin, &subject, &status, output_mode),
        Some(Command::Quote {
            principal,
            rate,
            months,
        }) => commands::quote(principal, rate, months, output_mode),
        Some(Command::Config) => commands::show_config(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("pawnkyc v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("pawnkyc v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'pawnkyc --help' for usage");
            }
            Ok(())
        },
    }
}
