mod cmd;
mod doc;
mod output;

use clap::{Parser, Subcommand};
use cmd::edit::SetFields;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "trunkline",
    about = "Outbound-route instruction builder — compose, preview, and serialize dialplan programs",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new route document
    Init {
        file: PathBuf,

        /// Number pattern this route matches
        #[arg(long)]
        phone_number: String,

        /// Dialplan context the route lives in
        #[arg(long)]
        context: String,

        #[arg(long, default_value = "")]
        alias: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Show the route and its instruction list
    Show {
        file: PathBuf,

        /// Reference data file (trunks and DIDs) used to decorate output
        #[arg(long = "ref", env = "TRUNKLINE_REF")]
        reference: Option<PathBuf>,
    },

    /// List the available action templates
    Templates,

    /// Insert an instruction from a template
    Add {
        file: PathBuf,

        /// dial | custom
        application_type: String,

        /// 1-based position (appends if omitted)
        #[arg(long)]
        at: Option<usize>,
    },

    /// Update an instruction's settings
    Set {
        file: PathBuf,

        /// 1-based position of the instruction to update
        #[arg(long)]
        at: usize,

        #[command(flatten)]
        fields: SetFields,

        /// Reference data file; unknown caller IDs get a warning
        #[arg(long = "ref", env = "TRUNKLINE_REF")]
        reference: Option<PathBuf>,
    },

    /// Move an instruction to a new position (1-based)
    Move {
        file: PathBuf,
        from: usize,
        to: usize,
    },

    /// Remove an instruction
    Remove {
        file: PathBuf,

        /// 1-based position of the instruction to remove
        #[arg(long)]
        at: usize,
    },

    /// Emit the save payload (applications + voiceExtensions)
    Payload { file: PathBuf },

    /// Print the dialplan preview
    Preview { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Init {
            file,
            phone_number,
            context,
            alias,
            description,
        } => cmd::init::run(&file, &phone_number, &context, &alias, &description, cli.json),
        Commands::Show { file, reference } => {
            cmd::show::run(&file, reference.as_deref(), cli.json)
        }
        Commands::Templates => cmd::templates::run(cli.json),
        Commands::Add {
            file,
            application_type,
            at,
        } => cmd::edit::add(&file, &application_type, at, cli.json),
        Commands::Set {
            file,
            at,
            fields,
            reference,
        } => cmd::edit::set(&file, at, &fields, reference.as_deref(), cli.json),
        Commands::Move { file, from, to } => cmd::edit::move_to(&file, from, to, cli.json),
        Commands::Remove { file, at } => cmd::edit::remove(&file, at, cli.json),
        Commands::Payload { file } => cmd::payload::run(&file),
        Commands::Preview { file } => cmd::preview::run(&file, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
