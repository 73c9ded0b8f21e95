pub mod commands;

use crate::hash::{Scheme, Size};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum SchemeArg {
    Interactive,
    Deep,
}

impl From<SchemeArg> for Scheme {
    fn from(value: SchemeArg) -> Self {
        match value {
            SchemeArg::Interactive => Scheme::Interactive,
            SchemeArg::Deep => Scheme::Deep,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum SizeArg {
    Short,
    Small,
    Medium,
    Big,
    Long,
    Huge,
    Full,
}

impl From<SizeArg> for Size {
    fn from(value: SizeArg) -> Self {
        match value {
            SizeArg::Short => Size::Short,
            SizeArg::Small => Size::Small,
            SizeArg::Medium => Size::Medium,
            SizeArg::Big => Size::Big,
            SizeArg::Long => Size::Long,
            SizeArg::Huge => Size::Huge,
            SizeArg::Full => Size::Full,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "hashgen",
    version,
    about = "Launch Hash_generator.py from its virtual environment, or derive hashes natively",
    long_about = None
)]
pub struct Cli {
    /// Launcher directory (default: the directory containing this executable)
    #[arg(long, global = true, env = "HASHGEN_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Do not wait for Enter after a failed check
    #[arg(long, global = true)]
    pub no_pause: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the venv and script, then run the script (default)
    Launch,

    /// Derive a hash without Python
    Generate {
        /// Base password/passphrase (prompted when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Hashing scheme (prompted when omitted)
        #[arg(short, long, value_enum)]
        encryption: Option<SchemeArg>,

        /// Output size category (prompted when omitted)
        #[arg(short, long, value_enum)]
        size: Option<SizeArg>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the launcher directory layout
    Doctor,
}

/// Run the parsed command and return the process exit code.
pub async fn run(cli: Cli) -> crate::core::error::Result<i32> {
    let ctx = commands::Context::load(cli.root.as_deref(), cli.no_pause).await?;

    match cli.command.unwrap_or(Commands::Launch) {
        Commands::Launch => commands::launch::execute(&ctx).await,

        Commands::Generate {
            input,
            encryption,
            size,
            json,
        } => {
            commands::generate::execute(
                &ctx,
                input,
                encryption.map(Into::into),
                size.map(Into::into),
                json,
            )
            .await
        }

        Commands::Doctor => commands::doctor::execute(&ctx).await,
    }
}
