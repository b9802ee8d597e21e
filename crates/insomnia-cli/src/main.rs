//! CLI frontend for Insomnia character sheets and dice rolls.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "insomnia",
    about = "Insomnia — character sheets and dice pools for the sleepless",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character sheet file with blank defaults
    Init {
        /// Character name
        name: String,

        /// Sheet file to create
        #[arg(short, long, default_value = "sheet.json")]
        file: PathBuf,
    },

    /// Print the character sheet
    Show {
        /// Sheet file to read
        #[arg(short, long, default_value = "sheet.json")]
        file: PathBuf,
    },

    /// Roll the character's dice pools
    Roll {
        /// Sheet file to read
        #[arg(short, long, default_value = "sheet.json")]
        file: PathBuf,

        /// Madness dice added for this roll
        #[arg(short, long, default_value = "0")]
        madness: u32,

        /// Exhaustion dice added for this roll
        #[arg(short, long, default_value = "0")]
        exhaustion: u32,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Write post-roll attribute rises back to the sheet file
        #[arg(long)]
        save: bool,
    },

    /// Answer the character questionnaire interactively
    Awake {
        /// Sheet file to update (created if missing)
        #[arg(short, long, default_value = "sheet.json")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name, file } => commands::init::run(&name, &file),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Roll {
            file,
            madness,
            exhaustion,
            seed,
            save,
        } => commands::roll::run(&file, madness, exhaustion, seed, save),
        Commands::Awake { file } => commands::awake::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
