//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::licence::BatchMode;

/// Top-level CLI parser for `dlnum`.
#[derive(Debug, Parser)]
#[command(
    name = "dlnum",
    version,
    about = "Generate and validate fictional UK driving-licence style numbers"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a person's details into an identifier.
    Encode {
        /// First name; its initial is encoded.
        #[arg(long)]
        first: String,
        /// Surname.
        #[arg(long)]
        last: String,
        /// Gender: F offsets the month by 50, anything else leaves it.
        #[arg(long)]
        gender: String,
        /// Date of birth, e.g. 1990-05-05 or 05/05/1990.
        #[arg(long)]
        dob: String,
        /// Fail instead of substituting a random date when --dob does not parse.
        #[arg(long)]
        strict: bool,
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check candidate identifiers against the format.
    Validate {
        /// Identifiers to check.
        #[arg(required = true)]
        candidates: Vec<String>,
        /// Say why each rejected candidate failed.
        #[arg(long)]
        explain: bool,
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate one identifier with every field random.
    Random {
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate many identifiers (clamped to 1-500).
    Batch {
        /// How many to generate; defaults to DLNUM_BATCH_COUNT or 50.
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
        /// How each identifier is produced.
        #[arg(long, value_enum, default_value_t = ModeArg::Random)]
        mode: ModeArg,
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a random person suitable for `encode`.
    Person {
        /// Print JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Command-line spelling of [`BatchMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Every field random.
    Random,
    /// Random people run through the encoder.
    Encoded,
}

impl From<ModeArg> for BatchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Random => Self::Random,
            ModeArg::Encoded => Self::Encoded,
        }
    }
}
