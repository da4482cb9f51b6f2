use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokenest_core::{EstimationSettings, FallbackPolicy};

#[derive(Parser)]
#[command(name = "tokenest")]
#[command(version)]
#[command(about = "Estimate LLM token counts without a tokenizer")]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (auto-discovers tokenest.toml if omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Average characters per token for words without a language rule
    #[arg(long, global = true)]
    pub chars_per_token: Option<f64>,

    /// Estimation for unrecognised segments: chars-per-token or code-points
    #[arg(long, global = true)]
    pub fallback: Option<FallbackPolicy>,

    /// Read text from a file instead of stdin
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given as flags, to be layered over the config file
    pub fn flag_settings(&self) -> EstimationSettings {
        let overlap = match self.command {
            Commands::Split { overlap, .. } => overlap,
            _ => None,
        };
        EstimationSettings {
            default_chars_per_token: self.chars_per_token,
            language_configs: None,
            fallback: self.fallback,
            overlap,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the estimated token count
    Count,

    /// Check the text against a token limit (exit status 1 when over)
    Check {
        #[arg(short, long)]
        limit: usize,
    },

    /// Print the text between two token positions
    Slice {
        /// First token position; negative counts from the end
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        /// Position after the last token; negative counts from the end
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,
    },

    /// Split the text into chunks, printed as a JSON array
    Split {
        /// Token budget per chunk
        #[arg(short, long)]
        tokens: usize,

        /// Tokens of context repeated at the start of each chunk
        #[arg(long)]
        overlap: Option<usize>,
    },

    /// Print each segment with its class and estimate as JSON lines
    Explain,

    /// Print version information
    Version,
}
