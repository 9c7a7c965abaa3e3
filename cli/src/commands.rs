pub mod browse;
pub mod fetch;
pub mod list;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use domlens_common::model::filter::{DigitPolicy, ExtensionClass, FilterConfig};
use domlens_core::source::SemanticExpander;

#[derive(Parser)]
#[command(name = "domlens")]
#[command(about = "Explore, filter and hand-pick domain names from large candidate lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress decorative output (repeat for more silence)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Skip the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Results shown per page
    #[arg(long, default_value_t = domlens_common::config::DEFAULT_PER_PAGE, global = true)]
    pub per_page: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explore a domain list interactively
    #[command(alias = "b")]
    Browse {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Print a single filtered page
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
        /// Page to display
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Aggregate statistics over the filtered list
    #[command(alias = "s")]
    Stats {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        filters: FilterArgs,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Args)]
pub struct SourceArgs {
    /// URL serving one candidate domain per line
    /// (falls back to DOMLENS_SOURCE_URL)
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Local file with one candidate domain per line
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    /// Minimum name length (extension excluded)
    #[arg(long)]
    pub min: Option<usize>,

    /// Maximum name length (extension excluded)
    #[arg(long)]
    pub max: Option<usize>,

    /// Extension class to keep
    #[arg(long, value_enum)]
    pub ext: Option<ExtArg>,

    /// Digit policy
    #[arg(long, value_enum)]
    pub digits: Option<DigitArg>,

    /// Keep only domains starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Keep only domains starting with this character
    #[arg(long)]
    pub first: Option<char>,

    /// Keep only domains containing this text
    #[arg(long)]
    pub find: Option<String>,

    /// Expand a concept into keywords and keep domains matching any
    #[arg(long)]
    pub ai: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExtArg {
    Any,
    ComBr,
    Other,
}

impl From<ExtArg> for ExtensionClass {
    fn from(arg: ExtArg) -> Self {
        match arg {
            ExtArg::Any => ExtensionClass::Any,
            ExtArg::ComBr => ExtensionClass::ComBr,
            ExtArg::Other => ExtensionClass::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DigitArg {
    Any,
    With,
    Without,
}

impl From<DigitArg> for DigitPolicy {
    fn from(arg: DigitArg) -> Self {
        match arg {
            DigitArg::Any => DigitPolicy::Any,
            DigitArg::With => DigitPolicy::Required,
            DigitArg::Without => DigitPolicy::Rejected,
        }
    }
}

impl FilterArgs {
    /// Builds the initial filter snapshot, expanding `--ai` through the
    /// given collaborator when set.
    pub async fn into_config<E: SemanticExpander>(self, expander: &E) -> FilterConfig {
        let mut cfg = FilterConfig::default();

        if let Some(min) = self.min {
            cfg.min_length = min;
        }
        if let Some(max) = self.max {
            cfg.max_length = max;
        }
        if let Some(ext) = self.ext {
            cfg.extension = ext.into();
        }
        if let Some(digits) = self.digits {
            cfg.digits = digits.into();
        }
        if let Some(prefix) = self.prefix {
            cfg.prefix = prefix.to_lowercase();
        }
        if let Some(first) = self.first {
            cfg.first_letter = first.to_lowercase().to_string();
        }
        if let Some(text) = self.find {
            cfg.free_text = text.to_lowercase();
        }
        if let Some(query) = self.ai {
            cfg.keywords = expander.expand(&query).await;
        }

        cfg
    }
}
