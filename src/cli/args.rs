//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `render`: Render a `<script>` block from a directive expression
//! - `export`: Print effective translations as JSON
//! - `init`: Initialize lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::KeyLayout;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root used to find the config file and lang directory
    #[arg(long, env = "LINGO_ROOT")]
    pub root: Option<PathBuf>,

    /// Lang directory (overrides config file and conventional locations)
    #[arg(long)]
    pub lang_dir: Option<PathBuf>,

    /// Fallback locale (overrides config file)
    #[arg(long)]
    pub fallback_locale: Option<String>,

    /// How resource files are folded into one mapping (overrides config file)
    #[arg(long, value_enum)]
    pub layout: Option<KeyLayout>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Directive expression, e.g. "('translations', 'messages, validation')"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Render only this locale instead of a switch over every locale
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Export only this locale (default: every locale, keyed by locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Resource names to include.
    /// Can be repeated or comma separated: --include messages,validation
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a <script> block exposing translations to client-side code
    Render(RenderCommand),
    /// Print effective translations as JSON
    Export(ExportCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
