//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use dekho_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for answers and plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Readable terminal text
    Text,
    /// The HTML fragment exactly as a page would receive it
    Html,
    /// JSON with the raw answer and the fragment
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for dekho-pakistan
#[derive(Parser, Debug)]
#[command(name = "dekho-pakistan")]
#[command(author, version, about = "Travel assistant client for Pakistan - ask, search hotels, plan tours")]
#[command(long_about = r#"
Dekho Pakistan talks to the travel assistant backend: ask the AI travel agent
a question, search hotels by city and rating, generate a tour plan within a
budget, and have the plan emailed to you as a PDF.

Without a subcommand, an interactive chat session is started.

Configuration files are loaded from (in priority order):
1. DEKHO_* environment variables (e.g. DEKHO_BACKEND__BASE_URL)
2. --config <path>     Explicit config file
3. ./dekho.toml        Project-level config
4. ~/.config/dekho-pakistan/config.toml   Global config

Example:
  dekho-pakistan ask "What should I pack for Fairy Meadows?"
  dekho-pakistan hotels --city Lahore --rating 4
  dekho-pakistan plan --people 2 --budget 150000 --days 5 -i hiking -i food
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Backend base URL (overrides config)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormatArg>,

    /// Escape answer text before applying markup
    #[arg(long, global = true)]
    pub escape_html: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands, one per action on the travel site
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the AI travel agent a question
    Ask {
        /// The question (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Search hotels by city and star rating
    Hotels {
        #[arg(long)]
        city: String,

        #[arg(long)]
        rating: String,
    },

    /// Generate a tour plan within a budget
    Plan {
        /// Number of people travelling
        #[arg(long)]
        people: String,

        /// Total budget in PKR
        #[arg(long)]
        budget: String,

        /// Trip length in days
        #[arg(long)]
        days: String,

        /// Area of interest (repeatable)
        #[arg(short, long = "interest", value_name = "INTEREST")]
        interests: Vec<String>,

        /// Email the generated plan to this address
        #[arg(long, value_name = "ADDRESS")]
        email: Option<String>,
    },

    /// Start interactive chat mode
    Chat,
}

impl Command {
    /// Joined question text for `ask`
    pub fn question_text(words: &[String]) -> String {
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask() {
        let cli = Cli::try_parse_from(["dekho-pakistan", "ask", "Is", "Swat", "safe?"]).unwrap();
        match cli.command {
            Some(Command::Ask { question }) => {
                assert_eq!(Command::question_text(&question), "Is Swat safe?");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plan_with_interests() {
        let cli = Cli::try_parse_from([
            "dekho-pakistan",
            "plan",
            "--people",
            "2",
            "--budget",
            "150000",
            "--days",
            "5",
            "-i",
            "hiking",
            "--interest",
            "food",
            "--email",
            "a@b.pk",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Plan {
                people: "2".to_string(),
                budget: "150000".to_string(),
                days: "5".to_string(),
                interests: vec!["hiking".to_string(), "food".to_string()],
                email: Some("a@b.pk".to_string()),
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dekho-pakistan",
            "hotels",
            "--city",
            "Quetta",
            "--rating",
            "3",
            "-o",
            "html",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormatArg::Html));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["dekho-pakistan", "--show-config"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.show_config);
    }

    #[test]
    fn test_output_format_mapping() {
        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputFormatArg::Text), OutputFormat::Text);
    }
}
