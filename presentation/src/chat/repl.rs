//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::{ConsoleFormatter, SpinnerProgress};
use dekho_application::{
    AskQuestionUseCase, BehaviorConfig, GeneratePlanInput, GeneratePlanUseCase, NoProgress,
    RequestProgress, SearchHotelsUseCase, SendPlanEmailUseCase, TravelGateway,
};
use dekho_domain::{DomainError, FormattedFragment};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

const HOTELS_USAGE: &str = "Usage: /hotels <city> <rating>";
const PLAN_USAGE: &str = "Usage: /plan <people> <budget> <days> <interest>[,<interest>...]";
const EMAIL_USAGE: &str = "Usage: /email <address>";

/// One line of REPL input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    Hotels {
        city: String,
        rating: String,
    },
    Plan {
        people: String,
        budget: String,
        days: String,
        interests: Vec<String>,
    },
    Email(String),
    Help,
    Quit,
    Unknown(String),
    Usage(&'static str),
}

impl ReplCommand {
    /// Parse a trimmed, non-empty input line
    ///
    /// `/hotels` takes the last word as the rating so cities may contain
    /// spaces. `/plan` interests are comma-separated.
    pub fn parse(line: &str) -> Self {
        if !line.starts_with('/') {
            return ReplCommand::Ask(line.to_string());
        }

        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let args: Vec<&str> = rest.split_whitespace().collect();

        match cmd {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/hotels" => match args.split_last() {
                Some((rating, city)) if !city.is_empty() => ReplCommand::Hotels {
                    city: city.join(" "),
                    rating: rating.to_string(),
                },
                _ => ReplCommand::Usage(HOTELS_USAGE),
            },
            "/plan" => {
                if args.len() < 3 {
                    return ReplCommand::Usage(PLAN_USAGE);
                }
                let interests = args[3..]
                    .join(" ")
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
                ReplCommand::Plan {
                    people: args[0].to_string(),
                    budget: args[1].to_string(),
                    days: args[2].to_string(),
                    interests,
                }
            }
            "/email" => match args.as_slice() {
                [address] => ReplCommand::Email(address.to_string()),
                _ => ReplCommand::Usage(EMAIL_USAGE),
            },
            _ => ReplCommand::Unknown(cmd.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl<G: TravelGateway + 'static> {
    ask: AskQuestionUseCase<G>,
    hotels: SearchHotelsUseCase<G>,
    plan: GeneratePlanUseCase<G>,
    email: SendPlanEmailUseCase<G>,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    /// Plan body from the most recent successful `/plan`
    last_plan: Option<FormattedFragment>,
}

impl<G: TravelGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<G>, behavior: BehaviorConfig) -> Self {
        Self {
            ask: AskQuestionUseCase::new(gateway.clone()).with_config(behavior),
            hotels: SearchHotelsUseCase::new(gateway.clone()).with_config(behavior),
            plan: GeneratePlanUseCase::new(gateway.clone()).with_config(behavior),
            email: SendPlanEmailUseCase::new(gateway),
            formatter: ConsoleFormatter::default(),
            config: ReplConfig::default(),
            last_plan: None,
        }
    }

    pub fn with_formatter(mut self, formatter: ConsoleFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("dekho".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if !self.dispatch(ReplCommand::parse(line)).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Dekho Pakistan - Travel Agent        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask anything about travelling in Pakistan.");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /hotels <city> <rating>                  - Search hotels");
        println!("  /plan <people> <budget> <days> <a,b,..>  - Generate a tour plan");
        println!("  /email <address>                         - Email the last plan");
        println!("  /help, /h, /?                            - Show this help");
        println!("  /quit, /exit, /q                         - Exit chat");
        println!();
    }

    fn progress(&self) -> Box<dyn RequestProgress> {
        if self.config.show_progress {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(NoProgress)
        }
    }

    /// The plan `/email` would send
    fn plan_to_email(&self) -> Result<&FormattedFragment, DomainError> {
        self.last_plan.as_ref().ok_or(DomainError::NoPlan)
    }

    /// Handle one command. Returns false when the session should end.
    async fn dispatch(&mut self, command: ReplCommand) -> bool {
        let progress = self.progress();

        let result: Result<String, String> = match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return false;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
                return true;
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                return true;
            }
            ReplCommand::Usage(usage) => {
                println!("{}", usage);
                return true;
            }
            ReplCommand::Ask(question) => self
                .ask
                .execute_with_progress(&question, progress.as_ref())
                .await
                .map(|output| self.formatter.answer(&output))
                .map_err(|e| e.to_string()),
            ReplCommand::Hotels { city, rating } => self
                .hotels
                .execute_with_progress(&city, &rating, progress.as_ref())
                .await
                .map(|output| self.formatter.hotels(&output))
                .map_err(|e| e.to_string()),
            ReplCommand::Plan {
                people,
                budget,
                days,
                interests,
            } => {
                let input = GeneratePlanInput::new(people, budget, days).with_interests(interests);
                match self.plan.execute_with_progress(input, progress.as_ref()).await {
                    Ok(output) => {
                        self.last_plan = Some(output.fragment.clone());
                        Ok(format!(
                            "{}\nType /email <address> to receive this plan as a PDF.",
                            self.formatter.plan(&output)
                        ))
                    }
                    Err(e) => Err(e.to_string()),
                }
            }
            ReplCommand::Email(address) => match self.plan_to_email() {
                Err(e) => Err(e.to_string()),
                Ok(plan) => self
                    .email
                    .execute_with_progress(&address, plan, progress.as_ref())
                    .await
                    .map(|output| self.formatter.email(&output))
                    .map_err(|e| e.to_string()),
            },
        };

        println!();
        match result {
            Ok(text) => println!("{}", text),
            Err(message) => {
                warn!("{}", message);
                eprintln!("Error: {}", message);
            }
        }
        println!();
        true
    }
}
