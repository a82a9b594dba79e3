//! Console output for travel assistant results

use super::terminal::fragment_to_terminal;
use colored::Colorize;
use dekho_application::{AnswerOutput, EmailOutput, HotelsOutput, PlanOutput};
use dekho_domain::OutputFormat;
use serde::Serialize;

/// Formats use case results for the terminal in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    format: OutputFormat,
}

impl ConsoleFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a travel-agent answer
    pub fn answer(&self, output: &AnswerOutput) -> String {
        match self.format {
            OutputFormat::Html => output.fragment.to_string(),
            OutputFormat::Json => to_json(output),
            OutputFormat::Text => {
                let mut text = String::new();
                text.push_str(&format!("{} {}\n\n", "Q:".cyan().bold(), output.question));
                text.push_str(&fragment_to_terminal(output.fragment.as_str()));
                text
            }
        }
    }

    /// Format hotel search results
    pub fn hotels(&self, output: &HotelsOutput) -> String {
        match self.format {
            OutputFormat::Html => format!("{}\n{}", output.cards, output.reviews),
            OutputFormat::Json => to_json(output),
            OutputFormat::Text => {
                let mut text = Self::section_header(&format!(
                    "Hotels in {} ({} stars)",
                    output.query.city, output.query.ratings
                ));
                if output.hotels.is_empty() {
                    text.push_str(&format!("\n{}\n", "No hotels found.".dimmed()));
                    return text;
                }
                for hotel in &output.hotels {
                    text.push_str(&format!("\n{}\n", hotel.name.yellow().bold()));
                    if !hotel.img.is_empty() {
                        text.push_str(&format!("  {}\n", hotel.img.dimmed()));
                    }
                    if !hotel.review.is_empty() {
                        text.push_str(&Self::indent(&hotel.review, "  "));
                        text.push('\n');
                    }
                }
                text
            }
        }
    }

    /// Format a generated tour plan
    pub fn plan(&self, output: &PlanOutput) -> String {
        match self.format {
            OutputFormat::Html => output.page.clone(),
            OutputFormat::Json => to_json(output),
            OutputFormat::Text => {
                let request = &output.request;
                let mut text = Self::section_header(&format!(
                    "Tour plan: {} days, {} people, {} PKR",
                    request.days, request.people, request.budget
                ));
                text.push_str(&format!(
                    "{} {}\n\n",
                    "Interests:".cyan().bold(),
                    request.interests_label()
                ));
                text.push_str(&fragment_to_terminal(output.fragment.as_str()));
                text.push('\n');
                text
            }
        }
    }

    /// Format the email confirmation
    pub fn email(&self, output: &EmailOutput) -> String {
        match self.format {
            OutputFormat::Json => to_json(output),
            OutputFormat::Html | OutputFormat::Text => {
                format!("{} {}", "Email:".green().bold(), output.message)
            }
        }
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
