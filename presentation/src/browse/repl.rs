//! REPL (Read-Eval-Print Loop) for browsing questions

use super::command::BrowseCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use qfinder_application::SearchQuestionsUseCase;
use qfinder_domain::{FilterCriteria, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::{debug, warn};

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep going
    Continue(String),
    Exit,
}

/// Interactive browse REPL
///
/// Holds the current criteria; the question bank behind the use case is
/// never modified.
pub struct BrowseRepl {
    use_case: SearchQuestionsUseCase,
    criteria: FilterCriteria,
    format: OutputFormat,
    config: ReplConfig,
}

impl BrowseRepl {
    pub fn new(use_case: SearchQuestionsUseCase, config: ReplConfig) -> Self {
        Self {
            use_case,
            criteria: FilterCriteria::new(),
            format: OutputFormat::Full,
            config,
        }
    }

    /// Set the output format used after every change
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Start from these criteria instead of no filters
    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if rl.load_history(path).is_err() {
                debug!("No history loaded from {}", path.display());
            }
        }

        self.print_welcome();
        println!("{}", self.render());

        loop {
            match rl.readline("find> ") {
                Ok(line) => {
                    let Some(command) = BrowseCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    match self.handle(command) {
                        Outcome::Continue(text) => println!("{}", text),
                        Outcome::Exit => {
                            println!("Bye!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Apply one command to the current criteria
    pub fn handle(&mut self, command: BrowseCommand) -> Outcome {
        match command {
            BrowseCommand::Quit => return Outcome::Exit,
            BrowseCommand::Help => return Outcome::Continue(Self::help_text()),
            BrowseCommand::Facets => {
                return Outcome::Continue(ConsoleFormatter::format_facets(
                    self.use_case.facet_index(),
                ));
            }
            BrowseCommand::Filters => {
                return Outcome::Continue(ConsoleFormatter::format_criteria(&self.criteria));
            }
            BrowseCommand::Usage(usage) => {
                return Outcome::Continue(format!("Usage: {}", usage));
            }
            BrowseCommand::Unknown(cmd) => {
                return Outcome::Continue(format!(
                    "Unknown command: {}\nType /help for available commands",
                    cmd
                ));
            }
            BrowseCommand::Select(field, selection) => {
                self.criteria.set_selection(field, selection);
            }
            BrowseCommand::Query(query) => self.criteria.set_query(query),
            BrowseCommand::ClearQuery => self.criteria.set_query(""),
            BrowseCommand::Tag(tag) => self.criteria.apply_tag(&tag),
            BrowseCommand::Reset => self.criteria.reset(),
        }

        Outcome::Continue(self.render())
    }

    fn render(&self) -> String {
        let output = self.use_case.execute(&self.criteria);
        ConsoleFormatter.render(&output, self.format)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Question Finder - Browse Mode         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} {} questions",
            "Loaded".cyan().bold(),
            self.use_case.bank().len()
        );
        println!("Type text to search, /help for commands.");
        println!();
    }

    fn help_text() -> String {
        [
            "",
            "Commands:",
            "  <text>             - Search question, topic, subtopic and tags",
            "  /clear             - Clear the search text",
            "  /exam <EXAM>       - Filter by exam (alias: /year)",
            "  /paper <PAPER>     - Filter by paper",
            "  /topic <TOPIC>     - Filter by topic",
            "  /subtopic <SUB>    - Filter by subtopic",
            "                       (no value or \"All\" removes the filter)",
            "  /tag <TAG>         - Search for a tag",
            "  /reset             - Remove all filters",
            "  /facets            - List available filter values",
            "  /filters           - Show current filters",
            "  /help, /h, /?      - Show this help",
            "  /quit, /exit, /q   - Exit",
            "",
        ]
        .join("\n")
    }
}
