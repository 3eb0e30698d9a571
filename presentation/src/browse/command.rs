//! Browse REPL command parsing

use qfinder_domain::{FacetField, FacetSelection};

/// One line of user input in browse mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Plain text: replace the free-text query
    Query(String),
    /// `/clear`: empty the free-text query
    ClearQuery,
    /// `/exam X`, `/year X`, `/paper X`, `/topic X`, `/subtopic X`
    Select(FacetField, FacetSelection),
    /// `/tag X`: tag shortcut
    Tag(String),
    /// `/reset`: all facets back to `All` and no query
    Reset,
    /// `/facets`: list facet options
    Facets,
    /// `/filters`: show current criteria
    Filters,
    Help,
    Quit,
    /// A known command used without its required argument
    Usage(&'static str),
    Unknown(String),
}

impl BrowseCommand {
    /// Parse one input line; `None` for blank input
    ///
    /// Query text and command arguments are kept exactly as typed, so
    /// surrounding whitespace stays part of the value.
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return Some(BrowseCommand::Query(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg),
            None => (rest, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            "help" | "h" | "?" => BrowseCommand::Help,
            "reset" => BrowseCommand::Reset,
            "clear" => BrowseCommand::ClearQuery,
            "facets" => BrowseCommand::Facets,
            "filters" => BrowseCommand::Filters,
            "tag" if arg.trim().is_empty() => BrowseCommand::Usage("/tag <TAG>"),
            "tag" => BrowseCommand::Tag(arg.to_string()),
            facet => match facet.parse::<FacetField>() {
                Ok(field) => BrowseCommand::Select(field, FacetSelection::parse(arg)),
                Err(_) => BrowseCommand::Unknown(line.trim().to_string()),
            },
        };
        Some(command)
    }
}
