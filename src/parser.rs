//! Turns raw argument tokens into a validated [`Command`].
//!
//! Parsing is pure: no file system access, and every malformed input comes
//! back as a [`ParseError`] whose `Display` is the message shown to the user.

use crate::models::Status;

/// A validated request, one variant per command keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { description: String },
    Update { id: u32, description: String },
    Delete { ids: Vec<u32> },
    List { statuses: Vec<Status> },
    MarkToDo { ids: Vec<u32> },
    MarkInProgress { ids: Vec<u32> },
    MarkDone { ids: Vec<u32> },
    Help,
}

/// Why a token sequence was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing task description")]
    MissingDescription,
    #[error("Invalid syntax! update <id> <description>")]
    UpdateSyntax,
    #[error("Id must be a positive integer")]
    InvalidId,
    #[error("Invalid syntax! {0} <id1> [id2] ...")]
    MissingIds(String),
}

/// Parses one invocation's arguments (without the program name).
///
/// The keyword is matched case-insensitively. Id and status lists are
/// lenient: tokens that do not parse are dropped rather than rejected.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Command, ParseError> {
    let (keyword, rest) = match tokens.split_first() {
        Some((first, rest)) => (first.as_ref().to_lowercase(), rest),
        None => return Err(ParseError::EmptyInput),
    };

    match keyword.as_str() {
        "add" => parse_add(rest),
        "update" => parse_update(rest),
        "delete" => Ok(Command::Delete { ids: parse_ids(&keyword, rest)? }),
        "list" => Ok(Command::List { statuses: parse_statuses(rest) }),
        "mark-todo" => Ok(Command::MarkToDo { ids: parse_ids(&keyword, rest)? }),
        "mark-in-progress" => Ok(Command::MarkInProgress { ids: parse_ids(&keyword, rest)? }),
        "mark-done" => Ok(Command::MarkDone { ids: parse_ids(&keyword, rest)? }),
        "help" => Ok(Command::Help),
        _ => Err(ParseError::UnknownCommand(keyword)),
    }
}

fn parse_add<S: AsRef<str>>(rest: &[S]) -> Result<Command, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingDescription);
    }
    let description = rest.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" ");
    Ok(Command::Add { description })
}

// Unlike `add`, the description must arrive as a single (quoted) token.
fn parse_update<S: AsRef<str>>(rest: &[S]) -> Result<Command, ParseError> {
    let [id, description] = rest else {
        return Err(ParseError::UpdateSyntax);
    };
    let id = match parse_id(id.as_ref()) {
        Ok(id) if id > 0 => id,
        _ => return Err(ParseError::InvalidId),
    };
    Ok(Command::Update { id, description: description.as_ref().to_string() })
}

fn parse_ids<S: AsRef<str>>(keyword: &str, rest: &[S]) -> Result<Vec<u32>, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingIds(keyword.to_string()));
    }
    Ok(rest.iter().filter_map(|t| parse_id(t.as_ref()).ok()).collect())
}

// Quoted ids may carry surrounding whitespace, e.g. `" 3"`.
fn parse_id(token: &str) -> Result<u32, std::num::ParseIntError> {
    token.trim().parse::<u32>()
}

fn parse_statuses<S: AsRef<str>>(rest: &[S]) -> Vec<Status> {
    if rest.is_empty() {
        return Status::ALL.to_vec();
    }
    let mut statuses = Vec::new();
    for status in rest.iter().filter_map(|t| t.as_ref().parse::<Status>().ok()) {
        if !statuses.contains(&status) {
            statuses.push(status);
        }
    }
    statuses
}
