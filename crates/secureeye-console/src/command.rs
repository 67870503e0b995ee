//! Console command parsing
//!
//! One input line becomes one [`Command`]; dashboard actions are carried as
//! the dashboard's own message type.

use secureeye_protocol::{AdminMessage, UserMessage};
use secureeye_types::{CameraRecord, FieldChange};
use thiserror::Error;

/// Why a line could not be turned into a command
#[derive(Error, Debug)]
pub enum CommandError {
    /// First word is not a known command
    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),

    /// A required argument is absent
    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// What was expected
        argument: &'static str,
    },

    /// An argument did not parse
    #[error("Invalid argument: {0}")]
    Invalid(#[from] secureeye_types::Error),

    /// Inline camera JSON did not parse
    #[error("Invalid camera JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<M> {
    /// Forward a message to the dashboard
    Dispatch(M),
    /// Print the current view again
    Show,
    /// Print the command list
    Help,
    /// End the session
    Quit,
    /// Blank line
    Nothing,
}

/// Commands understood by the admin session
pub const ADMIN_HELP: &str = "\
Commands:
  search <text>     filter by name or id (no text clears the filter)
  open <id>         show camera details
  close             close the detail view
  approve <id>      approve a pending camera
  decline <id>      decline a pending camera
  dismiss           clear the last message
  show              print the dashboard again
  help              print this list
  quit              leave";

/// Commands understood by the user session
pub const USER_HELP: &str = "\
Commands:
  open <id>              edit a camera
  set <field> <value>    change a field of the open camera
                         (name, location, type, sharing, model, company, serial, range)
  save                   save the open camera
  cancel                 discard edits and close
  delete <id>            delete a camera
  add <json>             add a camera from a JSON record
  new                    open the add camera form
  subsidy                open the subsidy application form
  dismiss                clear the last message
  show                   print the dashboard again
  help                   print this list
  quit                   leave";

fn split(line: &str) -> (&str, &str) {
    let line = line.trim();
    line.split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()))
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(value)
}

fn common<M>(word: &str) -> Option<Command<M>> {
    match word {
        "" => Some(Command::Nothing),
        "show" | "list" | "ls" => Some(Command::Show),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

/// Parse a line typed into the admin session
///
/// # Errors
///
/// Returns [`CommandError`] for unknown commands and missing arguments.
pub fn parse_admin(line: &str) -> Result<Command<AdminMessage>, CommandError> {
    let (word, rest) = split(line);
    if let Some(command) = common(word) {
        return Ok(command);
    }

    let message = match word.to_ascii_lowercase().as_str() {
        "search" | "find" => AdminMessage::SearchChanged(rest.to_string()),
        "open" | "details" => AdminMessage::OpenDetails(required("open", "<id>", rest)?.into()),
        "close" => AdminMessage::CloseDetails,
        "approve" => AdminMessage::Approve(required("approve", "<id>", rest)?.into()),
        "decline" => AdminMessage::Decline(required("decline", "<id>", rest)?.into()),
        "dismiss" => AdminMessage::DismissNotice,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Command::Dispatch(message))
}

/// Parse a line typed into the user session
///
/// # Errors
///
/// Returns [`CommandError`] for unknown commands, missing arguments, bad field
/// values and malformed camera JSON.
pub fn parse_user(line: &str) -> Result<Command<UserMessage>, CommandError> {
    let (word, rest) = split(line);
    if let Some(command) = common(word) {
        return Ok(command);
    }

    let message = match word.to_ascii_lowercase().as_str() {
        "open" | "details" | "edit" => {
            UserMessage::OpenDetails(required("open", "<id>", rest)?.into())
        }
        "set" => {
            let (field, value) = split(rest);
            let field = required("set", "<field>", field)?;
            UserMessage::EditField(FieldChange::parse(field, value)?)
        }
        "save" => UserMessage::SaveChanges,
        "cancel" | "close" => UserMessage::Cancel,
        "delete" | "rm" => UserMessage::Delete(required("delete", "<id>", rest)?.into()),
        "add" => {
            let record: CameraRecord = serde_json::from_str(required("add", "<json>", rest)?)?;
            UserMessage::CameraAdded(Box::new(record))
        }
        "new" => UserMessage::AddCamera,
        "subsidy" => UserMessage::ApplyForSubsidy,
        "dismiss" => UserMessage::DismissNotice,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Command::Dispatch(message))
}
