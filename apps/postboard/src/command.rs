//! Terminal command parsing.

use thiserror::Error;

use postboard_core::domain::PostId;

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fill both form fields and submit.
    Add { title: String, content: String },
    /// Set the form's title field.
    Title(String),
    /// Set the form's content field.
    Content(String),
    Submit,
    Form,
    Refresh,
    Search(String),
    Edit(PostId),
    Delete(PostId),
    Html,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a post id")]
    MissingId(&'static str),

    #[error("`{0}` is not a post id")]
    BadId(String),
}

pub const HELP: &str = "\
commands:
  add <title> [| <content>]   create a post
  title <text>                set the form title
  content <text>              set the form content
  submit                      create a post from the form
  form                        show the form
  list | refresh              clear the search and reload
  search [<query>]            filter loaded posts by title
  edit <id>                   edit a listed post
  delete <id>                 delete a listed post
  html                        print the list as HTML
  help                        show this help
  quit                        exit";

/// Parse one input line. Blank lines parse to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "add" => {
            let (title, content) = rest.split_once('|').unwrap_or((rest, ""));
            Command::Add {
                title: title.to_string(),
                content: content.to_string(),
            }
        }
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "submit" => Command::Submit,
        "form" => Command::Form,
        "list" | "refresh" => Command::Refresh,
        "search" => Command::Search(rest.to_string()),
        "edit" => Command::Edit(parse_id("edit", rest)?),
        "delete" | "rm" => Command::Delete(parse_id("delete", rest)?),
        "html" => Command::Html,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_id(command: &'static str, arg: &str) -> Result<PostId, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(CommandError::MissingId(command));
    }
    arg.parse::<i64>()
        .map(PostId)
        .map_err(|_| CommandError::BadId(arg.to_string()))
}
