use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command.")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Invalid command. Command must have {expected} token(s), you provided: {found}")]
    WrongTokenCount { expected: usize, found: usize },
    #[error("Error parsing integer in command: {0}")]
    InvalidArgument(String),
}

/// One line of input, already split into its command code and argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Visit(String),
    Back(i64),
    Forward(i64),
    Remove(String),
    Bookmark,
    ClearHistory,
    PrintBookmarks,
    PrintHistory,
    CountHistory,
    CountBookmarks,
    VisitBookmark(i64),
    Quit,
    Help,
}

fn expect_tokens(tokens: &[&str], expected: usize) -> Result<(), CommandError> {
    if tokens.len() != expected {
        return Err(CommandError::WrongTokenCount {
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn string_arg(tokens: &[&str]) -> Result<String, CommandError> {
    expect_tokens(tokens, 2)?;
    Ok(tokens[1].to_owned())
}

fn int_arg(tokens: &[&str]) -> Result<i64, CommandError> {
    expect_tokens(tokens, 2)?;
    tokens[1]
        .parse()
        .map_err(|_| CommandError::InvalidArgument(tokens[1].to_owned()))
}

fn no_arg(tokens: &[&str], command: Command) -> Result<Command, CommandError> {
    expect_tokens(tokens, 1)?;
    Ok(command)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&code) = tokens.first() else {
            return Err(CommandError::Empty);
        };
        match code {
            "v" => string_arg(&tokens).map(Command::Visit),
            "<" => int_arg(&tokens).map(Command::Back),
            ">" => int_arg(&tokens).map(Command::Forward),
            "r" => string_arg(&tokens).map(Command::Remove),
            "V" => int_arg(&tokens).map(Command::VisitBookmark),
            "b" => no_arg(&tokens, Command::Bookmark),
            "c" => no_arg(&tokens, Command::ClearHistory),
            "p" => no_arg(&tokens, Command::PrintBookmarks),
            "h" => no_arg(&tokens, Command::PrintHistory),
            "H" => no_arg(&tokens, Command::CountHistory),
            "B" => no_arg(&tokens, Command::CountBookmarks),
            "q" => no_arg(&tokens, Command::Quit),
            "?" => no_arg(&tokens, Command::Help),
            _ => Err(CommandError::Unknown(line.trim().to_owned())),
        }
    }
}
