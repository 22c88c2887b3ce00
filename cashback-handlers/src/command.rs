//! Bot command parsing.
//!
//! Any text starting with [`COMMAND_PREFIX`] is a command, known or not; such text is never
//! used as a search query.

/// Marker that starts every bot command.
pub const COMMAND_PREFIX: char = '/';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    List,
    Reset,
    /// `/add <bank>; <category>; <percent>`; holds the raw argument text.
    Add(String),
    Unknown(String),
}

impl Command {
    /// Parses `text` as a command. Returns None when it is not one.
    ///
    /// Accepts the `/command@botname` form Telegram uses in group chats.
    pub fn parse(text: &str) -> Option<Command> {
        let text = text.trim_start();
        let rest = text.strip_prefix(COMMAND_PREFIX)?;

        let (word, args) = match rest.find(char::is_whitespace) {
            Some(idx) => (&rest[..idx], rest[idx..].trim()),
            None => (rest, ""),
        };
        let name = word.split('@').next().unwrap_or(word).to_lowercase();

        let command = match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "list" => Command::List,
            "reset" => Command::Reset,
            "add" => Command::Add(args.to_string()),
            _ => Command::Unknown(word.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("/start"), Some(Command::Start));
        assert_eq!(Command::parse("/help"), Some(Command::Help));
        assert_eq!(Command::parse("/list"), Some(Command::List));
        assert_eq!(Command::parse("/reset"), Some(Command::Reset));
        assert_eq!(Command::parse("  /LIST"), Some(Command::List));
    }

    #[test]
    fn test_parse_bot_suffix() {
        assert_eq!(Command::parse("/list@cashback_bot"), Some(Command::List));
    }

    #[test]
    fn test_parse_add_arguments() {
        assert_eq!(
            Command::parse("/add Alpha; Fast Food; 5"),
            Some(Command::Add("Alpha; Fast Food; 5".to_string()))
        );
        assert_eq!(Command::parse("/add"), Some(Command::Add(String::new())));
    }

    #[test]
    fn test_parse_unknown_and_plain_text() {
        assert_eq!(
            Command::parse("/food"),
            Some(Command::Unknown("food".to_string()))
        );
        assert_eq!(Command::parse("/"), Some(Command::Unknown(String::new())));
        assert_eq!(Command::parse("Food"), None);
        assert_eq!(Command::parse("Fast / Food"), None);
    }
}
