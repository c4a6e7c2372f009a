//! Commands for the Command Dispatch context.

use stag_core::command::Command;
use stag_core::text::normalize;
use uuid::Uuid;

/// Separates the player name from the command text.
pub const PLAYER_SEPARATOR: char = ':';

/// Command to run one line of player input against the game.
#[derive(Debug, Clone)]
pub struct SubmitCommand {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Raw input in the form `"<player>: <text>"`.
    pub input: String,
}

impl SubmitCommand {
    /// Wraps raw input with a fresh correlation id.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            input: input.into(),
        }
    }
}

impl Command for SubmitCommand {
    fn command_type(&self) -> &'static str {
        "engine.submit_command"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Input that could not be split into a player and a command.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MalformedCommand {
    /// No separator in the input.
    #[error("Your command is invalid, please use like [player : command].")]
    MissingSeparator,

    /// The player name is empty or not alphanumeric.
    #[error("Invalid player name. Player name must contain only letters and numbers.")]
    InvalidPlayerName,
}

/// A validated player name and normalised command text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Player name, lowercased.
    pub player: String,
    /// Command text, whitespace collapsed and lowercased.
    pub text: String,
}

impl ParsedCommand {
    /// Splits input at the first separator and validates the player name.
    /// Player names are case-insensitive, so the name is lowercased.
    ///
    /// # Errors
    ///
    /// Returns `MalformedCommand` if there is no separator or the name is
    /// not made of ASCII letters and digits only.
    pub fn parse(input: &str) -> Result<Self, MalformedCommand> {
        let (player, text) = input
            .split_once(PLAYER_SEPARATOR)
            .ok_or(MalformedCommand::MissingSeparator)?;

        let player = player.trim();
        if player.is_empty() || !player.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MalformedCommand::InvalidPlayerName);
        }

        Ok(Self {
            player: player.to_lowercase(),
            text: normalize(text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_player_and_normalises_text() {
        let parsed = ParsedCommand::parse("Simon:   Chop  the TREE ").unwrap();

        assert_eq!(parsed.player, "simon");
        assert_eq!(parsed.text, "chop the tree");
    }

    #[test]
    fn test_parse_uses_first_separator_only() {
        let parsed = ParsedCommand::parse("simon: say: hello").unwrap();

        assert_eq!(parsed.text, "say: hello");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert_eq!(
            ParsedCommand::parse("simon look"),
            Err(MalformedCommand::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_rejects_invalid_player_names() {
        for input in ["badname!: look", ": look", "  : look", "two words: look", "élan: look"] {
            assert_eq!(
                ParsedCommand::parse(input),
                Err(MalformedCommand::InvalidPlayerName),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_allows_empty_command_text() {
        let parsed = ParsedCommand::parse("simon:").unwrap();

        assert_eq!(parsed.text, "");
    }

    #[test]
    fn test_malformed_command_messages() {
        assert_eq!(
            MalformedCommand::MissingSeparator.to_string(),
            "Your command is invalid, please use like [player : command]."
        );
        assert_eq!(
            MalformedCommand::InvalidPlayerName.to_string(),
            "Invalid player name. Player name must contain only letters and numbers."
        );
    }

    #[test]
    fn test_submit_command_type() {
        let command = SubmitCommand::new("simon: look");

        assert_eq!(command.command_type(), "engine.submit_command");
        assert_eq!(command.input, "simon: look");
    }
}
