//! Built-in verbs recognised before the custom-action catalog.

/// A parsed built-in verb with its argument, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinVerb {
    /// Describe the current location.
    Look,
    /// List carried items.
    Inventory,
    /// Report current health.
    Health,
    /// Pick up an artefact.
    Get(String),
    /// Put down a carried item.
    Drop(String),
    /// Move along a path.
    Goto(String),
    /// Drink a carried potion.
    Drink(String),
    /// Fight a character.
    Fight(String),
}

impl BuiltinVerb {
    /// Parses already-normalised command text. The first word selects the
    /// verb; the rest is its argument.
    ///
    /// Returns `None` if the first word is not a built-in keyword, or if a
    /// verb that needs an argument has none.
    #[must_use]
    pub fn parse(normalized: &str) -> Option<Self> {
        let (keyword, rest) = match normalized.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (normalized, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_owned());

        match keyword {
            "look" => Some(BuiltinVerb::Look),
            "inventory" | "inv" => Some(BuiltinVerb::Inventory),
            "health" | "hp" => Some(BuiltinVerb::Health),
            "get" => argument.map(BuiltinVerb::Get),
            "drop" => argument.map(BuiltinVerb::Drop),
            "goto" => argument.map(BuiltinVerb::Goto),
            "drink" => argument.map(BuiltinVerb::Drink),
            "fight" | "attack" => argument.map(BuiltinVerb::Fight),
            _ => None,
        }
    }

    /// Name used in logs.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            BuiltinVerb::Look => "look",
            BuiltinVerb::Inventory => "inventory",
            BuiltinVerb::Health => "health",
            BuiltinVerb::Get(_) => "get",
            BuiltinVerb::Drop(_) => "drop",
            BuiltinVerb::Goto(_) => "goto",
            BuiltinVerb::Drink(_) => "drink",
            BuiltinVerb::Fight(_) => "fight",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognises_bare_verbs_and_aliases() {
        assert_eq!(BuiltinVerb::parse("look"), Some(BuiltinVerb::Look));
        assert_eq!(BuiltinVerb::parse("look around"), Some(BuiltinVerb::Look));
        assert_eq!(BuiltinVerb::parse("inv"), Some(BuiltinVerb::Inventory));
        assert_eq!(BuiltinVerb::parse("hp"), Some(BuiltinVerb::Health));
    }

    #[test]
    fn test_parse_keeps_multi_word_arguments() {
        assert_eq!(
            BuiltinVerb::parse("get magic potion"),
            Some(BuiltinVerb::Get("magic potion".to_owned()))
        );
        assert_eq!(
            BuiltinVerb::parse("attack elf"),
            Some(BuiltinVerb::Fight("elf".to_owned()))
        );
    }

    #[test]
    fn test_parse_rejects_argument_verbs_without_argument() {
        assert_eq!(BuiltinVerb::parse("get"), None);
        assert_eq!(BuiltinVerb::parse("goto"), None);
    }

    #[test]
    fn test_parse_requires_keyword_as_whole_first_word() {
        assert_eq!(BuiltinVerb::parse("getaway"), None);
        assert_eq!(BuiltinVerb::parse("chop tree"), None);
    }
}
