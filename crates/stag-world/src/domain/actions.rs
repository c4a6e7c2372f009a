//! Data-defined custom actions.

use std::fmt;

use stag_core::text::{contains_phrase, names_match};

/// Separator between source and destination in a path production.
pub const PATH_SEPARATOR: &str = "->";

/// One thing a successful action produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production {
    /// An entity placed in the acting player's current location.
    Entity(String),
    /// A directed path between two locations, anywhere in the world.
    Path {
        /// Source location name.
        from: String,
        /// Destination location name.
        to: String,
    },
}

impl Production {
    /// Parses an authored production token. `"cellar->cave"` is a path,
    /// anything else names an entity.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if let Some((from, to)) = spec.split_once(PATH_SEPARATOR) {
            let (from, to) = (from.trim(), to.trim());
            if !from.is_empty() && !to.is_empty() {
                return Production::Path {
                    from: from.to_owned(),
                    to: to.to_owned(),
                };
            }
        }
        Production::Entity(spec.trim().to_owned())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Production::Entity(name) => f.write_str(name),
            Production::Path { from, to } => write!(f, "{from}{PATH_SEPARATOR}{to}"),
        }
    }
}

/// A custom action from the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAction {
    /// Words or phrases that signal this action.
    pub triggers: Vec<String>,
    /// Entity names that must be available to the player.
    pub subjects: Vec<String>,
    /// Entity names removed from the world on success.
    pub consumed: Vec<String>,
    /// Entities or paths added to the world on success.
    pub produced: Vec<Production>,
    /// Message returned on success.
    pub narration: String,
}

impl CustomAction {
    /// True if any trigger phrase occurs as whole words in `tokens`.
    #[must_use]
    pub fn matches_trigger(&self, tokens: &[String]) -> bool {
        self.triggers
            .iter()
            .any(|trigger| contains_phrase(tokens, trigger))
    }

    /// True if any subject name occurs as whole words in `tokens`.
    #[must_use]
    pub fn mentions_subject(&self, tokens: &[String]) -> bool {
        self.subjects
            .iter()
            .any(|subject| contains_phrase(tokens, subject))
    }

    /// True if `name` is one of this action's subjects.
    #[must_use]
    pub fn has_subject(&self, name: &str) -> bool {
        self.subjects.iter().any(|subject| names_match(subject, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stag_core::text::tokenize;

    fn chop_action() -> CustomAction {
        CustomAction {
            triggers: vec!["chop".to_owned(), "cut down".to_owned()],
            subjects: vec!["tree".to_owned(), "axe".to_owned()],
            consumed: vec!["tree".to_owned()],
            produced: vec![Production::parse("log")],
            narration: "You cut down the tree with the axe".to_owned(),
        }
    }

    #[test]
    fn test_parse_recognises_path_specs() {
        assert_eq!(
            Production::parse("cellar -> cave"),
            Production::Path {
                from: "cellar".to_owned(),
                to: "cave".to_owned()
            }
        );
        assert_eq!(
            Production::parse("log"),
            Production::Entity("log".to_owned())
        );
    }

    #[test]
    fn test_parse_treats_half_path_as_entity_name() {
        assert_eq!(
            Production::parse("->cave"),
            Production::Entity("->cave".to_owned())
        );
    }

    #[test]
    fn test_display_round_trips_path() {
        assert_eq!(
            Production::parse("cellar->cave").to_string(),
            "cellar->cave"
        );
    }

    #[test]
    fn test_matches_trigger_uses_whole_phrases() {
        let action = chop_action();

        assert!(action.matches_trigger(&tokenize("please cut down the tree")));
        assert!(action.matches_trigger(&tokenize("chop tree")));
        assert!(!action.matches_trigger(&tokenize("cut the tree")));
        assert!(!action.matches_trigger(&tokenize("chopping tree")));
    }

    #[test]
    fn test_mentions_subject_and_has_subject() {
        let action = chop_action();

        assert!(action.mentions_subject(&tokenize("chop the TREE")));
        assert!(!action.mentions_subject(&tokenize("chop")));
        assert!(action.has_subject("Axe"));
        assert!(!action.has_subject("log"));
    }
}
