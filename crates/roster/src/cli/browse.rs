//! Line input for the interactive `browse` session.

use crate::view::{GenderFilter, StatusFilter};

/// Help text printed when the session starts.
pub const BROWSE_HELP: &str = "\
Type to search by name. Commands:
  :gender <all|male|female|other>
  :status <all|active|inactive>
  :quit";

/// One line typed into the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    /// New search text.
    Search(String),
    /// Change the gender selector.
    Gender(GenderFilter),
    /// Change the status selector.
    Status(StatusFilter),
    /// End the session.
    Quit,
    /// A command that could not be understood.
    Invalid(String),
}

impl BrowseInput {
    /// Interpret a line of input.
    ///
    /// Lines starting with `:` are commands; anything else replaces the
    /// search text, including the empty line which clears it.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Search(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let (name, arg) = command
            .trim()
            .split_once(char::is_whitespace)
            .map_or((command.trim(), ""), |(n, a)| (n, a.trim()));

        match name {
            "q" | "quit" => Self::Quit,
            "gender" => arg.parse().map_or_else(Self::Invalid, Self::Gender),
            "status" => arg.parse().map_or_else(Self::Invalid, Self::Status),
            other => Self::Invalid(format!("unknown command ':{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(
            BrowseInput::parse("Asha"),
            BrowseInput::Search("Asha".to_string())
        );
        assert_eq!(BrowseInput::parse(""), BrowseInput::Search(String::new()));
    }

    #[test]
    fn test_gender_command() {
        assert_eq!(
            BrowseInput::parse(":gender female"),
            BrowseInput::Gender(GenderFilter::Only(Gender::Female))
        );
        assert_eq!(
            BrowseInput::parse(" :gender   ALL "),
            BrowseInput::Gender(GenderFilter::All)
        );
    }

    #[test]
    fn test_status_command() {
        assert_eq!(
            BrowseInput::parse(":status inactive"),
            BrowseInput::Status(StatusFilter::Inactive)
        );
    }

    #[test]
    fn test_quit() {
        assert_eq!(BrowseInput::parse(":quit"), BrowseInput::Quit);
        assert_eq!(BrowseInput::parse(":q"), BrowseInput::Quit);
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(
            BrowseInput::parse(":status maybe"),
            BrowseInput::Invalid(_)
        ));
        assert!(matches!(
            BrowseInput::parse(":gender"),
            BrowseInput::Invalid(_)
        ));
        assert!(matches!(BrowseInput::parse(":sort"), BrowseInput::Invalid(_)));
    }
}
