//! Parsing of interactive session input lines.

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Search(String),
    Category(String),
    Clear,
    Items,
    Select(String),
    Close,
    /// `None` opens the picker; `Some` picks directly.
    Location(Option<String>),
    Cancel,
    Status,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a user-facing message for unknown verbs or missing arguments.
pub(crate) fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let required = |what: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("`{verb}` needs {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match verb.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(rest.to_string()),
        "category" | "cat" => ShellCommand::Category(required("a category name")?),
        "clear" => ShellCommand::Clear,
        "items" | "ls" => ShellCommand::Items,
        "select" | "open" => ShellCommand::Select(required("an item id or name")?),
        "close" => ShellCommand::Close,
        "location" | "loc" => {
            ShellCommand::Location(if rest.is_empty() { None } else { Some(rest.to_string()) })
        }
        "cancel" => ShellCommand::Cancel,
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse_command("search  sambar powder "),
            Ok(Some(ShellCommand::Search("sambar powder".to_string())))
        );
    }

    #[test]
    fn bare_search_clears_term() {
        assert_eq!(
            parse_command("search"),
            Ok(Some(ShellCommand::Search(String::new())))
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("QUIT"), Ok(Some(ShellCommand::Quit)));
        assert_eq!(
            parse_command("Select Idli Rice"),
            Ok(Some(ShellCommand::Select("Idli Rice".to_string())))
        );
    }

    #[test]
    fn location_with_and_without_argument() {
        assert_eq!(
            parse_command("location"),
            Ok(Some(ShellCommand::Location(None)))
        );
        assert_eq!(
            parse_command("loc 3"),
            Ok(Some(ShellCommand::Location(Some("3".to_string()))))
        );
    }

    #[test]
    fn select_requires_argument() {
        let err = parse_command("select").unwrap_err();
        assert!(err.contains("needs an item"), "{err}");
    }

    #[test]
    fn category_requires_argument() {
        assert!(parse_command("category").is_err());
    }

    #[test]
    fn unknown_verb_is_error() {
        let err = parse_command("buy rice").unwrap_err();
        assert!(err.contains("unknown command `buy`"), "{err}");
    }
}
