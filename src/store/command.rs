//! Text commands that change an override list

use crate::result::CommandError;
use std::fmt;
use std::str::FromStr;

/// A change to apply to an [`OverrideStore`](crate::OverrideStore).
///
/// Parsed from the same words a player types after the script name:
///
/// | Text                        | Command            |
/// |-----------------------------|--------------------|
/// | `1`, `2`, ...               | `Toggle(position)` |
/// | `clear`, `reset`, `wipe`    | `Clear`            |
/// | `all`                       | `SetAll`           |
///
/// Keywords ignore ASCII case and surrounding whitespace.
///
/// ```
/// use ansicodes::StoreCommand;
///
/// assert_eq!("3".parse(), Ok(StoreCommand::Toggle(3)));
/// assert_eq!("Wipe".parse(), Ok(StoreCommand::Clear));
/// assert_eq!("all".parse(), Ok(StoreCommand::SetAll));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreCommand {
    /// Flip the entry at a 1-based position.
    Toggle(usize),
    /// Set every entry to `false`.
    Clear,
    /// Set every entry to `true`.
    SetAll,
}

impl FromStr for StoreCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Ok(position) = text.parse::<usize>() {
            return match position {
                0 => Err(CommandError::ZeroPosition),
                n => Ok(StoreCommand::Toggle(n)),
            };
        }

        match text.to_ascii_lowercase().as_str() {
            "clear" | "reset" | "wipe" => Ok(StoreCommand::Clear),
            "all" => Ok(StoreCommand::SetAll),
            _ => Err(CommandError::Unknown(text.to_string())),
        }
    }
}

impl fmt::Display for StoreCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreCommand::Toggle(position) => write!(f, "{position}"),
            StoreCommand::Clear => f.write_str("clear"),
            StoreCommand::SetAll => f.write_str("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positions() {
        assert_eq!("1".parse(), Ok(StoreCommand::Toggle(1)));
        assert_eq!(" 31 ".parse(), Ok(StoreCommand::Toggle(31)));
    }

    #[test]
    fn test_parse_zero() {
        assert_eq!("0".parse::<StoreCommand>(), Err(CommandError::ZeroPosition));
    }

    #[test]
    fn test_parse_clear_aliases() {
        for word in ["clear", "reset", "wipe", "CLEAR", " Reset "] {
            assert_eq!(word.parse(), Ok(StoreCommand::Clear), "{word}");
        }
    }

    #[test]
    fn test_parse_all() {
        assert_eq!("ALL".parse(), Ok(StoreCommand::SetAll));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<StoreCommand>(), Err(CommandError::Empty));
        assert_eq!("  ".parse::<StoreCommand>(), Err(CommandError::Empty));
        assert_eq!(
            "-1".parse::<StoreCommand>(),
            Err(CommandError::Unknown("-1".to_string()))
        );
        assert_eq!(
            "everything".parse::<StoreCommand>(),
            Err(CommandError::Unknown("everything".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for command in [StoreCommand::Toggle(4), StoreCommand::Clear, StoreCommand::SetAll] {
            assert_eq!(command.to_string().parse(), Ok(command));
        }
    }
}
