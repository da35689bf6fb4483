//! Skill name validation.
//!
//! The same rules apply to names given on the command line and names typed
//! at the interactive prompt.

use std::fmt;

/// The naming rule a candidate name broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Empty, or nothing but whitespace.
    Empty,
    /// Starts with `.` or `-`.
    LeadingCharacter(char),
    /// Contains a character outside `[a-zA-Z0-9_-]`.
    InvalidCharacter(char),
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRule::Empty => write!(f, "name cannot be empty"),
            NameRule::LeadingCharacter(c) => write!(f, "name cannot start with '{}'", c),
            NameRule::InvalidCharacter(c) => write!(
                f,
                "invalid character '{}' (only letters, digits, hyphens and underscores are allowed)",
                c
            ),
        }
    }
}

/// Check a skill name, reporting the first rule it breaks.
pub fn check_name(name: &str) -> Result<(), NameRule> {
    if name.trim().is_empty() {
        return Err(NameRule::Empty);
    }

    // Leading '.' would also fail the character check; report the more specific rule.
    if let Some(first) = name.chars().next() {
        if first == '.' || first == '-' {
            return Err(NameRule::LeadingCharacter(first));
        }
    }

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
            return Err(NameRule::InvalidCharacter(c));
        }
    }

    Ok(())
}

/// Whether `name` is usable as a skill directory and manifest name.
pub fn is_valid_name(name: &str) -> bool {
    check_name(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["pdf-processor", "my_skill", "Skill2", "a", "_private", "0day", "A-b_C-9"] {
            assert!(is_valid_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(check_name(""), Err(NameRule::Empty));
        assert_eq!(check_name("   "), Err(NameRule::Empty));
        assert_eq!(check_name("\t\n"), Err(NameRule::Empty));
    }

    #[test]
    fn test_leading_dot_or_hyphen() {
        assert_eq!(check_name(".hidden"), Err(NameRule::LeadingCharacter('.')));
        assert_eq!(check_name("-flag"), Err(NameRule::LeadingCharacter('-')));
    }

    #[test]
    fn test_trailing_hyphen_is_allowed() {
        assert!(is_valid_name("skill-"));
        assert!(is_valid_name("double--hyphen"));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(check_name("invalid name"), Err(NameRule::InvalidCharacter(' ')));
        assert_eq!(check_name("a/b"), Err(NameRule::InvalidCharacter('/')));
        assert_eq!(check_name("a\\b"), Err(NameRule::InvalidCharacter('\\')));
        assert_eq!(check_name("v1.0"), Err(NameRule::InvalidCharacter('.')));
        assert_eq!(check_name("café"), Err(NameRule::InvalidCharacter('é')));
    }

    #[test]
    fn test_surrounding_whitespace_is_rejected() {
        // Trimming only decides emptiness; the raw name still has to be clean.
        assert_eq!(check_name(" skill"), Err(NameRule::InvalidCharacter(' ')));
        assert_eq!(check_name("skill "), Err(NameRule::InvalidCharacter(' ')));
    }

    #[test]
    fn test_rule_messages() {
        assert_eq!(NameRule::Empty.to_string(), "name cannot be empty");
        assert_eq!(NameRule::LeadingCharacter('-').to_string(), "name cannot start with '-'");
        assert!(NameRule::InvalidCharacter('/').to_string().contains("'/'"));
    }
}
