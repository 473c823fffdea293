//! Approval - the operator's answer to a yes/no prompt

/// Parsed answer to "is this good?"
///
/// Matching is case-insensitive but otherwise exact: `" yes"` is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Yes,
    No,
    Invalid,
}

impl Approval {
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "yes" => Approval::Yes,
            "no" => Approval::No,
            _ => Approval::Invalid,
        }
    }
}

impl std::fmt::Display for Approval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Approval::Yes => write!(f, "yes"),
            Approval::No => write!(f, "no"),
            Approval::Invalid => write!(f, "invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_any_case() {
        for input in ["yes", "YES", "Yes", "yEs"] {
            assert_eq!(Approval::parse(input), Approval::Yes, "{input}");
        }
    }

    #[test]
    fn test_no_any_case() {
        for input in ["no", "NO", "No", "nO"] {
            assert_eq!(Approval::parse(input), Approval::No, "{input}");
        }
    }

    #[test]
    fn test_everything_else_is_invalid() {
        for input in ["", "y", "n", "yes ", " no", "nope", "yess", "maybe"] {
            assert_eq!(Approval::parse(input), Approval::Invalid, "{input:?}");
        }
    }
}
