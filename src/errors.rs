use thiserror::Error;

/// Errors raised while checking command input, before the API server is contacted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("accepts {expected} arg(s), received {received}")]
    InvalidArgumentCount { expected: usize, received: usize },

    #[error("invalid name `{name}`: a DNS-1123 label must consist of lower case alphanumeric characters or '-', must start and end with an alphanumeric character and be at most 63 characters long")]
    InvalidName { name: String },

    #[error("at least one of {} must be set", flag_list(.flags))]
    MissingRequiredOneOf { flags: Vec<&'static str> },

    #[error("at most one of {} must be set", flag_list(.flags))]
    MutuallyExclusive { flags: Vec<&'static str> },

    #[error("when --{flag} is set, at least one of {} must be set", flag_list(.dependents))]
    MissingDependentFlag {
        flag: &'static str,
        dependents: Vec<&'static str>,
    },

    #[error("required flag(s) {} not set", quoted_list(.flags))]
    MissingRequiredFlag { flags: Vec<&'static str> },

    #[error("invalid value `{value}` for --{flag}: expected {expected}")]
    InvalidFlagValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown invoker `{name}`, expected one of: {}", .known.join(", "))]
    UnknownInvoker { name: String, known: Vec<String> },
}

fn flag_list(flags: &[&'static str]) -> String {
    flags
        .iter()
        .map(|flag| format!("--{flag}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quoted_list(flags: &[&'static str]) -> String {
    let mut flags = flags.to_vec();
    flags.sort_unstable();

    flags
        .iter()
        .map(|flag| format!("\"{flag}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidArgumentCount {
                expected: 2,
                received: 0
            }
            .to_string(),
            "accepts 2 arg(s), received 0"
        );

        assert_eq!(
            ValidationError::MissingRequiredOneOf {
                flags: vec!["bus", "cluster-bus"]
            }
            .to_string(),
            "at least one of --bus, --cluster-bus must be set"
        );

        assert_eq!(
            ValidationError::MutuallyExclusive {
                flags: vec!["bus", "cluster-bus"]
            }
            .to_string(),
            "at most one of --bus, --cluster-bus must be set"
        );

        assert_eq!(
            ValidationError::MissingDependentFlag {
                flag: "input",
                dependents: vec!["bus", "cluster-bus"]
            }
            .to_string(),
            "when --input is set, at least one of --bus, --cluster-bus must be set"
        );
    }

    #[test]
    fn test_required_flags_are_sorted() {
        let err = ValidationError::MissingRequiredFlag {
            flags: vec!["image", "git-repo"],
        };

        assert_eq!(err.to_string(), r#"required flag(s) "git-repo", "image" not set"#);
    }
}
