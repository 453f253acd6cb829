use regex::Regex;

use crate::errors::ValidationError;

const DNS_LABEL_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";
const DNS_LABEL_MAX_LENGTH: usize = 63;

const ENV_FROM_KINDS: [&str; 2] = ["secretKeyRef", "configMapKeyRef"];

/// Checks that `name` can be used as a resource name on the platform.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let regex = Regex::new(DNS_LABEL_PATTERN).expect("name pattern is valid");

    if name.len() <= DNS_LABEL_MAX_LENGTH && regex.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::InvalidName {
            name: name.to_string(),
        })
    }
}

pub fn exact_args(args: &[String], expected: usize) -> Result<(), ValidationError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ValidationError::InvalidArgumentCount {
            expected,
            received: args.len(),
        })
    }
}

/// Fails with every flag of `flags` that has no value.
pub fn required_flags(flags: &[(&'static str, bool)]) -> Result<(), ValidationError> {
    let missing = flags
        .iter()
        .filter(|(_, set)| !set)
        .map(|(flag, _)| *flag)
        .collect::<Vec<_>>();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingRequiredFlag { flags: missing })
    }
}

pub fn at_most_one_of(flags: &[(&'static str, bool)]) -> Result<(), ValidationError> {
    if flags.iter().filter(|(_, set)| *set).count() > 1 {
        return Err(ValidationError::MutuallyExclusive {
            flags: flags.iter().map(|(flag, _)| *flag).collect(),
        });
    }

    Ok(())
}

pub fn exactly_one_of(flags: &[(&'static str, bool)]) -> Result<(), ValidationError> {
    if !flags.iter().any(|(_, set)| *set) {
        return Err(ValidationError::MissingRequiredOneOf {
            flags: flags.iter().map(|(flag, _)| *flag).collect(),
        });
    }

    at_most_one_of(flags)
}

/// `flag` being set requires exactly one of `dependents` to be set too.
pub fn one_of_when(
    flag: (&'static str, bool),
    dependents: &[(&'static str, bool)],
) -> Result<(), ValidationError> {
    let (name, set) = flag;

    if !set {
        return Ok(());
    }

    if !dependents.iter().any(|(_, set)| *set) {
        return Err(ValidationError::MissingDependentFlag {
            flag: name,
            dependents: dependents.iter().map(|(flag, _)| *flag).collect(),
        });
    }

    at_most_one_of(dependents)
}

pub fn validate_env(value: &str) -> Result<(), ValidationError> {
    match value.split_once('=') {
        Some((key, _)) if !key.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFlagValue {
            flag: "env",
            value: value.to_string(),
            expected: "KEY=VALUE",
        }),
    }
}

pub fn validate_env_from(value: &str) -> Result<(), ValidationError> {
    let parts = value.split(':').collect::<Vec<_>>();

    match parts.as_slice() {
        [kind, name, key]
            if ENV_FROM_KINDS.contains(kind) && !name.is_empty() && !key.is_empty() =>
        {
            Ok(())
        }

        _ => Err(ValidationError::InvalidFlagValue {
            flag: "env-from",
            value: value.to_string(),
            expected: "secretKeyRef:<name>:<key> or configMapKeyRef:<name>:<key>",
        }),
    }
}
