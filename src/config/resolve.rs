//! Placeholder substitution and environment fallback for switches.

use crate::constants::{BINARY_PATH_TOKEN, FALLBACK_SWITCHES_ENV};

/// Replace every `%%toolbinarypath%%` in `value` with `binpath`.
///
/// Rescans from the start after each replacement so a token formed by a
/// replacement is also expanded, unless `binpath` itself contains the token.
pub fn substitute_binary_path(value: &str, binpath: &str) -> String {
    if binpath.contains(BINARY_PATH_TOKEN) {
        return value.replace(BINARY_PATH_TOKEN, binpath);
    }
    let mut result = value.to_string();
    while let Some(start) = result.find(BINARY_PATH_TOKEN) {
        result.replace_range(start..start + BINARY_PATH_TOKEN.len(), binpath);
    }
    result
}

/// Switches from the fallback environment variable, split on whitespace.
///
/// Returns `None` when the variable is unset.
pub fn switches_from_env() -> Option<Vec<String>> {
    let value = std::env::var(FALLBACK_SWITCHES_ENV).ok()?;
    Some(split_switches(&value))
}

pub(crate) fn split_switches(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(
            substitute_binary_path("%%toolbinarypath%%:%%toolbinarypath%%/lib", "/opt/tool/bin"),
            "/opt/tool/bin:/opt/tool/bin/lib"
        );
    }

    #[test]
    fn test_no_token_is_unchanged() {
        assert_eq!(substitute_binary_path("-release", "/opt/tool/bin"), "-release");
    }

    #[test]
    fn test_empty_binpath() {
        assert_eq!(substitute_binary_path("-I%%toolbinarypath%%/import", ""), "-I/import");
    }

    #[test]
    fn test_token_formed_by_replacement_is_expanded() {
        // Removing the inner token joins "%%tool" and "binarypath%%".
        assert_eq!(
            substitute_binary_path("%%tool%%toolbinarypath%%binarypath%%", ""),
            ""
        );
    }

    #[test]
    fn test_binpath_containing_token_terminates() {
        assert_eq!(
            substitute_binary_path("a%%toolbinarypath%%b", "/x/%%toolbinarypath%%"),
            "a/x/%%toolbinarypath%%b"
        );
    }

    #[test]
    fn test_split_switches() {
        assert_eq!(split_switches("  -a\t-b\n-c "), vec!["-a", "-b", "-c"]);
        assert!(split_switches("   ").is_empty());
    }
}
