//! Windows registry lookups.
//!
//! Values are read by running `reg query` and parsing its text output, so the
//! parser is exercised on every host.

#[cfg(windows)]
use std::process::Command;

#[cfg(windows)]
const REG_EXE: &str = "reg.exe";

/// Read a string value from the registry.
pub fn read_reg_string(hive: &str, subkey: &str, value_name: &str) -> Option<String> {
    let output = run_reg_query(hive, subkey, value_name)?;
    parse_reg_string(&output, value_name)
}

fn run_reg_query(hive: &str, subkey: &str, value_name: &str) -> Option<String> {
    #[cfg(windows)]
    {
        let full_key = format!(r"{}\{}", hive, subkey);
        let output = Command::new(REG_EXE)
            .args(["query", &full_key, "/v", value_name])
            .output()
            .ok()?;
        if !output.status.success() {
            tracing::debug!(key = %full_key, value_name, "registry value not present");
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).to_string())
    }
    #[cfg(not(windows))]
    {
        let _ = (hive, subkey, value_name);
        None
    }
}

/// Extracts a `REG_SZ`/`REG_EXPAND_SZ` value from `reg query` output.
///
/// Whitespace inside the value (e.g. `C:\Program Files\Tool`) is preserved.
pub(crate) fn parse_reg_string(output: &str, value_name: &str) -> Option<String> {
    for line in output.lines() {
        let line = line.trim();
        let Some((name, rest)) = split_field(line) else {
            continue;
        };
        if !name.eq_ignore_ascii_case(value_name) {
            continue;
        }
        let Some((reg_type, value)) = split_field(rest) else {
            continue;
        };
        return match reg_type {
            "REG_SZ" | "REG_EXPAND_SZ" if !value.is_empty() => Some(value.to_string()),
            _ => None,
        };
    }
    None
}

/// Splits off the first whitespace-delimited field, returning it and the
/// trimmed remainder.
fn split_field(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s.find(char::is_whitespace)?;
    Some((&s[..end], s[end..].trim()))
}
