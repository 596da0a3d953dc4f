//! Best-effort inference of device name and parser command from a filename.
//!
//! Filenames are expected to look like `<device>_<command>[_<suffix>].<ext>`,
//! e.g. `SW1-sh-int-status_01.txt`. Anything that doesn't fit falls back to
//! the supplied defaults; a wrong guess is never an error.

pub mod rules;

use std::path::Path;

use rules::{COMMAND_PATTERN, DEVICE_PATTERN, INT_PATTERN, REWRITES};

/// Display name given to standard input.
pub const STDIN_NAME: &str = "<stdin>";

fn is_stdin(path: &str) -> bool {
    path == "-" || path == STDIN_NAME
}

fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

pub fn device_name_from_filename(path: &str, default: &str) -> String {
    if is_stdin(path) {
        return default.to_string();
    }

    DEVICE_PATTERN
        .captures(base_name(path))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub fn parser_from_filename(path: &str, default: &str, os: &str) -> String {
    if is_stdin(path) {
        return default.to_string();
    }

    let Some(fragment) = COMMAND_PATTERN
        .captures(base_name(path))
        .and_then(|caps| caps.get(1))
    else {
        return default.to_string();
    };

    let command = expand_command(fragment.as_str(), os);
    if command.is_empty() {
        default.to_string()
    } else {
        command
    }
}

/// Run the rewrite table over a raw fragment such as `sh-int-status`.
pub fn expand_command(fragment: &str, os: &str) -> String {
    let rewritten = REWRITES
        .iter()
        .fold(fragment.to_string(), |acc, rule| rule.apply(&acc));

    // "show interfaces status" on IOS, "show interface ..." everywhere else
    let int_word = if rewritten.contains("status") && os.contains("ios") {
        "interfaces"
    } else {
        "interface"
    };
    let rewritten = INT_PATTERN.replace_all(&rewritten, int_word);

    rewritten.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: &str = "Device";
    const PARSER: &str = "show interface status";

    #[test]
    fn device_name_comes_before_show_token() {
        assert_eq!(device_name_from_filename("SW1-sh-vlan_01.txt", DEVICE), "SW1");
        assert_eq!(
            device_name_from_filename("/captures/core01_show-version.txt", DEVICE),
            "core01"
        );
    }

    #[test]
    fn device_name_falls_back_to_default() {
        assert_eq!(device_name_from_filename("output.txt", DEVICE), "Device");
        assert_eq!(device_name_from_filename("-", DEVICE), "Device");
        assert_eq!(device_name_from_filename(STDIN_NAME, DEVICE), "Device");
    }

    #[test]
    fn parser_is_inferred_from_abbreviated_command() {
        assert_eq!(parser_from_filename("SW1-sh-vlan_01.txt", PARSER, "nxos"), "show vlan");
        assert_eq!(
            parser_from_filename("MyDevice_show-vpc-brief_12345.txt", PARSER, "nxos"),
            "show vpc"
        );
    }

    #[test]
    fn int_depends_on_status_and_os() {
        assert_eq!(
            parser_from_filename("SW1-sh-int-status_01.txt", PARSER, "ios"),
            "show interfaces status"
        );
        assert_eq!(
            parser_from_filename("SW1-sh-int-status_01.txt", PARSER, "nxos"),
            "show interface status"
        );
        assert_eq!(
            parser_from_filename("SW1-sh-int-descr.txt", PARSER, "iosxe"),
            "show interface description"
        );
    }

    #[test]
    fn only_the_base_name_is_inspected() {
        assert_eq!(
            parser_from_filename("/data/show_dumps/R1-sh-clock.txt", PARSER, "ios"),
            "show clock"
        );
    }

    #[test]
    fn no_command_and_no_separator_keeps_default() {
        assert_eq!(parser_from_filename("capture", PARSER, "nxos"), PARSER);
        assert_eq!(parser_from_filename("show-vlan", "default", "nxos"), "default");
        assert_eq!(parser_from_filename("-", "default", "nxos"), "default");
    }
}
