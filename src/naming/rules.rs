use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Ordered rewrites applied to a raw command fragment taken from a filename.
///
/// Order matters: dashes become spaces first so abbreviations are whole
/// words, then abbreviations are expanded, then a few two-word phrases are
/// hyphenated back into the command names the parser knows.
pub const REWRITE_RULES: &[(&str, &str)] = &[
    // separators
    (r"-", " "),
    // abbreviations
    (r"\bsho?\b", "show"),
    (r"\brunn?\b", "running-config"),
    (r"\bspan?\b", "spanning-tree"),
    (r"\bneig?h?b?\b", "neighbors"),
    (r"\bdet\b", "detail"),
    (r"\bdescr?\b", "description"),
    (r"\bsumm?\b", "summary"),
    // hyphenated command words
    (r"\brunning config\b", "running-config"),
    (r"\bspanning tree\b", "spanning-tree"),
    (r"\bport channel\b", "port-channel"),
    (r"\bfeature set\b", "feature-set"),
    (r"\baccess list\b", "access-list"),
    // no parser exists under the literal name
    (r"show vpc brief", "show vpc"),
    (r"show feature-set", "show feature"),
];

pub struct Rewrite {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl Rewrite {
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, NoExpand(self.replacement))
            .into_owned()
    }
}

pub static REWRITES: Lazy<Vec<Rewrite>> = Lazy::new(|| {
    REWRITE_RULES
        .iter()
        .map(|(pattern, replacement)| Rewrite {
            pattern: Regex::new(pattern).expect("rewrite patterns are valid"),
            replacement,
        })
        .collect()
});

/// Leading device segment: everything up to the last `-sh`/`_sh`.
pub static DEVICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)[-_]sh").expect("device pattern is valid"));

/// First `sh`/`sho`/`show` token, lazily up to the next `_` or `.`.
pub static COMMAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[-_ ])(sh(?:ow|o)?(?:[- ].*?)?)[_.]").expect("command pattern is valid")
});

pub static INT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bint\b").expect("int pattern is valid"));
