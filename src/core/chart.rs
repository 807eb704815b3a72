//! Secondary descriptor handling: line-oriented rewriting of the Helm
//! chart's `version:` and `appVersion:` lines. Everything else in the file
//! is opaque and preserved verbatim.

use regex::Regex;

const VERSION_TAG: &str = "version:";
const APP_VERSION_TAG: &str = "appVersion:";

/// Value of the first `version:` line, if any.
pub fn current_version(content: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^version:(.*)$").unwrap();
    re.captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Rewrite every `version:` / `appVersion:` line to the new version,
/// normalized to `tag: value`. All other lines stay byte-for-byte as they
/// were, in their original order.
pub fn with_version(content: &str, next: &str) -> String {
    let version_re = Regex::new(r"(?m)^version:.*$").unwrap();
    let app_version_re = Regex::new(r"(?m)^appVersion:.*$").unwrap();

    let replaced = version_re.replace_all(content, format!("{} {}", VERSION_TAG, next));
    app_version_re
        .replace_all(&replaced, format!("{} {}", APP_VERSION_TAG, next))
        .into_owned()
}
