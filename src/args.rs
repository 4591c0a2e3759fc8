//! Conversion of raw command fragments into an argument vector.
//!
//! The rules are purely syntactic:
//! - a fragment wrapped in exactly one pair of double quotes (with no other quote
//!   inside) becomes a single argument with the quotes stripped;
//! - any other fragment is split on every space character, keeping empty pieces.
//!
//! There is no escaping and no nesting. Quotes that do not wrap the whole fragment
//! stay in the resulting tokens.

use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"([^"]*)"$"#).expect("quote pattern is valid"));

/// Build the argument vector for a sequence of command fragments.
///
/// Token order follows fragment order. An empty input yields an empty vector.
///
/// ```
/// use shell_exec::build_command_args;
/// let args = build_command_args(&["git commit", "-m", "\"first commit\""]);
/// assert_eq!(args, ["git", "commit", "-m", "first commit"]);
/// ```
pub fn build_command_args<S: AsRef<str>>(fragments: &[S]) -> Vec<String> {
    let mut args = Vec::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        match QUOTED.captures(fragment) {
            Some(caps) => args.push(caps[1].to_string()),
            None => args.extend(fragment.split(' ').map(str::to_string)),
        }
    }
    args
}
