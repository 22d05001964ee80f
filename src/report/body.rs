use crate::report::diff::DiffEntry;
use crate::report::repo_url::resolve_url;
use crate::report::version::normalize;
use std::fmt::Write;

const CHANGED_LABEL: &str = "**Changed:**\n\n";
const ADDED_LABEL: &str = "**Added:**\n\n";

/// Hosts that serve `<repo>/compare/<old>...<new>`.
const COMPARE_HOST: &str = "github.com";

/// Renders the Markdown body of the update pull request.
///
/// Changed modules come first, added modules second. A section without
/// entries is left out entirely.
pub fn render(entries: &[DiffEntry]) -> String {
    let mut changed = String::new();
    let mut added = String::new();

    for entry in entries {
        match entry {
            DiffEntry::Changed {
                path,
                old_version,
                new_version,
            } => changed.push_str(&changed_line(path, old_version, new_version)),
            DiffEntry::Added { path, .. } => {
                let _ = writeln!(added, "* [{path}]({})", resolve_url(path));
            }
        }
    }

    let mut body = String::new();
    if !changed.is_empty() {
        body.push_str(CHANGED_LABEL);
        body.push_str(&changed);
    }
    if !added.is_empty() {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(ADDED_LABEL);
        body.push_str(&added);
    }
    body
}

fn changed_line(path: &str, old_version: &str, new_version: &str) -> String {
    let url = resolve_url(path);
    let prev = normalize(old_version);
    let cur = normalize(new_version);

    if url.contains(COMPARE_HOST) {
        format!("* [{path}]({url}) [{prev}...{cur}]({url}/compare/{prev}...{cur})\n")
    } else {
        format!("* [{path}]({url}) {prev}...{cur}\n")
    }
}
