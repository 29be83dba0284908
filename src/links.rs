//! Active-link matching.
//!
//! A link counts as active when the current location path contains the
//! final segment of its target. Evaluated once at mount; pages reload on
//! navigation so there is nothing to keep in sync.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

/// Target with its query string and fragment removed.
fn target_path(href: &str) -> &str {
    href.split(['?', '#']).next().unwrap_or(href)
}

/// Final `/`-separated segment of a link target.
#[must_use]
pub fn target_segment(href: &str) -> &str {
    let path = target_path(href);
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether the link pointing at `href` is the one for `current_path`.
///
/// A target ending in `/` has an empty final segment, which every path
/// contains, so such links are always marked. Empty and fragment-only
/// targets are never marked.
#[must_use]
pub fn is_active_link(href: &str, current_path: &str) -> bool {
    if target_path(href).is_empty() {
        return false;
    }
    current_path.contains(target_segment(href))
}
