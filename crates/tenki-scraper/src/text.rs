//! Text extraction from the first element matched by a locator.

use scraper::{ElementRef, Selector};

/// Concatenated text of every descendant text node, like DOM `textContent`.
pub(crate) fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Returns the text of the first element under `node` matching `locator`,
/// with every newline and tab removed (internal ones included). Other
/// whitespace is kept as-is.
///
/// Returns `None` when nothing matches.
#[must_use]
pub fn extract_text(node: ElementRef<'_>, locator: &Selector) -> Option<String> {
    let element = node.select(locator).next()?;
    Some(
        text_content(element)
            .chars()
            .filter(|c| !matches!(c, '\n' | '\t'))
            .collect(),
    )
}

/// Returns the non-empty lines of the first element under `node` matching
/// `locator`, in document order. Lines are split on `\n` only and are not
/// trimmed.
///
/// Returns `None` when nothing matches.
#[must_use]
pub fn extract_lines(node: ElementRef<'_>, locator: &Selector) -> Option<Vec<String>> {
    let element = node.select(locator).next()?;
    Some(
        text_content(element)
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
#[path = "text_test.rs"]
mod tests;
