// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markdown to HTML for the content panel.

use pulldown_cmark::{Options, Parser, html};

/// Render a content document to HTML.
///
/// Tables and strikethrough are enabled; everything else is CommonMark.
///
/// ```
/// assert_eq!(folio_content::render_markdown("*hi*"), "<p><em>hi</em></p>\n");
/// ```
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headings_and_paragraphs() {
        assert_eq!(
            render_markdown("# Title\n\nBody text."),
            "<h1>Title</h1>\n<p>Body text.</p>\n"
        );
    }

    #[test]
    fn extensions_enabled() {
        assert_eq!(render_markdown("~~gone~~"), "<p><del>gone</del></p>\n");
        let table = render_markdown("| a |\n|---|\n| 1 |\n");
        assert!(table.starts_with("<table>"), "{table}");
    }

    #[test]
    fn empty_document() {
        assert_eq!(render_markdown(""), "");
    }
}
