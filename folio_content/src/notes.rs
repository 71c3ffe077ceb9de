// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dated notes panel.
//!
//! A notes document is a list of `## <date>` sections. Only the sections whose
//! date appears in the display list are shown, rendered with a deliberately
//! small subset of Markdown: `## ` headings and paragraphs, where single line
//! breaks inside a paragraph are kept as `<br>`.

/// Sections of `markdown` whose `## <date>` heading names one of `dates`.
///
/// Sections keep their document order. Text before the first heading is never
/// included.
pub fn entries_for_dates<S: AsRef<str>>(markdown: &str, dates: &[S]) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut collecting = false;
    for line in markdown.split('\n') {
        if let Some(date) = line.strip_prefix("## ") {
            let date = date.trim();
            collecting = dates.iter().any(|d| d.as_ref() == date);
        }
        if collecting {
            kept.push(line);
        }
    }
    kept.join("\n")
}

/// Render the notes subset to HTML.
///
/// ```
/// use folio_content::render_notes;
///
/// assert_eq!(
///     render_notes("## 2024-05-01\nfirst\nsecond\n\nthird"),
///     "<h2>2024-05-01</h2><p>first<br>second</p><p>third</p>"
/// );
/// ```
pub fn render_notes(markdown: &str) -> String {
    let mut html = String::new();
    let mut in_paragraph = false;
    for line in markdown.split('\n').map(str::trim) {
        if let Some(heading) = line.strip_prefix("## ") {
            if in_paragraph {
                html.push_str("</p>");
                in_paragraph = false;
            }
            html.push_str("<h2>");
            html.push_str(heading);
            html.push_str("</h2>");
        } else if line.is_empty() {
            if in_paragraph {
                html.push_str("</p>");
                in_paragraph = false;
            }
        } else {
            html.push_str(if in_paragraph { "<br>" } else { "<p>" });
            in_paragraph = true;
            html.push_str(line);
        }
    }
    if in_paragraph {
        html.push_str("</p>");
    }
    html
}
