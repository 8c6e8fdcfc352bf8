// src/api/http/pages.rs
// Inline HTML rendering for the browser-facing pages.

use crate::history::HistoryEntry;

/// Minimal HTML escaper for text interpolated into pages.
pub fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            other => other.to_string(),
        })
        .collect()
}

/// The calculator form, with the session's recent history underneath.
pub fn form_page(history: &[HistoryEntry]) -> String {
    let mut page = String::from(
        r#"<!DOCTYPE html>
<html>
<head><title>Calculator App</title></head>
<body>
  <h2>Calculator App</h2>
  <form method="post" action="/calculate">
    <input name="num1" type="number" step="any" required>
    <select name="op">
      <option value="+">+</option>
      <option value="-">-</option>
      <option value="*">*</option>
      <option value="/">/</option>
    </select>
    <input name="num2" type="number" step="any" required>
    <button type="submit">Calculate</button>
  </form>
"#,
    );

    if !history.is_empty() {
        page.push_str("  <h3>Recent calculations</h3>\n  <ul>\n");
        for entry in history {
            page.push_str(&format!(
                "    <li>{} = {}</li>\n",
                escape_html(&entry.expression),
                escape_html(&entry.result)
            ));
        }
        page.push_str("  </ul>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

pub fn result_page(value: f64) -> String {
    format!("<h2>Result: {value}</h2><a href=\"/\">Try again</a>")
}

pub fn error_page(message: &str) -> String {
    format!("<h2>Error: {}</h2><a href=\"/\">Try again</a>", escape_html(message))
}
