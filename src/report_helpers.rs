use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Display width of the widest label, never narrower than `heading`.
pub fn max_label_width<'a>(labels: impl Iterator<Item = &'a str>, heading: &str) -> usize {
    labels
        .map(|label| label.width())
        .max()
        .unwrap_or(0)
        .max(heading.width())
}

/// Left-align `text` in a column `width` terminal cells wide.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
