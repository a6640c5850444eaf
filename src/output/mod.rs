//! Terminal rendering helpers.
//!
//! Model responses are markdown; rendering stays light — a dimmed rule
//! above and below each block, heading lines bold, code-fence markers
//! dimmed. Everything else passes through untouched.

use colored::Colorize;

/// Horizontal rule printed above and below rendered blocks.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Frame `text` between separator rules with light markdown styling.
pub fn render_block(text: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", SEPARATOR.dimmed()));
    for line in text.trim_end().lines() {
        out.push_str(&style_line(line));
        out.push('\n');
    }
    out.push_str(&format!("{}\n", SEPARATOR.dimmed()));
    out
}

fn style_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        line.bold().to_string()
    } else if trimmed.starts_with("```") {
        line.dimmed().to_string()
    } else {
        line.to_string()
    }
}
