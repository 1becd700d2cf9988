use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use crate::color::{self, Color};
use crate::util::{escape_visible, pad_left, pad_right};

/// One row of the palette, as shown by `colorprint list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub code: u8,
    pub escape: String,
}

/// The full palette in escape-code order.
pub fn palette() -> Vec<PaletteEntry> {
    Color::ALL
        .iter()
        .map(|&c| PaletteEntry {
            name: c.name(),
            code: c.code(),
            escape: escape_visible(c.start()),
        })
        .collect()
}

// ── Table rendering ─────────────────────────────────────────────────────────

fn border(out: &mut String, widths: &[usize], left: char, mid: char, right: char) {
    out.push_str("  ");
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        out.push_str(&"─".repeat(w + 2));
        if i < widths.len() - 1 {
            out.push(mid);
        }
    }
    out.push(right);
    out.push('\n');
}

fn row(out: &mut String, fields: &[String]) {
    out.push_str("  │");
    for field in fields {
        // Writing into a String cannot fail.
        let _ = write!(out, " {field} │");
    }
    out.push('\n');
}

/// Render the palette as a boxed table, each sample painted in its own color.
pub fn render_palette_table() -> String {
    let entries = palette();
    let headers = ["Color", "Code", "Escape", "Sample"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();

    for entry in &entries {
        widths[0] = widths[0].max(entry.name.len());
        widths[1] = widths[1].max(entry.code.to_string().len());
        widths[2] = widths[2].max(entry.escape.len());
        widths[3] = widths[3].max(entry.name.len());
    }

    let mut out = String::new();
    border(&mut out, &widths, '╭', '┬', '╮');
    let header_fields: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 1 {
                pad_left(h, widths[i])
            } else {
                pad_right(h, widths[i])
            }
        })
        .collect();
    row(&mut out, &header_fields);
    border(&mut out, &widths, '├', '┼', '┤');

    for (entry, &c) in entries.iter().zip(Color::ALL.iter()) {
        let fields = [
            pad_right(entry.name, widths[0]),
            pad_left(&entry.code.to_string(), widths[1]),
            pad_right(&entry.escape, widths[2]),
            pad_right(&color::paint(c, [entry.name]), widths[3]),
        ];
        row(&mut out, &fields);
    }

    border(&mut out, &widths, '╰', '┴', '╯');
    out
}

/// Print the palette table to stdout.
pub fn print_palette_table() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    out.write_all(render_palette_table().as_bytes())?;
    writeln!(out)?;
    Ok(())
}
