use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

// ── Escape codes ────────────────────────────────────────────────────────────

/// Restores default terminal rendering. Appended after every colored blob.
pub const RESET: &str = "\x1b[0m";

/// Bold/bright start codes, indexed by `Color as usize`.
const STARTS: [&str; 7] = [
    "\x1b[1;31m", // red
    "\x1b[1;32m", // green
    "\x1b[1;33m", // yellow
    "\x1b[1;34m", // blue
    "\x1b[1;35m", // magenta
    "\x1b[1;36m", // cyan
    "\x1b[1;37m", // gray
];

/// One of the seven printable colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    /// Every color, in escape-code order.
    pub const ALL: [Color; 7] = [
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::Gray,
    ];

    /// The escape sequence that switches the terminal to this color.
    pub fn start(self) -> &'static str {
        STARTS[self as usize]
    }

    /// The foreground digit N in `ESC[1;3Nm`.
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Lowercase name, as accepted on the command line and in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Formatting ──────────────────────────────────────────────────────────────

/// Wrap the arguments in `color`'s start code and [`RESET`].
///
/// Arguments are joined with no separator: `["a", "b"]` and `["ab"]` paint
/// the same string.
pub fn paint<I, S>(color: Color, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from(color.start());
    for arg in args {
        out.push_str(arg.as_ref());
    }
    out.push_str(RESET);
    out
}

/// Same as [`paint`], with a trailing newline.
pub fn paint_line<I, S>(color: Color, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = paint(color, args);
    line.push('\n');
    line
}

/// Write one colored line to `out` in a single `write_all`.
pub fn write_line<W, I, S>(out: &mut W, color: Color, args: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    out.write_all(paint_line(color, args).as_bytes())
}

/// Print one colored line to stdout.
///
/// # Panics
///
/// Panics if writing to stdout fails, like `println!`.
pub fn print<I, S>(color: Color, args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_line(&mut out, color, args) {
        panic!("failed printing to stdout: {e}");
    }
}

// ── Per-color printers ──────────────────────────────────────────────────────

pub fn red<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Red, args);
}

pub fn green<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Green, args);
}

pub fn yellow<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Yellow, args);
}

pub fn blue<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Blue, args);
}

pub fn magenta<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Magenta, args);
}

pub fn cyan<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Cyan, args);
}

pub fn gray<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    print(Color::Gray, args);
}
