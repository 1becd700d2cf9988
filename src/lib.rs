//! Print text wrapped in bold ANSI color codes.
//!
//! ```no_run
//! colorprint::green(["Build succeeded"]);
//! colorprint::red(["Error: ", "file not found"]);
//! ```

pub mod color;
pub mod config;
pub mod tui;
pub mod util;

pub use color::{Color, RESET, blue, cyan, gray, green, magenta, paint, paint_line, print, red, write_line, yellow};
