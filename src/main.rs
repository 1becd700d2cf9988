use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use colorprint::color::{self, Color};
use colorprint::config::ColorPrintConfig;
use colorprint::tui::display::{palette, print_palette_table};

// ── CLI definition ──────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "colorprint",
    about = "Print text wrapped in bold ANSI colors",
    long_about = "colorprint joins its arguments without a separator, wraps them in \
                  a bold ANSI color code and a reset code, and prints the result \
                  followed by a newline. Output is colored unconditionally.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Text {
    /// Text to print (arguments are joined with no separator)
    ///
    /// A leading `--` or `--help` is taken by the parser; pass `-- --help`
    /// to print the literal text. A `--` after the first value is printed.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print in bold red
    Red(Text),
    /// Print in bold green
    Green(Text),
    /// Print in bold yellow
    Yellow(Text),
    /// Print in bold blue
    Blue(Text),
    /// Print in bold magenta
    Magenta(Text),
    /// Print in bold cyan
    Cyan(Text),
    /// Print in bold gray
    Gray(Text),
    /// Print in the given color, or the configured default
    Print {
        /// Color to use (falls back to the config's default_color)
        #[arg(short, long, value_enum)]
        color: Option<Color>,
        #[command(flatten)]
        text: Text,
    },
    /// Show the available colors
    List {
        /// Output the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage colorprint configuration
    Config {
        /// Show the current config
        #[arg(long)]
        show: bool,
        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
        /// Set the color used by `print` when --color is omitted
        #[arg(long, value_enum)]
        default_color: Option<Color>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", color::paint(Color::Red, ["Error:"]), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Red(t) => color::red(t.text),
        Commands::Green(t) => color::green(t.text),
        Commands::Yellow(t) => color::yellow(t.text),
        Commands::Blue(t) => color::blue(t.text),
        Commands::Magenta(t) => color::magenta(t.text),
        Commands::Cyan(t) => color::cyan(t.text),
        Commands::Gray(t) => color::gray(t.text),
        Commands::Print { color, text } => return cmd_print(color, text.text),
        Commands::List { json } => return cmd_list(json),
        Commands::Config {
            show,
            reset,
            default_color,
        } => return cmd_config(show, reset, default_color),
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────────

/// Print with an explicit or configured color.
fn cmd_print(choice: Option<Color>, text: Vec<String>) -> Result<()> {
    let c = match choice {
        Some(c) => c,
        None => ColorPrintConfig::load().default_color.ok_or_else(|| {
            anyhow::anyhow!(
                "No color given. Pass --color or set one with `colorprint config --default-color <COLOR>`"
            )
        })?,
    };
    color::print(c, text);
    Ok(())
}

/// Show the palette.
fn cmd_list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&palette())?);
    } else {
        print_palette_table()?;
    }
    Ok(())
}

/// Manage configuration.
fn cmd_config(show: bool, reset: bool, default_color: Option<Color>) -> Result<()> {
    let config_path = ColorPrintConfig::config_path();

    if reset {
        ColorPrintConfig::default().save()?;
        color::green(["✓ Config reset to defaults."]);
        println!("  → {}", config_path.display());
        return Ok(());
    }

    if let Some(c) = default_color {
        let mut config = ColorPrintConfig::load();
        config.default_color = Some(c);
        config.save()?;
        println!(
            "{} Default color set to {}.",
            color::paint(Color::Green, ["✓"]),
            color::paint(c, [c.name()]),
        );
        return Ok(());
    }

    let config = ColorPrintConfig::load();
    if show {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Default: show config location and current state
    println!("\n  colorprint configuration\n");
    println!("  Config file: {}", config_path.display());
    println!(
        "  Exists:      {}",
        if config_path.exists() {
            color::paint(Color::Green, ["yes"])
        } else {
            color::paint(Color::Gray, ["no (using defaults)"])
        }
    );
    println!("\n{}", serde_json::to_string_pretty(&config)?);
    println!(
        "\n  → Use {}, {} or {} to manage.\n",
        color::paint(Color::Cyan, ["--show"]),
        color::paint(Color::Cyan, ["--reset"]),
        color::paint(Color::Cyan, ["--default-color"]),
    );

    Ok(())
}
