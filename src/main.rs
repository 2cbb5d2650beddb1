use clap::Parser;
use colored::{Color, Colorize};
use console::Style;
use neatly::error::{NeatlyError, Result};
use neatly::logging::{ChannelRegistry, Severity};
use neatly::numeric::{divide_precise, percentage};
use neatly::text::{kebab_case, truncate};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Logging { level, log_file } => handle_logging(&level, log_file),
        Commands::Strings => handle_strings(),
        Commands::Math => handle_math(),
    }
}

fn handle_logging(level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let threshold = Severity::from_str(level).map_err(NeatlyError::InvalidInput)?;

    print_banner("logging demo");

    let registry = ChannelRegistry::new();
    let channel = registry.configure("demo", threshold, log_file.as_deref())?;

    println!();
    println!("{}", "✓ Channel configured".green());
    println!("{}", format!("  threshold: {}", channel.threshold()).dimmed());
    println!("{}", format!("  sinks: {}", channel.sink_count()).dimmed());
    println!();

    channel.debug("This message only shows at the debug threshold");
    channel.info("Logger is working correctly!");
    channel.warning("This is a warning message");
    channel.error("This is an error message (expected)");

    if let Some(path) = &log_file {
        println!();
        println!(
            "{}",
            format!("Log lines appended to {}", path.display()).yellow()
        );
    }

    print_footer("Logging demo completed!");
    Ok(())
}

fn handle_strings() -> Result<()> {
    print_banner("string demo");

    let cases = [
        ("Hello World From Neatly", 15),
        ("This is a very long string that needs truncation", 20),
        ("Short", 50),
        ("some_snake_case input", 50),
    ];

    let rows: Vec<Vec<String>> = cases
        .iter()
        .map(|(text, max_length)| {
            vec![
                (*text).to_string(),
                truncate(text, *max_length),
                kebab_case(text),
            ]
        })
        .collect();

    println!();
    print_table(
        &["Original", "Truncated", "Kebab case"],
        &rows,
        &[Color::Yellow, Color::Cyan, Color::Magenta],
    );

    print_footer("String demo completed!");
    Ok(())
}

fn handle_math() -> Result<()> {
    print_banner("math demo");

    let divisions = [
        (100.0, 3.0, 4),
        (22.0, 7.0, 6),
        (1.0, 3.0, 10),
        (10.0, 4.0, 2),
    ];
    let mut rows = Vec::new();
    for (numerator, denominator, places) in divisions {
        let result = divide_precise(numerator, denominator, places)?;
        rows.push(vec![
            format!("{} / {}", numerator, denominator),
            format!("{} decimals", places),
            result.to_string(),
        ]);
    }

    println!();
    println!("{}", "Precise division".bold());
    print_table(
        &["Operation", "Precision", "Result"],
        &rows,
        &[Color::Yellow, Color::White, Color::Cyan],
    );

    let percentages = [(25.0, 100.0), (3.0, 4.0), (1.0, 3.0)];
    let mut rows = Vec::new();
    for (value, total) in percentages {
        let result = percentage(value, total, 2)?;
        rows.push(vec![format!("{}/{}", value, total), format!("{}%", result)]);
    }

    println!();
    println!("{}", "Percentages".bold());
    print_table(
        &["Fraction", "Percentage"],
        &rows,
        &[Color::Yellow, Color::Cyan],
    );

    print_footer("Math demo completed!");
    Ok(())
}

static BANNER_STYLE: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());

const BANNER_RULE: &str = "============================================================";

fn print_banner(title: &str) {
    let full = format!("Neatly v{} - {}", env!("CARGO_PKG_VERSION"), title);
    println!("{}", BANNER_STYLE.apply_to(BANNER_RULE));
    println!("{}", BANNER_STYLE.apply_to(full));
    println!("{}", BANNER_STYLE.apply_to(BANNER_RULE));
}

fn print_footer(message: &str) {
    println!();
    println!("{}", message.green().bold());
}

fn print_table(headers: &[&str], rows: &[Vec<String>], colors: &[Color]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad_cell(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.width()).dimmed());

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_cell(cell, widths[i]).color(colors[i]).to_string())
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
}

fn pad_cell(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}
