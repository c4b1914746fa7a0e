//! Console messages and per-result live lines

use crate::core::constants::display;
use crate::core::types::{LiveStyle, ProbeResult, ScanMode};
use crate::ui::color::{Colors, colorize, emphasize};

/// Print a user-visible warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", display::WARNING_EMOJI, colorize(message, Colors::YELLOW));
}

/// Print a user-visible error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", display::ERROR_EMOJI, emphasize(message, Colors::RED));
}

/// Print a neutral notice to stdout
pub fn print_notice(message: &str) {
    println!("{}", colorize(message, Colors::CYAN));
}

/// Color used for a live line style
pub fn style_color(style: LiveStyle) -> &'static str {
    match style {
        LiveStyle::Success => Colors::GREEN,
        LiveStyle::Redirect => Colors::CYAN,
        LiveStyle::HttpError => Colors::YELLOW,
        LiveStyle::TransportError => Colors::RED,
        LiveStyle::PossibleBreach => Colors::BRIGHT_RED,
    }
}

/// Format the line streamed when a probe completes.
///
/// Directory mode separates URL and reason with ` - `, breach mode with ` -> `.
pub fn live_line(mode: ScanMode, result: &ProbeResult) -> String {
    let style = LiveStyle::for_status(mode, result.status);
    let separator = match mode {
        ScanMode::Directory => "-",
        ScanMode::Breach => "->",
    };

    let head = match style {
        LiveStyle::TransportError => format!("[{}] {}", display::ERROR_MARKER, result.job.url),
        LiveStyle::PossibleBreach => format!(
            "[{} {}] {}",
            display::BREACH_MARKER,
            result.status,
            result.job.url
        ),
        _ => format!("[{}] {}", result.status, result.job.url),
    };

    let head = if style == LiveStyle::PossibleBreach {
        emphasize(&head, style_color(style))
    } else {
        colorize(&head, style_color(style))
    };

    let mut line = format!("{head} {separator} {}", result.reason);
    if style == LiveStyle::Redirect && mode == ScanMode::Directory {
        line.push_str(" (redirect)");
    }
    line
}

/// Startup banner shown above the interactive menu
pub fn banner() -> String {
    let title = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));
    let subtitle = "Directory & data breach path scanner";
    crate::ui::table::render_panel(&format!("{title}\n{subtitle}"), Colors::BLUE)
}
