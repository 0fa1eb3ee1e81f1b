use std::fmt::Display;

use crate::mprint;
use crate::terminal::{banner, colors};
use clinica_common::config::Config;
use clinica_core::appointment::{BASIC_MESSAGE, Details};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "clinica::print";

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || !cfg.narrate() {
        return;
    }

    let text_content: String = format!("⟦ CLINICA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
    banner::print();
}

pub fn header(msg: &str, cfg: &Config) {
    if !cfg.narrate() {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

/// Narration between pattern outputs, dropped when quiet.
pub fn narrate(msg: &str, cfg: &Config) {
    if !cfg.narrate() {
        return;
    }
    print(&format!("{}", msg.color(colors::SECONDARY)));
}

pub fn blank(cfg: &Config) {
    if cfg.narrate() {
        mprint!();
    }
}

pub fn aligned_line<V>(key: &str, value: V, cfg: &Config)
where
    V: Display + WithDefaultColor,
{
    if cfg.quiet > 1 {
        return;
    }
    let colon: ColoredString = ":".color(colors::SEPARATOR);
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Prints an appointment's lines, base description first, markers highlighted.
pub fn details(details: &Details) {
    for line in details.lines() {
        let color = if line == BASIC_MESSAGE {
            colors::TEXT_DEFAULT
        } else {
            colors::MARKER
        };
        print(&format!("{}", line.color(color)));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn end_of_program(cfg: &Config) {
    if !cfg.narrate() {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
