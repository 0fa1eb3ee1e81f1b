use clinica_common::config::Config;
use clinica_core::appointment::{self, DecoratorKind};

use colored::*;

use crate::terminal::{colors, print};

pub fn schedule(layers: &[DecoratorKind], cfg: &Config) {
    if !layers.is_empty() {
        let joined: Vec<String> = layers.iter().map(ToString::to_string).collect();
        print::aligned_line(
            "Add-ons",
            joined.join(" -> ").color(colors::ACCENT),
            cfg,
        );
    }
    let details = appointment::schedule(layers).details();
    print::details(&details);
}
