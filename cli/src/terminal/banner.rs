use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
          ______ __    _____ _   __ ____ ______ ___
         / ____// /   /  _// | / //  _// ____//   |
        / /    / /    / / /  |/ / / / / /    / /| |
       / /___ / /___ / / / /|  /_/ / / /___ / ___ |
       \____//_____//___//_/ |_//___/ \____//_/  |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
