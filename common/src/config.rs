/// Runtime options collected from the command line.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Suppresses the banner.
    pub no_banner: bool,
    /// Disables ANSI colours in every printed line.
    pub no_color: bool,
    /// Quietness level.
    ///
    /// `0` prints everything, `1` drops headers and narration, `2` and above
    /// leaves only the pattern output itself.
    pub quiet: u8,
}

impl Config {
    /// Whether headers and narration lines should be printed.
    pub fn narrate(&self) -> bool {
        self.quiet == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_narrates() {
        let cfg = Config::default();
        assert!(cfg.narrate());
        assert!(!cfg.no_banner);
    }

    #[test]
    fn quiet_config_does_not_narrate() {
        let cfg = Config {
            quiet: 1,
            ..Config::default()
        };
        assert!(!cfg.narrate());
    }
}
