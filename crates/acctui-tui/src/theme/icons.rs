//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use acctui_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "\u{25c9}",   // ◉
        }
    }

    pub fn settings(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f013}", // nf-fa-cog
            IconMode::Unicode => "\u{2699}",   // ⚙
        }
    }

    pub fn info(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f05a}", // nf-fa-info_circle
            IconMode::Unicode => "\u{2139}",   // ℹ
        }
    }

    pub fn lock(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f023}", // nf-fa-lock
            IconMode::Unicode => "\u{25a3}",   // ▣
        }
    }

    pub fn link(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c1}", // nf-fa-link
            IconMode::Unicode => "\u{2192}",   // →
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn keyboard(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f11c}", // nf-fa-keyboard
            IconMode::Unicode => "\u{2328}",   // ⌨
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_icons_are_single_width_safe() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.check(), "✓");
        assert_eq!(icons.dot(), "●");
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.settings(), nerd.settings());
        assert_ne!(unicode.link(), nerd.link());
    }
}
