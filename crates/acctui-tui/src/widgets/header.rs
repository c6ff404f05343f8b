//! Header bar widget
//!
//! App title, screen tabs and the signed-in username.

use acctui_app::config::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

const SCREENS: [Screen; 2] = [Screen::Settings, Screen::Register];

pub struct MainHeader<'a> {
    screen: Screen,
    username: Option<&'a str>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(screen: Screen, icons: IconSet) -> Self {
        Self {
            screen,
            username: None,
            icons,
        }
    }

    pub fn username(mut self, username: &'a str) -> Self {
        if !username.is_empty() {
            self.username = Some(username);
        }
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(format!(" {} ", self.icons.settings()), styles::accent()),
            Span::styled("Account Console", styles::accent_bold()),
            Span::raw("  "),
        ];
        for screen in SCREENS {
            let style = if screen == self.screen {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", screen.label()), style));
            spans.push(Span::raw(" "));
        }
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);

        // Right: signed-in user
        let (icon_style, user) = match self.username {
            Some(name) => (styles::accent(), name),
            None => (styles::text_muted(), "not signed in"),
        };
        let user_line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.user()), icon_style),
            Span::styled(user, styles::text_primary()),
            Span::raw(" "),
        ]);
        let width = user_line.width() as u16;
        if width < inner.width / 2 {
            buf.set_line(inner.right() - width, inner.y, &user_line, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use acctui_app::config::IconMode;

    #[test]
    fn test_header_shows_title_tabs_and_user() {
        let mut term = TestTerminal::with_size(100, 3);
        let header = MainHeader::new(Screen::Settings, IconSet::new(IconMode::Unicode))
            .username("Legolas");
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Account Console"));
        assert!(term.buffer_contains("Account Settings"));
        assert!(term.buffer_contains("Register"));
        assert!(term.buffer_contains("Legolas"));
    }

    #[test]
    fn test_header_without_profile() {
        let mut term = TestTerminal::with_size(100, 3);
        let header = MainHeader::new(Screen::Register, IconSet::new(IconMode::Unicode)).username("");
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("not signed in"));
    }
}
