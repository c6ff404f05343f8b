//! Registration form widget
//!
//! Labelled inputs stacked vertically. A label is highlighted while its
//! focus flag is set; the success and error banners sit above the inputs.

use acctui_app::RegistrationState;
use acctui_core::MessageTone;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

use super::account_panel::truncate_str;

const INPUT_WIDTH: u16 = 44;

pub struct RegistrationForm<'a> {
    state: &'a RegistrationState,
    icons: IconSet,
}

impl<'a> RegistrationForm<'a> {
    pub fn new(state: &'a RegistrationState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

fn label_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        styles::text_secondary()
    }
}

fn input_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::BORDER_DIM)
    } else {
        styles::text_primary().bg(palette::SURFACE)
    }
}

impl Widget for RegistrationForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(Span::styled(" Register ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let x = inner.x + 2;
        let width = inner.width - 4;
        let bottom = inner.bottom();
        let mut y = inner.y + 1;

        // Banners
        if let Some(link) = &self.state.success {
            let line = Line::from(vec![
                Span::raw(format!(" {} Account created: ", self.icons.check())),
                Span::styled(
                    link.username.clone(),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
                Span::raw(format!(" ({}) ", link.href)),
            ]);
            y = self.render_banner(x, y, width, bottom, buf, line, styles::success_banner());
        }
        if let Some(error) = &self.state.error {
            let line = Line::from(format!(" {} {} ", self.icons.alert(), error));
            y = self.render_banner(x, y, width, bottom, buf, line, styles::error_banner());
        }

        // Inputs: label row, value row, spacer
        let input_width = INPUT_WIDTH.min(width);
        for (idx, input) in self.state.form.inputs.iter().enumerate() {
            if y + 1 >= bottom {
                break;
            }
            let label_focused = self.state.is_label_focused(idx);
            buf.set_stringn(x, y, &input.label, width as usize, label_style(label_focused));

            let is_focused = self.state.focused == Some(idx);
            let shown = if input.secret {
                "•".repeat(input.value.chars().count())
            } else {
                input.value.clone()
            };
            let text = if is_focused {
                format!("{}▌", shown)
            } else {
                shown
            };
            let style = input_style(is_focused);
            for col in x..x + input_width {
                if let Some(cell) = buf.cell_mut((col, y + 1)) {
                    cell.set_style(style).set_char(' ');
                }
            }
            buf.set_stringn(
                x + 1,
                y + 1,
                truncate_str(&text, input_width.saturating_sub(2) as usize),
                input_width.saturating_sub(2) as usize,
                style,
            );
            y += 3;
        }

        // Submit hint
        if y < bottom {
            let hint = if self.state.submitting {
                Line::from(Span::styled(
                    "Creating account...",
                    styles::tone_style(MessageTone::Pending),
                ))
            } else {
                Line::from(vec![
                    Span::styled("j/k:", styles::accent()),
                    Span::styled(" Focus   ", styles::text_muted()),
                    Span::styled("Enter:", styles::accent()),
                    Span::styled(" Create Account   ", styles::text_muted()),
                    Span::styled("Esc:", styles::accent()),
                    Span::styled(" Unfocus   ", styles::text_muted()),
                    Span::styled("Tab:", styles::accent()),
                    Span::styled(" Settings", styles::text_muted()),
                ])
            };
            Paragraph::new(hint).render(Rect::new(x, y, width, 1), buf);
        }
    }
}

impl RegistrationForm<'_> {
    /// Draw a one-row banner and return the next free row
    #[allow(clippy::too_many_arguments)]
    fn render_banner(
        &self,
        x: u16,
        y: u16,
        width: u16,
        bottom: u16,
        buf: &mut Buffer,
        line: Line<'_>,
        style: Style,
    ) -> u16 {
        if y >= bottom {
            return y;
        }
        Paragraph::new(line)
            .style(style)
            .render(Rect::new(x, y, width, 1), buf);
        y + 2
    }
}
