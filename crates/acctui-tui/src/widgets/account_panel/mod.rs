//! Account settings panel widget
//!
//! Renders the field catalog grouped by section. Each field takes two rows:
//! title + control, then the message region coloured by its tone. The view
//! scrolls so the selected field's message stays visible.

mod styles;

#[cfg(test)]
mod tests;

use acctui_app::catalog::BASIC_SECTION;
use acctui_app::{FieldControl, FieldView, SettingsViewState};
use acctui_core::UserProfile;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles as theme};

use styles::{
    button_style, choosing_style, editing_style, kbd_accent_style, kbd_label_style, label_style,
    readonly_value_style, section_header_style, selected_row_bg, value_style, INDICATOR_WIDTH,
    LABEL_WIDTH, VALUE_WIDTH,
};

pub(crate) use styles::truncate_str;

/// One visual row of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelRow<'a> {
    Section(&'a str),
    Field(usize),
    Message(usize),
    Spacer,
}

/// Full-height panel of account settings fields
pub struct AccountPanel<'a> {
    fields: &'a [FieldView],
    profile: &'a UserProfile,
    view_state: &'a SettingsViewState,
    icons: IconSet,
    focused: bool,
}

impl<'a> AccountPanel<'a> {
    pub fn new(
        fields: &'a [FieldView],
        profile: &'a UserProfile,
        view_state: &'a SettingsViewState,
        icons: IconSet,
    ) -> Self {
        Self {
            fields,
            profile,
            view_state,
            icons,
            focused: true,
        }
    }

    /// Dim the border when the profile could not be loaded
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn rows(&self) -> Vec<PanelRow<'a>> {
        let fields = self.fields;
        let mut rows = Vec::with_capacity(fields.len() * 2 + 4);
        let mut current_section: Option<&str> = None;
        for (idx, field) in fields.iter().enumerate() {
            let section = field.descriptor.section.as_str();
            if current_section != Some(section) {
                if current_section.is_some() {
                    rows.push(PanelRow::Spacer);
                }
                rows.push(PanelRow::Section(section));
                current_section = Some(section);
            }
            rows.push(PanelRow::Field(idx));
            rows.push(PanelRow::Message(idx));
        }
        rows
    }
}

/// First row to draw so that `target` fits in `height` rows
fn scroll_offset(target: usize, height: usize) -> usize {
    (target + 1).saturating_sub(height)
}

impl Widget for AccountPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = theme::glass_block(self.focused)
            .title(Span::styled(" Account Settings ", theme::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        self.render_content(chunks[0], buf);
        self.render_footer(chunks[1], buf);
    }
}

impl AccountPanel<'_> {
    // ─────────────────────────────────────────────────────────────────────────────
    // Content Rendering
    // ─────────────────────────────────────────────────────────────────────────────

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows();
        let selected = self.view_state.selected_index;
        let target = rows
            .iter()
            .position(|r| *r == PanelRow::Message(selected))
            .unwrap_or(0);
        let offset = scroll_offset(target, area.height as usize);

        for (i, row) in rows.iter().skip(offset).enumerate() {
            if i >= area.height as usize {
                break;
            }
            let y = area.y + i as u16;
            match *row {
                PanelRow::Section(name) => self.render_section_header(area.x, y, area.width, buf, name),
                PanelRow::Field(idx) => self.render_field_row(area.x, y, area.width, buf, idx),
                PanelRow::Message(idx) => self.render_message_row(area.x, y, area.width, buf, idx),
                PanelRow::Spacer => {}
            }
        }
    }

    fn render_section_header(&self, x: u16, y: u16, width: u16, buf: &mut Buffer, section: &str) {
        let icon = if section == BASIC_SECTION {
            self.icons.user()
        } else {
            self.icons.info()
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", icon), section_header_style()),
            Span::styled(section.to_uppercase(), section_header_style()),
        ]);
        buf.set_line(x, y, &line, width);
    }

    fn fill_selected(&self, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        for col in x..x + width {
            if let Some(cell) = buf.cell_mut((col, y)) {
                cell.set_style(selected_row_bg());
            }
        }
    }

    fn render_field_row(&self, x: u16, y: u16, width: u16, buf: &mut Buffer, idx: usize) {
        let Some(field) = self.fields.get(idx) else {
            return;
        };
        let is_selected = idx == self.view_state.selected_index;
        let render = field.render(self.profile);

        if is_selected {
            self.fill_selected(x, y, width, buf);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("▎");
                cell.set_fg(palette::ACCENT);
            }
        }

        let mut col = x + INDICATOR_WIDTH;
        let right = x + width;
        if col >= right {
            return;
        }

        let label = truncate_str(&render.title, LABEL_WIDTH as usize - 1);
        buf.set_stringn(
            col,
            y,
            &label,
            (right - col) as usize,
            label_style(is_selected),
        );
        col += LABEL_WIDTH;
        if col >= right {
            return;
        }

        let value_width = VALUE_WIDTH.min(right - col) as usize;
        let (text, style) = self.control_text(&render.control, is_selected);
        buf.set_stringn(col, y, truncate_str(&text, value_width), value_width, style);
    }

    fn control_text(&self, control: &FieldControl, is_selected: bool) -> (String, Style) {
        match control {
            FieldControl::Value(value) => (
                format!("{} {}", self.icons.lock(), value),
                readonly_value_style(),
            ),
            FieldControl::Input(_) if is_selected && self.view_state.editing => (
                format!("{}▌", self.view_state.edit_buffer),
                editing_style(),
            ),
            FieldControl::Input(value) if value.is_empty() => {
                ("(empty)".to_string(), value_style(true, is_selected))
            }
            FieldControl::Input(value) => (value.clone(), value_style(false, is_selected)),
            FieldControl::Select { options, selected } => {
                let choosing = if is_selected {
                    self.view_state.dropdown_cursor
                } else {
                    None
                };
                let index = choosing.unwrap_or(*selected);
                let label = options
                    .get(index)
                    .map(|o| o.label.as_str())
                    .filter(|l| !l.is_empty())
                    .unwrap_or("(none)");
                match choosing {
                    Some(_) => (format!("‹ {} ›", label), choosing_style()),
                    None => (
                        format!("{} ▾", label),
                        value_style(label == "(none)", is_selected),
                    ),
                }
            }
            FieldControl::Button(title) => (
                format!("[ {} {} ]", self.icons.link(), title),
                button_style(is_selected),
            ),
        }
    }

    fn render_message_row(&self, x: u16, y: u16, width: u16, buf: &mut Buffer, idx: usize) {
        let Some(field) = self.fields.get(idx) else {
            return;
        };
        if idx == self.view_state.selected_index {
            self.fill_selected(x, y, width, buf);
        }

        let render = field.render(self.profile);
        if render.message.is_empty() {
            return;
        }
        let col = x + INDICATOR_WIDTH + LABEL_WIDTH;
        if col >= x + width {
            return;
        }
        let available = (x + width - col) as usize;
        buf.set_stringn(
            col,
            y,
            truncate_str(&render.message, available),
            available,
            theme::tone_style(render.tone),
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Footer
    // ─────────────────────────────────────────────────────────────────────────────

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let hints: &[(&str, &str)] = if self.view_state.editing {
            &[("Enter:", "Save"), ("Esc:", "Cancel"), ("Ctrl+U:", "Clear")]
        } else if self.view_state.dropdown_cursor.is_some() {
            &[("h/l:", "Choose"), ("Enter:", "Save"), ("Esc:", "Cancel")]
        } else {
            &[
                ("Tab:", "Register"),
                ("j/k:", "Navigate"),
                ("Enter:", "Edit"),
                ("r:", "Reload"),
                ("q:", "Quit"),
            ]
        };

        let mut spans = vec![Span::styled(
            format!("{} ", self.icons.keyboard()),
            kbd_label_style(),
        )];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(*key, kbd_accent_style()));
            spans.push(Span::styled(format!(" {}", label), kbd_label_style()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
