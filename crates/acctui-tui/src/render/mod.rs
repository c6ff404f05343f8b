//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use acctui_app::config::Screen;
use acctui_app::{AppState, ProfileStatus};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure projection of `state`; nothing here mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    let header = widgets::MainHeader::new(state.screen, icons).username(&state.profile.username);
    frame.render_widget(header, areas.header);

    match state.screen {
        Screen::Settings => {
            let panel = widgets::AccountPanel::new(
                &state.fields,
                &state.profile,
                &state.settings_view_state,
                icons,
            )
            .focused(state.can_edit());
            frame.render_widget(panel, areas.body);
        }
        Screen::Register => {
            let form = widgets::RegistrationForm::new(&state.registration, icons);
            frame.render_widget(form, areas.body);
        }
    }

    frame.render_widget(status_line(state, &icons), areas.status);
}

/// Profile load status shown under the active screen
fn status_line(state: &AppState, icons: &IconSet) -> Paragraph<'static> {
    let line = match &state.profile_status {
        ProfileStatus::Loading => Line::from(Span::styled(
            format!(" {} Loading account information...", icons.dot()),
            styles::tone_style(acctui_core::MessageTone::Pending),
        )),
        ProfileStatus::Failed(reason) => Line::from(vec![
            Span::styled(
                format!(" {} Could not load your account: ", icons.alert()),
                styles::tone_style(acctui_core::MessageTone::Error),
            ),
            Span::styled(reason.clone(), styles::text_secondary()),
            Span::styled("  (r to retry)", styles::text_muted()),
        ]),
        ProfileStatus::Loaded => Line::from(Span::styled(
            format!(" {} {}", icons.dot(), state.settings.server.base_url),
            styles::text_muted(),
        )),
    };
    Paragraph::new(line)
}
