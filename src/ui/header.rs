//! Navigation tab bar rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Section;
use crate::content::PROFILE;
use crate::theme::Theme;

/// Renders the top bar: name on the left, one tab per section.
pub struct HeaderRenderer;

impl HeaderRenderer {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, active: Section) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", PROFILE.first_name),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", PROFILE.last_name),
                Style::default()
                    .fg(theme.primary[0])
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];

        for (idx, section) in Section::ALL.iter().enumerate() {
            let is_active = *section == active;
            let style = if is_active {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary[1])
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted)
            };
            spans.push(Span::styled(
                format!(" {} {} ", idx + 1, section.title()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.secondary[0]));
        frame.render_widget(paragraph, area);
    }
}
