//! Experience view rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::EXPERIENCE;
use crate::theme::Theme;

/// Renders the career timeline.
pub struct ExperienceRenderer;

impl ExperienceRenderer {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, scroll: u16) {
        let paragraph = Paragraph::new(Self::lines(theme))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .style(Style::default().bg(theme.background).fg(theme.foreground));
        frame.render_widget(paragraph, area);
    }

    /// Logical line count, used by the app to clamp scrolling.
    pub fn line_count() -> usize {
        Self::lines(crate::theme::default_theme()).len()
    }

    fn lines(theme: &Theme) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(theme.primary[0])
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme.muted);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "CAREER JOURNEY",
                Style::default().fg(theme.primary[1]),
            )),
            Line::from(Span::styled("Professional Experience", heading)),
            Line::from(""),
        ];

        for entry in EXPERIENCE {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("◆ {} — {}", entry.role, entry.company),
                    Style::default()
                        .fg(theme.foreground)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({}, {})", entry.period, entry.status),
                    Style::default().fg(theme.primary[1]),
                ),
            ]));
            for responsibility in entry.responsibilities {
                lines.push(Line::from(Span::styled(
                    format!("    • {responsibility}"),
                    muted,
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("    [{}]", entry.technologies.join(", ")),
                Style::default().fg(theme.primary[0]),
            )));
            lines.push(Line::from(""));
        }
        lines
    }
}
