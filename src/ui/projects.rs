//! Projects view rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::PROJECTS;
use crate::theme::Theme;

/// Renders the featured-projects view as a vertical list of cards.
pub struct ProjectsRenderer;

impl ProjectsRenderer {
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
            Line::from(Span::styled("PORTFOLIO", Style::default().fg(theme.primary[1]))),
            Line::from(Span::styled("Featured Projects", heading)),
            Line::from(Span::styled(
                "A showcase of my technical expertise across data engineering, web \
                 development, and machine learning",
                muted,
            )),
            Line::from(""),
        ];

        for project in PROJECTS {
            lines.push(Line::from(Span::styled(
                format!("◆ {}", project.title),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  [{}]", project.tech_stack.join(", ")),
                Style::default().fg(theme.primary[1]),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", project.description),
                muted,
            )));
            if let Some(github) = project.github {
                lines.push(Line::from(Span::styled(
                    format!("  {github}"),
                    Style::default().fg(theme.primary[0]),
                )));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}
