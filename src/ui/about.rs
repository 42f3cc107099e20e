//! About view rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{ABOUT_HEADING, ABOUT_SUMMARY, CERTIFICATIONS, CORE_COMPETENCIES, HIGHLIGHTS, SERVICES};
use crate::theme::Theme;

/// Renders the about view: intro, services, background cards,
/// certifications, and core competencies.
pub struct AboutRenderer;

impl AboutRenderer {
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
        let label = Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme.muted);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("ABOUT ME", Style::default().fg(theme.primary[1]))),
            Line::from(Span::styled(ABOUT_HEADING, heading)),
            Line::from(""),
            Line::from(Span::styled(ABOUT_SUMMARY, muted)),
            Line::from(""),
            Line::from(Span::styled("What I Do", heading)),
        ];

        for service in SERVICES {
            lines.push(Line::from(vec![
                Span::styled(format!("  ▪ {}", service.title), label),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", service.description),
                muted,
            )));
        }

        lines.push(Line::from(""));
        for card in HIGHLIGHTS {
            lines.push(Line::from(Span::styled(format!("◆ {}", card.title), heading)));
            lines.push(Line::from(Span::styled(format!("  {}", card.body), muted)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("Certifications", heading)));
        for cert in CERTIFICATIONS {
            lines.push(Line::from(Span::styled(format!("  ▪ {}", cert.title), label)));
            lines.push(Line::from(Span::styled(
                format!("    {}", cert.description),
                muted,
            )));
        }

        lines.push(Line::from(""));
        let mut competency_spans = vec![Span::styled("Core Competencies: ", label)];
        for (idx, competency) in CORE_COMPETENCIES.iter().enumerate() {
            if idx > 0 {
                competency_spans.push(Span::styled(" | ", muted));
            }
            competency_spans.push(Span::styled(*competency, Style::default().fg(theme.primary[1])));
        }
        lines.push(Line::from(competency_spans));
        lines
    }
}
