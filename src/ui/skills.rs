//! Skills view rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::{SKILL_CATEGORIES, TOOLS};
use crate::theme::Theme;

const BAR_WIDTH: usize = 20;

/// Renders skill categories with proficiency bars plus the tools row.
pub struct SkillsRenderer;

impl SkillsRenderer {
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
            Line::from(Span::styled("EXPERTISE", Style::default().fg(theme.primary[1]))),
            Line::from(Span::styled("Technical Skills", heading)),
            Line::from(""),
        ];

        for category in SKILL_CATEGORIES {
            lines.push(Line::from(Span::styled(
                format!("◆ {}", category.title),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            )));
            for skill in category.skills {
                let filled = (skill.level as usize * BAR_WIDTH) / 100;
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<24}", skill.name), muted),
                    Span::styled(
                        "█".repeat(filled),
                        Style::default().fg(theme.primary[0]),
                    ),
                    Span::styled(
                        "░".repeat(BAR_WIDTH.saturating_sub(filled)),
                        Style::default().fg(theme.secondary[1]),
                    ),
                    Span::styled(format!(" {:>3}%", skill.level), muted),
                ]));
            }
            lines.push(Line::from(""));
        }

        let mut tool_spans = vec![Span::styled(
            "Tools: ",
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )];
        for (idx, tool) in TOOLS.iter().enumerate() {
            if idx > 0 {
                tool_spans.push(Span::styled(" | ", muted));
            }
            tool_spans.push(Span::styled(*tool, Style::default().fg(theme.primary[1])));
        }
        lines.push(Line::from(tool_spans));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill_never_exceeds_width() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                let filled = (skill.level as usize * BAR_WIDTH) / 100;
                assert!(filled <= BAR_WIDTH, "{}", skill.name);
            }
        }
    }
}
