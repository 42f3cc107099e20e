//! Landing view rendering

use chrono::Datelike;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::content::PROFILE;
use crate::theme::Theme;

/// Renders the landing view: badge, name, tagline, summary, stats.
pub struct HeroRenderer;

impl HeroRenderer {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = vec![Line::from("")];

        // Roughly center vertically; the content is ~12 rows tall
        let pad = (area.height.saturating_sub(14) / 2) as usize;
        for _ in 0..pad {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!("● {}", PROFILE.badge),
            Style::default().fg(theme.primary[1]),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                "Hi, I'm ",
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} {}", PROFILE.first_name, PROFILE.last_name),
                Style::default()
                    .fg(theme.primary[0])
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            PROFILE.tagline,
            Style::default().fg(theme.primary[1]),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            PROFILE.summary,
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(""));

        let mut stat_spans = Vec::new();
        for stat in PROFILE.stats {
            stat_spans.push(Span::styled(
                format!("  {}  ", stat.value),
                Style::default()
                    .fg(theme.primary[0])
                    .add_modifier(Modifier::BOLD),
            ));
            stat_spans.push(Span::styled(
                format!("{}   ", stat.label),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(stat_spans));
        lines.push(Line::from(""));

        let mut social_spans = Vec::new();
        for social in PROFILE.socials {
            social_spans.push(Span::styled(
                format!("{}: ", social.label),
                Style::default().fg(theme.foreground),
            ));
            social_spans.push(Span::styled(
                format!("{}   ", social.url),
                Style::default().fg(theme.primary[1]),
            ));
        }
        lines.push(Line::from(social_spans));
        lines.push(Line::from(""));

        let year = chrono::Local::now().year();
        lines.push(Line::from(Span::styled(
            format!(
                "© {year} {} {} • \"{}\"",
                PROFILE.first_name,
                PROFILE.last_name,
                crate::content::FOOTER_TAGLINE
            ),
            Style::default().fg(theme.muted),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.background).fg(theme.foreground));
        frame.render_widget(paragraph, area);
    }
}
