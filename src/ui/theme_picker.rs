//! Theme picker overlay rendering and state

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::{self, Theme};

/// Manages the theme picker popup: open/closed, the highlighted row, and
/// scrolling. Purely transient UI state; the active theme itself lives in
/// [`ThemeContext`](crate::theme::ThemeContext).
pub struct ThemePicker {
    visible: bool,
    selected: usize,
    scroll: usize,
}

impl ThemePicker {
    pub fn new() -> Self {
        Self {
            visible: false,
            selected: 0,
            scroll: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open the picker with the current theme highlighted.
    pub fn open(&mut self, current: &Theme) {
        self.visible = true;
        self.scroll = 0;
        self.selected = theme::themes()
            .iter()
            .position(|t| t.id == current.id)
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(theme::themes().len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// The theme under the highlight.
    pub fn selected_theme(&self) -> &'static Theme {
        &theme::themes()[self.selected]
    }

    /// Render the popup centered over `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, current: &Theme) {
        if !self.visible {
            return;
        }

        let width = 46.min(area.width);
        let height = ((theme::themes().len() as u16) * 2 + 4).min(area.height);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        // Keep the highlighted row inside the visible window
        let visible_rows = (popup.height.saturating_sub(4) / 2) as usize;
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if visible_rows > 0 && self.selected >= self.scroll + visible_rows {
            self.scroll = self.selected + 1 - visible_rows;
        }

        let mut lines = vec![];
        let end = (self.scroll + visible_rows.max(1)).min(theme::themes().len());
        for (idx, entry) in theme::themes()
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(end - self.scroll)
        {
            let is_selected = idx == self.selected;
            let is_current = entry.id == current.id;

            let marker = if is_selected { "> " } else { "  " };
            let mut spans = vec![Span::styled(
                marker,
                Style::default().fg(entry.primary[0]),
            )];
            // Three-stop swatch built from the preview gradient
            for stop in entry.preview {
                spans.push(Span::styled("██", Style::default().fg(stop)));
            }
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(entry.primary[0])
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(entry.foreground)
            };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {} ", entry.name), name_style));
            if is_current {
                spans.push(Span::styled(" ●", Style::default().fg(Color::Green)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(Span::styled(
                format!("    {}", entry.description),
                Style::default().fg(current.muted),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Up/Down select | Enter apply | Esc close ",
            Style::default().fg(current.muted),
        )));

        let popup_widget = Paragraph::new(lines)
            .style(Style::default().bg(current.secondary[0]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(current.primary[0]))
                    .title(" Choose Theme ")
                    .title_style(
                        Style::default()
                            .fg(current.primary[0])
                            .add_modifier(Modifier::BOLD),
                    ),
            );

        frame.render_widget(Clear, popup);
        frame.render_widget(popup_widget, popup);
    }
}

impl Default for ThemePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve_or_default;

    #[test]
    fn test_open_highlights_current_theme() {
        let mut picker = ThemePicker::new();
        picker.open(resolve_or_default("ocean"));
        assert!(picker.is_visible());
        assert_eq!(picker.selected_theme().id, "ocean");
    }

    #[test]
    fn test_selection_is_clamped_to_registry() {
        let mut picker = ThemePicker::new();
        picker.open(resolve_or_default("modern"));
        picker.select_prev();
        assert_eq!(picker.selected_theme().id, "modern");
        for _ in 0..100 {
            picker.select_next();
        }
        assert_eq!(
            picker.selected_theme().id,
            crate::theme::themes().last().unwrap().id
        );
    }
}
