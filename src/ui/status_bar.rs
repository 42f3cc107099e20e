//! Status bar rendering

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Section;
use crate::theme::Theme;

/// Renders the bottom bar: key hints, transient status message, and the
/// active theme name.
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        section: Section,
        editing: bool,
        status_message: &Option<String>,
    ) {
        let hints = if editing {
            "Tab next field | Enter newline/submit | Ctrl+S send | Esc done"
        } else if section == Section::Contact {
            "Enter edit form | Tab/1-6 navigate | t themes | q quit"
        } else {
            "Tab/1-6 navigate | Up/Down scroll | t themes | q quit"
        };

        let status = match status_message {
            Some(msg) => format!(" {msg} | {hints} | theme: {}", theme.name),
            None => format!(" {hints} | theme: {}", theme.name),
        };

        let line = Paragraph::new(status)
            .style(Style::default().fg(theme.background).bg(theme.primary[0]));
        frame.render_widget(line, area);
    }
}
