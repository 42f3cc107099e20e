//! Contact form state and rendering

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::mail::ContactMessage;
use crate::theme::Theme;

/// Which input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Submission lifecycle, mirrored in the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Editable contact form: field values, focus, and submit status.
pub struct ContactForm {
    pub message: ContactMessage,
    focus: FormField,
    editing: bool,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            message: ContactMessage::default(),
            focus: FormField::Name,
            editing: false,
            status: SubmitStatus::Idle,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        };
    }

    pub fn insert_char(&mut self, c: char) {
        self.field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.field_mut().pop();
    }

    /// Newlines are only meaningful in the message body.
    pub fn insert_newline(&mut self) {
        if self.focus == FormField::Message {
            self.message.message.push('\n');
        }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    /// Clear the fields after a successful send, like the source form.
    pub fn clear_fields(&mut self) {
        self.message = ContactMessage::default();
        self.focus = FormField::Name;
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.message.name,
            FormField::Email => &mut self.message.email,
            FormField::Message => &mut self.message.message,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the contact view and places the cursor in the focused field.
pub struct ContactRenderer;

const FIELD_INDENT: u16 = 11;

impl ContactRenderer {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, form: &ContactForm) {
        let heading = Style::default()
            .fg(theme.primary[0])
            .add_modifier(Modifier::BOLD);
        let muted = Style::default().fg(theme.muted);
        let focused = Style::default()
            .fg(theme.primary[1])
            .add_modifier(Modifier::BOLD);

        let field_label = |field: FormField, label: &'static str| {
            if form.is_editing() && form.focus() == field {
                Span::styled(label, focused)
            } else {
                Span::styled(label, Style::default().fg(theme.foreground))
            }
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GET IN TOUCH",
                Style::default().fg(theme.primary[1]),
            )),
            Line::from(Span::styled("Let's Work Together", heading)),
            Line::from(Span::styled(
                "Have a project in mind or want to discuss opportunities? I'd love to \
                 hear from you!",
                muted,
            )),
            Line::from(""),
            Line::from(vec![
                field_label(FormField::Name, "  Name:    "),
                Span::raw(form.message.name.clone()),
            ]),
            Line::from(vec![
                field_label(FormField::Email, "  Email:   "),
                Span::raw(form.message.email.clone()),
            ]),
            Line::from(field_label(FormField::Message, "  Message:")),
        ];

        let message_first_row = lines.len() as u16;
        for text_line in form.message.message.split('\n') {
            lines.push(Line::from(format!("  {text_line}")));
        }

        lines.push(Line::from(""));
        lines.push(match form.status() {
            SubmitStatus::Idle => Line::from(Span::styled(
                "  Press Ctrl+S to send your message",
                muted,
            )),
            SubmitStatus::Sending => Line::from(Span::styled(
                "  Sending...",
                Style::default().fg(Color::Yellow),
            )),
            SubmitStatus::Sent => Line::from(Span::styled(
                "  Message sent successfully! I'll get back to you soon.",
                Style::default().fg(Color::Green),
            )),
            SubmitStatus::Failed(reason) => Line::from(Span::styled(
                format!("  {reason}"),
                Style::default().fg(Color::Red),
            )),
        });

        if form.is_editing() {
            let (x, y) = match form.focus() {
                FormField::Name => (
                    FIELD_INDENT + form.message.name.width() as u16,
                    area.y + 5,
                ),
                FormField::Email => (
                    FIELD_INDENT + form.message.email.width() as u16,
                    area.y + 6,
                ),
                FormField::Message => {
                    let last = form.message.message.split('\n').last().unwrap_or("");
                    let row_count = form.message.message.split('\n').count() as u16;
                    (
                        2 + last.width() as u16,
                        area.y + message_first_row + row_count - 1,
                    )
                }
            };
            if x < area.width && y < area.y + area.height {
                frame.set_cursor_position((area.x + x, y));
            }
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(theme.background).fg(theme.foreground));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut form = ContactForm::new();
        assert_eq!(form.focus(), FormField::Name);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Email);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Message);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_typing_targets_the_focused_field() {
        let mut form = ContactForm::new();
        form.insert_char('A');
        form.focus_next();
        form.insert_char('b');
        form.focus_next();
        form.insert_char('c');
        form.insert_newline();
        form.insert_char('d');
        assert_eq!(form.message.name, "A");
        assert_eq!(form.message.email, "b");
        assert_eq!(form.message.message, "c\nd");
    }

    #[test]
    fn test_newline_is_ignored_outside_message() {
        let mut form = ContactForm::new();
        form.insert_char('A');
        form.insert_newline();
        assert_eq!(form.message.name, "A");
    }

    #[test]
    fn test_clear_fields_resets_input_and_focus() {
        let mut form = ContactForm::new();
        form.insert_char('x');
        form.focus_next();
        form.clear_fields();
        assert_eq!(form.message, ContactMessage::default());
        assert_eq!(form.focus(), FormField::Name);
    }
}
