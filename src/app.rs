//! Application state and event loop

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{DefaultTerminal, Frame};

use crate::config::Config;
use crate::mail::MailClient;
use crate::theme::{Theme, ThemeContext};
use crate::ui::{
    AboutRenderer, ContactForm, ContactRenderer, ExperienceRenderer, HeaderRenderer, HeroRenderer,
    ProjectsRenderer, SkillsRenderer, StatusBarRenderer, SubmitStatus, ThemePicker,
};

/// Top-level views, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The whole interactive application: active section, per-section scroll,
/// the theme context, the picker overlay, and the contact form.
pub struct App {
    config: Config,
    theme: ThemeContext,
    section: Section,
    scroll: [usize; Section::ALL.len()],
    picker: ThemePicker,
    form: ContactForm,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, theme: ThemeContext) -> Self {
        Self {
            config,
            theme,
            section: Section::Home,
            scroll: [0; Section::ALL.len()],
            picker: ThemePicker::new(),
            form: ContactForm::new(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        tracing::info!(theme = self.theme.current().id, "starting ui loop");
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    pub fn current_theme(&self) -> &'static Theme {
        self.theme.current()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let theme = self.theme.current();
        HeaderRenderer::render(frame, chunks[0], theme, self.section);

        let body = chunks[1];
        let scroll = self.scroll[self.section.index()] as u16;
        match self.section {
            Section::Home => HeroRenderer::render(frame, body, theme),
            Section::About => AboutRenderer::render(frame, body, theme, scroll),
            Section::Projects => ProjectsRenderer::render(frame, body, theme, scroll),
            Section::Experience => ExperienceRenderer::render(frame, body, theme, scroll),
            Section::Skills => SkillsRenderer::render(frame, body, theme, scroll),
            Section::Contact => ContactRenderer::render(frame, body, theme, &self.form),
        }

        self.picker.render(frame, body, theme);
        StatusBarRenderer::render(
            frame,
            chunks[2],
            theme,
            self.section,
            self.form.is_editing(),
            &self.status_message,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        if self.picker.is_visible() {
            self.handle_picker_key(key);
            return;
        }

        if self.section == Section::Contact && self.form.is_editing() {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.picker.open(self.theme.current()),
            KeyCode::Tab => self.switch_to(self.section.next()),
            KeyCode::BackTab => self.switch_to(self.section.prev()),
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c as usize - '1' as usize;
                self.switch_to(Section::ALL[idx]);
            }
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::Home => self.scroll[self.section.index()] = 0,
            KeyCode::Enter if self.section == Section::Contact => self.form.begin_editing(),
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.picker.select_prev(),
            KeyCode::Down => self.picker.select_next(),
            KeyCode::Enter => {
                let selected = self.picker.selected_theme();
                self.theme.set_current(selected);
                self.status_message = Some(format!("Theme: {}", selected.name));
                self.picker.close();
            }
            KeyCode::Esc | KeyCode::Char('t') => self.picker.close(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_contact();
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.form.stop_editing(),
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.form.insert_newline(),
            KeyCode::Char(c) => self.form.insert_char(c),
            _ => {}
        }
    }

    fn submit_contact(&mut self) {
        if let Err(reason) = self.form.message.validate() {
            self.form.set_status(SubmitStatus::Failed(reason));
            return;
        }
        self.form.set_status(SubmitStatus::Sending);
        let client = match MailClient::from_env(&self.config) {
            Ok(client) => client,
            Err(reason) => {
                self.form.set_status(SubmitStatus::Failed(reason));
                return;
            }
        };
        match client.send(&self.form.message) {
            Ok(()) => {
                self.form.set_status(SubmitStatus::Sent);
                self.form.clear_fields();
                self.form.stop_editing();
            }
            Err(err) => {
                tracing::error!("contact submission failed: {err:#}");
                self.form.set_status(SubmitStatus::Failed(
                    "Failed to send message. Please try again.".to_string(),
                ));
            }
        }
    }

    fn switch_to(&mut self, section: Section) {
        self.section = section;
        self.status_message = None;
    }

    fn scroll_by(&mut self, delta: isize) {
        let max_scroll = self.max_scroll();
        let current = &mut self.scroll[self.section.index()];
        if delta > 0 {
            *current = (*current + delta as usize).min(max_scroll);
        } else {
            *current = current.saturating_sub(delta.unsigned_abs());
        }
    }

    fn max_scroll(&self) -> usize {
        let lines = match self.section {
            Section::Home | Section::Contact => 0,
            Section::About => AboutRenderer::line_count(),
            Section::Projects => ProjectsRenderer::line_count(),
            Section::Experience => ExperienceRenderer::line_count(),
            Section::Skills => SkillsRenderer::line_count(),
        };
        lines.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryPreferenceStore;

    fn app() -> App {
        App::new(
            Config::default(),
            ThemeContext::init(Box::new(MemoryPreferenceStore::default())),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = app();
        assert_eq!(app.section(), Section::Home);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.section(), Section::About);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.section(), Section::Contact);
    }

    #[test]
    fn test_digit_jumps_to_section() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.section(), Section::Skills);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.section(), Section::Home);
    }

    #[test]
    fn test_picker_selects_and_persists_theme() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert!(app.picker.is_visible());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.picker.is_visible());
        assert_eq!(app.current_theme().id, "light");
    }

    #[test]
    fn test_picker_escape_leaves_theme_unchanged() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_theme().id, "modern");
    }

    #[test]
    fn test_contact_editing_captures_digits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.section(), Section::Contact);
        press(&mut app, KeyCode::Enter);
        assert!(app.form.is_editing());
        // Digits go into the field instead of switching sections
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.section(), Section::Contact);
        assert_eq!(app.form.message.name, "1");
        press(&mut app, KeyCode::Esc);
        assert!(!app.form.is_editing());
    }

    #[test]
    fn test_submit_with_empty_fields_reports_validation_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Enter);
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(
            app.form.status(),
            &SubmitStatus::Failed("All fields are required".to_string())
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll[Section::Projects.index()], 0);
        for _ in 0..1000 {
            press(&mut app, KeyCode::PageDown);
        }
        assert!(app.scroll[Section::Projects.index()] <= ProjectsRenderer::line_count());
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
