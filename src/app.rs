//! Application state and key handling

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{Form, FormButton, FormController, FormFocus, Schema};
use crate::ui::forms::{widget_for, WidgetProps};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The mounted form
    pub form: FormController,
    /// Keyboard focus over fields and buttons
    pub focus: FormFocus,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Whether the submitted panel shows the submission time
    pub show_submitted_at: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Mount a form for the given schema
    pub fn new(schema: Schema, config: &TuiConfig) -> Self {
        let focus = FormFocus::new(schema.fields.len());
        Self {
            form: FormController::new(schema),
            focus,
            status_message: None,
            show_submitted_at: config.show_submitted_at(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.reset();
                return;
            }
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => {
                self.copy_submitted();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.prev_field();
                return;
            }
            _ => {}
        }

        if self.focus.is_buttons_row_active() {
            self.handle_buttons_key(key);
        } else {
            self.handle_field_key(key);
        }
    }

    /// Keys on the buttons row
    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                self.focus.toggle_button();
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::Reset => self.reset(),
            },
            _ => {}
        }
    }

    /// Delegate a key to the focused field's widget
    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(idx) = self.focus.focused_field() else {
            return;
        };
        let Some(field) = self.form.schema().fields.get(idx) else {
            return;
        };

        let props = WidgetProps::for_field(field, &self.form, true);
        match widget_for(field.field_type).handle_key(key, &props) {
            Some(event) => self.form.handle_change(event),
            // Enter on a field without its own Enter handling moves on
            None if key.code == KeyCode::Enter => self.focus.next_field(),
            None => {}
        }
    }

    fn submit(&mut self) {
        self.form.submit();

        let error_count = self.form.errors().len();
        if error_count == 0 {
            self.status_message = Some("Form submitted!".to_string());
            return;
        }

        self.status_message = Some(format!("{error_count} field(s) need attention"));
        let first_invalid = self
            .form
            .schema()
            .fields
            .iter()
            .position(|f| self.form.errors().contains(&f.name));
        if let Some(idx) = first_invalid {
            self.focus.set_active_field(idx);
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.status_message = Some("Form reset".to_string());
    }

    fn copy_submitted(&mut self) {
        let Some(json) = self.form.submitted_json() else {
            self.status_message = Some("Nothing submitted yet".to_string());
            return;
        };

        self.status_message = Some(match self.copy_to_clipboard(&json) {
            Ok(()) => "Submitted data copied".to_string(),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                "Failed to copy to clipboard".to_string()
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
