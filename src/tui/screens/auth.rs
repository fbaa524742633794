//! Signup/login screen: the form on one side, the design panel on the other.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::controller::AuthFormController;
use crate::model::{FieldUpdate, FormState, UiMode};
use crate::tui::action::{Action, ScreenState};
use crate::tui::transition::{Side, Transition, slide_in};
use crate::tui::widgets::form::{
    FieldKind, FieldRow, FieldValue, Form, FormField, draw_form, form_height,
};

/// The form fields, independent of their position in either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Username,
    Email,
    Password,
    Terms,
}

/// Field order of the signup form.
const SIGNUP_FIELDS: [Field; 4] = [Field::Username, Field::Email, Field::Password, Field::Terms];
/// Field order of the login form.
const LOGIN_FIELDS: [Field; 2] = [Field::Email, Field::Password];

fn text_value(form: &FormState, field: Field) -> Option<&str> {
    match field {
        Field::Username => Some(form.username.as_str()),
        Field::Email => Some(form.email.as_str()),
        Field::Password => Some(form.password.as_str()),
        Field::Terms => None,
    }
}

fn text_update(field: Field, value: String) -> Option<FieldUpdate> {
    match field {
        Field::Username => Some(FieldUpdate::UsernameChanged(value)),
        Field::Email => Some(FieldUpdate::EmailChanged(value)),
        Field::Password => Some(FieldUpdate::PasswordChanged(value)),
        Field::Terms => None,
    }
}

/// State for the signup/login screen.
#[derive(Debug, Clone)]
pub struct AuthState {
    controller: AuthFormController,
    signup_form: Form,
    login_form: Form,
    transition: Option<Transition>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    /// Creates the screen in signup mode with empty fields.
    pub fn new() -> Self {
        Self {
            controller: AuthFormController::new(),
            signup_form: Form::new(vec![
                FormField::text("Username", "johndev"),
                FormField::text("Email", "johndoe@email.com"),
                FormField::secret("Password", "\u{2022}".repeat(8)),
                FormField::checkbox("I accept the terms & conditions"),
            ]),
            login_form: Form::new(vec![
                FormField::text("Email", "johndoe@email.com"),
                FormField::secret("Password", "\u{2022}".repeat(8)),
            ]),
            transition: None,
        }
    }

    /// Returns the form controller.
    pub fn controller(&self) -> &AuthFormController {
        &self.controller
    }

    /// Returns the focus ring of the active form.
    pub fn form(&self) -> &Form {
        match self.controller.mode() {
            UiMode::Signup => &self.signup_form,
            UiMode::Login => &self.login_form,
        }
    }

    fn form_mut(&mut self) -> &mut Form {
        match self.controller.mode() {
            UiMode::Signup => &mut self.signup_form,
            UiMode::Login => &mut self.login_form,
        }
    }

    fn focused_field(&self) -> Option<Field> {
        let focus = self.form().focus();
        match self.controller.mode() {
            UiMode::Signup => SIGNUP_FIELDS.get(focus).copied(),
            UiMode::Login => LOGIN_FIELDS.get(focus).copied(),
        }
    }

    /// Returns the running mode-switch transition, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Returns `true` while a transition is still playing.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Drops the transition once it has finished at `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
        }
    }

    fn switch_mode(&mut self) {
        self.controller.on_mode_switch();
        self.form_mut().reset_focus();
        self.transition = Some(Transition::start(Instant::now()));
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let Some(current) = text_value(self.controller.form(), field) else {
            return;
        };
        let mut value = current.to_string();
        edit(&mut value);
        if let Some(update) = text_update(field, value) {
            self.controller.on_field_change(update);
        }
    }

    fn submit(&mut self) -> Action {
        match self.controller.on_submit(self.controller.mode()) {
            Some(submission) => Action::Submit(submission),
            None => Action::None,
        }
    }
}

impl ScreenState for AuthState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('m') => self.switch_mode(),
                KeyCode::Char('v') => self.controller.on_password_visibility_toggle(),
                _ => {}
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form_mut().focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form_mut().focus_prev();
                Action::None
            }
            KeyCode::Char(' ') if self.form().focused_kind() == Some(FieldKind::Checkbox) => {
                self.controller.on_checkbox_toggle();
                Action::None
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused(|value| value.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

fn field_rows<'a>(
    controller: &'a AuthFormController,
    fields: &[Field],
    error: Option<&'a str>,
) -> Vec<FieldRow<'a>> {
    let form = controller.form();
    fields
        .iter()
        .map(|field| match field {
            Field::Username => FieldRow::new(FieldValue::Text(&form.username)),
            Field::Email => FieldRow::new(FieldValue::Text(&form.email)),
            Field::Password => FieldRow::new(FieldValue::Secret {
                text: &form.password,
                revealed: controller.password_visible(),
            })
            .with_error(error),
            Field::Terms => FieldRow::new(FieldValue::Checkbox(form.accept_terms)),
        })
        .collect()
}

/// Key hint under the form; fits the panel of an 80-column terminal.
const FOOTER_HINT: &str = "Enter: submit  Alt+v: show  F1: help";

/// Renders the signup/login screen as of `now`.
#[mutants::skip]
pub fn draw_auth(state: &AuthState, frame: &mut Frame, area: Rect, now: Instant) {
    let mode = state.controller.mode();
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let (form_area, form_side, design_area, design_side) = match mode {
        UiMode::Signup => (left, Side::Left, right, Side::Right),
        UiMode::Login => (right, Side::Right, left, Side::Left),
    };

    let progress = state.transition.map_or(1.0, |t| t.progress(now));
    draw_form_panel(state, frame, slide_in(form_area, progress, form_side));
    draw_design_panel(mode, frame, slide_in(design_area, progress, design_side));
}

#[mutants::skip]
fn draw_form_panel(state: &AuthState, frame: &mut Frame, area: Rect) {
    let controller = &state.controller;
    let mode = controller.mode();

    let block = Block::default()
        .title(format!(" {} ", mode.heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The login form never shows the password rule.
    let error_msg = match mode {
        UiMode::Signup => controller.password_error().map(|e| e.to_string()),
        UiMode::Login => None,
    };
    let rows = match mode {
        UiMode::Signup => field_rows(controller, &SIGNUP_FIELDS, error_msg.as_deref()),
        UiMode::Login => field_rows(controller, &LOGIN_FIELDS, None),
    };

    let form = state.form();
    let [form_area, _gap, button_area, switch_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(form_height(form, &rows, inner.width)),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(form, &rows, frame, form_area);

    let disabled = mode == UiMode::Signup && controller.password_error().is_some();
    let button_style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!("[ {} ]", mode.submit_label()),
        button_style,
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, button_area);

    let switch = Paragraph::new(Line::from(vec![
        Span::styled(mode.switch_prompt(), Style::default().fg(Color::Cyan)),
        Span::styled(" (Alt+m)", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(switch, switch_area);

    let footer =
        Paragraph::new(Line::from(FOOTER_HINT)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[mutants::skip]
fn draw_design_panel(mode: UiMode, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));

    let title_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("HelpDesk", Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled("Manage Tickets & Support", title_style)),
        Line::from(Span::styled("Efficiently", title_style)),
        Line::from(""),
        Line::from(mode.blurb()),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
