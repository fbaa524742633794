use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::diagnostics;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{AuthState, HelpState, draw_auth, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// Redraw interval while a transition is playing.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The signup/login form.
    Auth,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    auth: AuthState,
    help: HelpState,
    notice: Option<String>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on the [`Screen::Auth`] screen in signup mode.
    pub fn new() -> Self {
        Self {
            screen: Screen::Auth,
            auth: AuthState::new(),
            help: HelpState::new(),
            notice: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    ///
    /// Blocks on input unless a transition is playing, in which case it
    /// polls so the animation keeps advancing.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if self.auth.is_animating() && !event::poll(FRAME_INTERVAL)? {
                self.auth.tick(Instant::now());
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
            self.auth.tick(Instant::now());
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Auth => draw_auth(&self.auth, frame, main_area, Instant::now()),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_status_bar(&self.status_context(), frame, status_area);
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        self.notice = None;
        let action = match (key.code, self.screen) {
            (KeyCode::F(1), Screen::Auth) => {
                self.help.set_mode(self.auth.controller().mode());
                self.help.reset();
                Action::Navigate(Screen::Help)
            }
            (_, Screen::Auth) => self.auth.handle_key(key),
            (_, Screen::Help) => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Submit(submission) => {
                if let Err(e) = diagnostics::log_submission(&submission) {
                    warn!("could not log submission: {e}");
                }
                self.notice = Some(format!("{} submitted", submission.mode));
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn status_context(&self) -> StatusBarContext {
        let controller = self.auth.controller();
        StatusBarContext {
            mode: controller.mode(),
            password_visible: controller.password_visible(),
            notice: self.notice.clone(),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the signup/login screen state.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Returns the last one-off notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::UiMode;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(app: &mut App, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn new_starts_on_auth_in_signup() {
        let app = App::new();
        assert_eq!(app.screen(), Screen::Auth);
        assert!(!app.should_quit());
        assert_eq!(app.auth().controller().mode(), UiMode::Signup);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn esc_on_auth_quits() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        for screen in [Screen::Auth, Screen::Help] {
            let mut app = App::new();
            app.screen = screen;
            app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
            assert!(app.should_quit(), "Ctrl+C on {screen:?} should quit");
        }
    }

    #[test]
    fn q_on_auth_is_typed_not_quit() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.auth().controller().form().username, "q");
    }

    #[test]
    fn f1_opens_help_for_current_mode() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('m'), KeyModifiers::ALT));
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        assert_eq!(app.help.mode(), UiMode::Login);
    }

    #[test]
    fn q_and_esc_on_help_return_to_auth() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new();
            app.handle_key(press(KeyCode::F(1)));
            app.handle_key(press(code));
            assert_eq!(app.screen(), Screen::Auth);
            assert!(!app.should_quit());
        }
    }

    #[test]
    fn typing_on_help_does_not_reach_form() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::F(1)));
        app.handle_key(press(KeyCode::Char('x')));
        assert!(app.auth().controller().form().is_empty());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
        assert_eq!(app.screen(), Screen::Auth);
    }

    #[test]
    fn valid_signup_sets_notice() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "Passw0rd!");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.notice(), Some("Signup submitted"));
    }

    #[test]
    fn rejected_signup_sets_no_notice() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));
        app.handle_key(press(KeyCode::Tab));
        type_string(&mut app, "weak");
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn login_submit_sets_notice() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('m'), KeyModifiers::ALT));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.notice(), Some("Login submitted"));
    }

    #[test]
    fn notice_cleared_on_next_key() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('m'), KeyModifiers::ALT));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('a')));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn status_context_reflects_controller() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('v'), KeyModifiers::ALT));
        let ctx = app.status_context();
        assert_eq!(ctx.mode, UiMode::Signup);
        assert!(ctx.password_visible);
        assert_eq!(ctx.notice, None);
    }
}
