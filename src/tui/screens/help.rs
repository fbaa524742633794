//! Help screen — scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::UiMode;
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

static SIGNUP_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Space", "toggle terms (when focused)"),
    ("Enter", "sign up"),
    ("Alt+v", "show / hide password"),
    ("Alt+m", "switch to login"),
    ("Esc / Ctrl+C", "quit"),
    ("F1", "help"),
];

static LOGIN_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "log in"),
    ("Alt+v", "show / hide password"),
    ("Alt+m", "switch to signup"),
    ("Esc / Ctrl+C", "quit"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
    mode: UiMode,
}

impl HelpState {
    /// Creates a new [`HelpState`] with scroll position at the top, describing signup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Returns the form mode whose keys are listed.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Sets the form mode whose keys are listed.
    pub fn set_mode(&mut self, mode: UiMode) {
        self.mode = mode;
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

impl ScreenState for HelpState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Auth),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content(mode: UiMode) -> Vec<Line<'static>> {
    let mut lines = match mode {
        UiMode::Signup => build_section("Sign Up", SIGNUP_KEYS),
        UiMode::Login => build_section("Login", LOGIN_KEYS),
    };
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

/// Renders the help screen.
#[mutants::skip]
pub fn draw_help(state: &HelpState, frame: &mut Frame, area: Rect) {
    let title = format!(" Help – {} ", state.mode());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let content_lines = help_content(state.mode());
    let total = content_lines.len() as u16;
    let height = content_area.height;
    let capped_scroll = state.scroll().min(total.saturating_sub(height));

    let paragraph = Paragraph::new(content_lines).scroll((capped_scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn new_starts_at_top_describing_signup() {
            let state = HelpState::new();
            assert_eq!(state.scroll(), 0);
            assert_eq!(state.mode(), UiMode::Signup);
        }

        #[test]
        fn set_mode_stores_mode() {
            let mut state = HelpState::new();
            state.set_mode(UiMode::Login);
            assert_eq!(state.mode(), UiMode::Login);
        }
    }

    mod handle_key {
        use super::*;

        #[test]
        fn up_decrements_scroll() {
            let mut state = HelpState::new();
            state.scroll = 5;
            let action = state.handle_key(press(KeyCode::Up));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 4);
        }

        #[test]
        fn up_at_zero_saturates() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn down_increments_scroll() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.scroll(), 1);
        }

        #[test]
        fn q_and_esc_navigate_back_to_form() {
            let mut state = HelpState::new();
            assert_eq!(
                state.handle_key(press(KeyCode::Char('q'))),
                Action::Navigate(Screen::Auth)
            );
            assert_eq!(
                state.handle_key(press(KeyCode::Esc)),
                Action::Navigate(Screen::Auth)
            );
        }

        #[test]
        fn unknown_key_returns_none() {
            let mut state = HelpState::new();
            let action = state.handle_key(press(KeyCode::Char('x')));
            assert_eq!(action, Action::None);
            assert_eq!(state.scroll(), 0);
        }

        #[test]
        fn reset_sets_scroll_to_zero() {
            let mut state = HelpState::new();
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            state.reset();
            assert_eq!(state.scroll(), 0);
        }
    }

    mod help_content_fn {
        use super::*;

        fn content_text(mode: UiMode) -> String {
            help_content(mode)
                .into_iter()
                .flat_map(|l| l.spans.into_iter())
                .map(|s| s.content.into_owned())
                .collect()
        }

        #[test]
        fn signup_lists_terms_toggle() {
            let text = content_text(UiMode::Signup);
            assert!(text.contains("Sign Up"));
            assert!(text.contains("toggle terms"));
            assert!(!text.contains("log in"));
        }

        #[test]
        fn login_excludes_signup_section() {
            let text = content_text(UiMode::Login);
            assert!(text.contains("log in"));
            assert!(!text.contains("toggle terms"));
        }

        #[test]
        fn both_modes_list_help_keys() {
            for mode in [UiMode::Signup, UiMode::Login] {
                assert!(content_text(mode).contains("scroll"));
            }
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_help(state: &HelpState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_help(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn title_includes_mode() {
            let mut state = HelpState::new();
            state.set_mode(UiMode::Login);
            let output = render_help(&state, 80, 30);
            assert!(output.contains("Help"));
            assert!(output.contains("Login"));
        }

        #[test]
        fn content_lists_visibility_toggle() {
            let state = HelpState::new();
            let output = render_help(&state, 80, 30);
            assert!(output.contains("Alt+v"));
            assert!(output.contains("show / hide password"));
        }

        #[test]
        fn footer_contains_q_and_esc() {
            let state = HelpState::new();
            let output = render_help(&state, 80, 30);
            assert!(output.contains("q/Esc"));
        }
    }
}
