//! Status bar widget: one line of form context and the last notice.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::UiMode;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// The active form.
    pub mode: UiMode,
    /// Whether the password is shown in clear text.
    pub password_visible: bool,
    /// A one-off message such as a submission confirmation.
    pub notice: Option<String>,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - `Signup  password hidden`
/// - `Login  password shown  Login submitted` (notice in Green)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let green = Style::default().fg(Color::Green);

    let visibility = if ctx.password_visible {
        "password shown"
    } else {
        "password hidden"
    };

    let mut spans = vec![
        Span::styled(ctx.mode.to_string(), cyan),
        Span::styled("  ", cyan),
        Span::styled(visibility, cyan),
    ];
    if let Some(notice) = &ctx.notice {
        spans.push(Span::styled("  ", cyan));
        spans.push(Span::styled(notice.clone(), green));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
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

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_default_context() {
        let output = render_status_bar(&StatusBarContext::default(), 50);
        assert!(output.contains("Signup"), "default mode is signup");
        assert!(output.contains("password hidden"));
    }

    #[test]
    fn renders_visible_password_in_login() {
        let ctx = StatusBarContext {
            mode: UiMode::Login,
            password_visible: true,
            notice: None,
        };
        let output = render_status_bar(&ctx, 50);
        assert!(output.contains("Login"));
        assert!(output.contains("password shown"));
    }

    #[test]
    fn renders_notice() {
        let ctx = StatusBarContext {
            notice: Some("Signup submitted".into()),
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("Signup submitted"));
    }
}
