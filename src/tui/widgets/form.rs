//! Reusable form widget: a focus ring over labelled fields.
//!
//! The widget does not own the field values. The screen owning the data
//! passes a [`FieldRow`] per field at draw time.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Character drawn for each hidden password character.
pub const MASK_CHAR: char = '\u{2022}';

/// How a field is edited and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain single-line text.
    Text,
    /// Text that is masked unless revealed.
    Secret,
    /// An on/off toggle.
    Checkbox,
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Hint shown while the value is empty.
    pub placeholder: String,
    /// How the field is edited.
    pub kind: FieldKind,
}

impl FormField {
    /// Creates a text field.
    pub fn text(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            kind: FieldKind::Text,
        }
    }

    /// Creates a masked text field.
    pub fn secret(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            kind: FieldKind::Secret,
        }
    }

    /// Creates a checkbox.
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: String::new(),
            kind: FieldKind::Checkbox,
        }
    }
}

/// The current value of one field, as passed in at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Secret { text: &'a str, revealed: bool },
    Checkbox(bool),
}

impl FieldValue<'_> {
    /// Returns the text to render, masking unrevealed secrets.
    pub fn display(&self) -> Cow<'_, str> {
        match *self {
            FieldValue::Text(text) | FieldValue::Secret { text, revealed: true } => {
                Cow::Borrowed(text)
            }
            FieldValue::Secret {
                text,
                revealed: false,
            } => Cow::Owned(text.chars().map(|_| MASK_CHAR).collect()),
            FieldValue::Checkbox(true) => Cow::Borrowed("[x]"),
            FieldValue::Checkbox(false) => Cow::Borrowed("[ ]"),
        }
    }

    /// Returns `true` for empty text; checkboxes are never empty.
    pub fn is_empty(&self) -> bool {
        match *self {
            FieldValue::Text(text) | FieldValue::Secret { text, .. } => text.is_empty(),
            FieldValue::Checkbox(_) => false,
        }
    }
}

/// What to draw for one field: its value and an optional inline error.
#[derive(Debug, Clone, Copy)]
pub struct FieldRow<'a> {
    pub value: FieldValue<'a>,
    pub error: Option<&'a str>,
}

impl<'a> FieldRow<'a> {
    /// A row with no error.
    pub fn new(value: FieldValue<'a>) -> Self {
        Self { value, error: None }
    }

    /// Attaches an inline error.
    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the kind of the focused field, if any.
    pub fn focused_kind(&self) -> Option<FieldKind> {
        self.fields.get(self.focus).map(|f| f.kind)
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Moves focus back to the first field.
    pub fn reset_focus(&mut self) {
        self.focus = 0;
    }
}

/// Height in rows of one field, including borders.
const ROW_HEIGHT: u16 = 3;

/// Greedily wraps `text` at word boundaries into lines of at most `width` chars.
///
/// Words longer than `width` are split across lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
            continue;
        }
        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
        }
        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(width).peekable();
        while let Some(chunk) = chunks.next() {
            if chunks.peek().is_some() {
                lines.push(chunk.iter().collect());
            } else {
                line = chunk.iter().collect();
                line_len = chunk.len();
            }
        }
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}

fn error_lines(row: &FieldRow<'_>, width: u16) -> Vec<String> {
    row.error
        .map(|err| wrap_words(err, usize::from(width)))
        .unwrap_or_default()
}

/// Total height needed to draw `form` with `rows` at the given width.
///
/// Each field takes three rows, plus one per wrapped line of its error.
pub fn form_height(form: &Form, rows: &[FieldRow<'_>], width: u16) -> u16 {
    let errors: usize = rows
        .iter()
        .take(form.fields.len())
        .map(|row| error_lines(row, width).len())
        .sum();
    ROW_HEIGHT * form.fields.len() as u16 + errors as u16
}

/// Renders a form within the given area.
///
/// `rows` is matched to the form's fields by index; fields without a row
/// are skipped. Errors are wrapped to the area width below their field.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, rows: &[FieldRow<'_>], frame: &mut Frame, area: Rect) {
    let wrapped: Vec<Vec<String>> = rows
        .iter()
        .map(|row| error_lines(row, area.width))
        .collect();
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let extra = wrapped.get(i).map_or(0, Vec::len) as u16;
            Constraint::Length(ROW_HEIGHT + extra)
        })
        .collect();

    let areas = Layout::vertical(constraints).split(area);

    for (i, (field, row)) in form.fields.iter().zip(rows).enumerate() {
        let is_focused = i == form.focus;

        let border_color = if row.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = if row.value.is_empty() && !is_focused {
            vec![Span::styled(
                field.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(row.value.display())]
        };
        if is_focused && field.kind != FieldKind::Checkbox {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let [field_area, error_area] =
            Layout::vertical([Constraint::Length(ROW_HEIGHT), Constraint::Min(0)])
                .areas(areas[i]);

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, field_area);

        if let Some(lines) = wrapped.get(i).filter(|lines| !lines.is_empty()) {
            let red = Style::default().fg(Color::Red);
            let error_text: Vec<Line> = lines
                .iter()
                .map(|line| Line::from(Span::styled(line.as_str(), red)))
                .collect();
            frame.render_widget(Paragraph::new(error_text), error_area);
        }
    }
}
