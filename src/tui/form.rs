//! Single-line form state shared by the modals, the login screen and the
//! location prompt.

use crate::util::unicode::last_grapheme_start;

/// What a field holds and how it is edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    /// Typed like text, shown masked
    Secret(String),
    /// Cycled with ←/→. Each option is (label, value).
    Choice {
        options: Vec<(String, String)>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub required: bool,
    pub input: FieldInput,
}

impl Field {
    pub fn text(label: &'static str, required: bool) -> Self {
        Field {
            label,
            required,
            input: FieldInput::Text(String::new()),
        }
    }

    pub fn secret(label: &'static str) -> Self {
        Field {
            label,
            required: true,
            input: FieldInput::Secret(String::new()),
        }
    }

    pub fn choice(label: &'static str, options: Vec<(String, String)>, selected: usize) -> Self {
        Field {
            label,
            required: false,
            input: FieldInput::Choice { options, selected },
        }
    }

    /// Submitted value
    pub fn value(&self) -> &str {
        match &self.input {
            FieldInput::Text(s) | FieldInput::Secret(s) => s,
            FieldInput::Choice { options, selected } => {
                options.get(*selected).map_or("", |(_, v)| v.as_str())
            }
        }
    }

    /// What the form shows for this field
    pub fn display(&self) -> String {
        match &self.input {
            FieldInput::Text(s) => s.clone(),
            FieldInput::Secret(s) => "\u{2022}".repeat(s.chars().count()),
            FieldInput::Choice { options, selected } => options
                .get(*selected)
                .map(|(label, _)| format!("\u{25C2} {} \u{25B8}", label))
                .unwrap_or_default(),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.input, FieldInput::Choice { .. })
    }
}

/// A titled list of fields with one focused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl FormState {
    pub fn new(title: impl Into<String>, fields: Vec<Field>) -> Self {
        FormState {
            title: title.into(),
            fields,
            focus: 0,
        }
    }

    pub fn focused(&self) -> Option<&Field> {
        self.fields.get(self.focus)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type into the focused field. Choices ignore typing.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && let FieldInput::Text(s) | FieldInput::Secret(s) = &mut field.input
        {
            s.push(c);
        }
    }

    /// Delete the last grapheme of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus)
            && let FieldInput::Text(s) | FieldInput::Secret(s) = &mut field.input
            && let Some(start) = last_grapheme_start(s)
        {
            s.truncate(start);
        }
    }

    /// Step the focused choice by `delta`, wrapping. Returns whether it changed.
    pub fn cycle(&mut self, delta: isize) -> bool {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        let FieldInput::Choice { options, selected } = &mut field.input else {
            return false;
        };
        if options.len() < 2 {
            return false;
        }
        let len = options.len() as isize;
        *selected = (*selected as isize + delta).rem_euclid(len) as usize;
        true
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", Field::value)
    }

    /// Every required field has a non-blank value
    pub fn is_complete(&self) -> bool {
        self.fields
            .iter()
            .all(|f| !f.required || !f.value().trim().is_empty())
    }

    /// Label of the first required field left blank
    pub fn first_missing(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.required && f.value().trim().is_empty())
            .map(|f| f.label)
    }

    /// Empty one text field, leaving focus where it is
    pub fn clear(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index)
            && let FieldInput::Text(s) | FieldInput::Secret(s) = &mut field.input
        {
            s.clear();
        }
    }
}
