use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.color.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
