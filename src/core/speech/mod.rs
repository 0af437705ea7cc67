//! Speech bubble rendering: fit a message into the art's bubble.
//!
//! A message is wrapped greedily into the template's fixed geometry, then each
//! wrapped line replaces one `$` marker, in order. Messages that cannot fit are
//! rejected with a [`RenderError`]; callers retry with another candidate.

mod art;
mod layout;
mod template;

use std::io::{self, Write};

pub use template::{Geometry, MAX_LINE_WIDTH, Template, TemplateError};

/// Why a message could not be placed in the bubble.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Error - Trump doesn't know any words as long as \"{word}\" ({len} > {max} characters)")]
    WordTooLong { word: String, len: usize, max: usize },
    #[error("Error, message too long ({len} > {capacity} characters)")]
    InputTooLong { len: usize, capacity: usize },
    #[error("Error, message too long to fit in {line_count} lines")]
    LayoutExhausted { line_count: usize },
}

/// Renders messages into a template. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct Renderer {
    template: Template,
    quiet: bool,
}

impl Renderer {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            quiet: false,
        }
    }

    /// Suppress diagnostics written by [`Renderer::say`].
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn geometry(&self) -> Geometry {
        self.template.geometry()
    }

    /// Wrap `message` into the bubble's lines without substituting them.
    pub fn layout(&self, message: &str) -> Result<Vec<String>, RenderError> {
        layout::wrap(message, self.template.geometry())
    }

    /// Compose the full art with `message` in the bubble.
    pub fn render(&self, message: &str) -> Result<String, RenderError> {
        let lines = self.layout(message)?;
        Ok(self.template.fill(&lines))
    }

    /// Write the art for `message` to `out`. On rejection writes the
    /// diagnostic instead (unless quiet) and returns `false`.
    pub fn say<W: Write>(&self, message: &str, out: &mut W) -> io::Result<bool> {
        match self.render(message) {
            Ok(art) => {
                writeln!(out, "{}", art)?;
                Ok(true)
            }
            Err(e) => {
                log::debug!("Rejected message ({} chars): {}", message.chars().count(), e);
                if !self.quiet {
                    writeln!(out, "{}", e)?;
                }
                Ok(false)
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Template::builtin())
    }
}

#[cfg(test)]
mod tests;
