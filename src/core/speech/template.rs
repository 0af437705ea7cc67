//! Art templates: bubble geometry and ordered marker binding.

use std::fs;
use std::path::{Path, PathBuf};

use super::art;

/// Character reserved for one bubble line in a template.
pub const MARKER: char = '$';

/// Widest bubble line accepted.
pub const MAX_LINE_WIDTH: usize = 512;

/// Errors building a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Bubble geometry must be non-zero (width {max_line_width}, lines {line_count})")]
    ZeroGeometry {
        max_line_width: usize,
        line_count: usize,
    },
    #[error("Template has {found} '$' markers, expected {expected}")]
    MarkerCount { expected: usize, found: usize },
    #[error("Bubble width {max_line_width} exceeds the maximum of {}", MAX_LINE_WIDTH)]
    TooWide { max_line_width: usize },
    #[error("Bubble of {line_count} lines of {max_line_width} characters is too large")]
    TooLarge {
        max_line_width: usize,
        line_count: usize,
    },
    #[error("Failed to read template {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The rectangular text area inside a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub max_line_width: usize,
    pub line_count: usize,
}

impl Geometry {
    pub fn new(max_line_width: usize, line_count: usize) -> Result<Self, TemplateError> {
        if max_line_width == 0 || line_count == 0 {
            return Err(TemplateError::ZeroGeometry {
                max_line_width,
                line_count,
            });
        }
        if max_line_width > MAX_LINE_WIDTH {
            return Err(TemplateError::TooWide { max_line_width });
        }
        if max_line_width.checked_mul(line_count).is_none() {
            return Err(TemplateError::TooLarge {
                max_line_width,
                line_count,
            });
        }
        Ok(Self {
            max_line_width,
            line_count,
        })
    }

    /// Most characters a message may have and still fit.
    pub fn capacity(&self) -> usize {
        self.max_line_width.saturating_mul(self.line_count)
    }
}

/// Art text split around its markers. `segments.len() == line_count + 1`.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<String>,
    geometry: Geometry,
}

impl Template {
    /// Build a template whose marker count must match `geometry.line_count`.
    pub fn new(text: &str, geometry: Geometry) -> Result<Self, TemplateError> {
        let segments: Vec<String> = text.split(MARKER).map(str::to_string).collect();
        let found = segments.len() - 1;
        if found != geometry.line_count {
            return Err(TemplateError::MarkerCount {
                expected: geometry.line_count,
                found,
            });
        }
        Ok(Self { segments, geometry })
    }

    /// Build a template whose line count is the number of markers in `text`.
    pub fn from_art(text: &str, max_line_width: usize) -> Result<Self, TemplateError> {
        let line_count = text.matches(MARKER).count();
        Self::new(text, Geometry::new(max_line_width, line_count)?)
    }

    /// Load custom art from a file.
    pub fn from_file(path: &Path, max_line_width: usize) -> Result<Self, TemplateError> {
        let text = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_art(&text, max_line_width)
    }

    /// The built-in portrait.
    pub fn builtin() -> Self {
        Self {
            segments: art::PORTRAIT.split(MARKER).map(str::to_string).collect(),
            geometry: Geometry {
                max_line_width: art::BUBBLE_WIDTH,
                line_count: art::BUBBLE_LINES,
            },
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Bind `lines[i]` to the i-th marker.
    pub(super) fn fill(&self, lines: &[String]) -> String {
        debug_assert_eq!(lines.len(), self.geometry.line_count);
        let mut out = String::with_capacity(
            self.segments.iter().map(String::len).sum::<usize>() + self.geometry.capacity(),
        );
        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(segment);
            if let Some(line) = lines.get(i) {
                out.push_str(line);
            }
        }
        out
    }
}
