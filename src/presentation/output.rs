//! Output Rendering
//!
//! Provides a unified interface for rendering a tree result to different formats.

use crate::application::RenderedTree;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The text diagram only
    #[default]
    Text,
    /// JSON document for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for rendering tree results
pub trait TreeRenderer {
    /// Render the result to the string that gets written out
    fn render(&self, result: &RenderedTree) -> serde_json::Result<String>;
}

/// Text renderer: the diagram as produced by the renderer service
pub struct TextRenderer;

impl TreeRenderer for TextRenderer {
    fn render(&self, result: &RenderedTree) -> serde_json::Result<String> {
        Ok(result.rendered.clone())
    }
}

/// JSON renderer: `{root, selected, tree, stats, rendered}`
pub struct JsonRenderer;

impl TreeRenderer for JsonRenderer {
    fn render(&self, result: &RenderedTree) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(result)?;
        out.push('\n');
        Ok(out)
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn TreeRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
