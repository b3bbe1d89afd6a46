//! Configuration types for concept-map rendering.
//!
//! This module provides configuration structures that control how maps are
//! laid out and styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Constants of the radial placement and hover repulsion.
//! - [`StyleConfig`] - Controls visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use corolla::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Top-level application configuration combining layout and style settings.
///
/// Groups [`LayoutConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Radial placement constants.
    /// * `style` - Visual styling options.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Constants of the radial placement and hover repulsion.
///
/// The defaults reproduce the canvas the upstream viewer draws into: an
/// 800-wide canvas whose height starts at 550 for five nodes and grows by
/// 10 px per additional node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Logical canvas width in pixels.
    canvas_width: f32,

    /// Canvas height at the baseline node count.
    base_height: f32,

    /// Height added per node above (or removed per node below) the baseline.
    height_step: f32,

    /// Node count at which the canvas has its base height.
    baseline_node_count: u32,

    /// Ring radius before the importance weight is applied.
    base_radius: f32,

    /// Radius added per unit of node importance.
    importance_weight: f32,

    /// Distance adjacent nodes are pushed away from a hovered node.
    hover_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            base_height: 550.0,
            height_step: 10.0,
            baseline_node_count: 5,
            base_radius: 200.0,
            importance_weight: 2.0,
            hover_offset: 45.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the logical canvas width.
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    /// Returns the canvas height at the baseline node count.
    pub fn base_height(&self) -> f32 {
        self.base_height
    }

    /// Returns the height step per node away from the baseline.
    pub fn height_step(&self) -> f32 {
        self.height_step
    }

    /// Returns the baseline node count.
    pub fn baseline_node_count(&self) -> u32 {
        self.baseline_node_count
    }

    /// Returns the base ring radius.
    pub fn base_radius(&self) -> f32 {
        self.base_radius
    }

    /// Returns the radius weight per unit of importance.
    pub fn importance_weight(&self) -> f32 {
        self.importance_weight
    }

    /// Returns the hover repulsion offset.
    pub fn hover_offset(&self) -> f32 {
        self.hover_offset
    }
}

/// Visual styling configuration for rendered maps.
///
/// Controls appearance options such as background color. Fields that are
/// not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for maps, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults_match_viewer_canvas() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.canvas_width(), 800.0);
        assert_eq!(layout.base_height(), 550.0);
        assert_eq!(layout.height_step(), 10.0);
        assert_eq!(layout.baseline_node_count(), 5);
        assert_eq!(layout.base_radius(), 200.0);
        assert_eq!(layout.importance_weight(), 2.0);
        assert_eq!(layout.hover_offset(), 45.0);
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig::new(Some("definitely-not-a-color".to_string()));
        assert!(style.background_color().is_err());
    }
}
