//! Styling passed through to the renderer alongside rotated geometry.
//!
//! Colors are matplotlib color strings; nothing here interprets them.

use clap::Args;
use serde::Serialize;

/// Polygon patch styling for rotated plate outlines
#[derive(Args, Debug, Clone, PartialEq, Serialize)]
pub struct PolygonStyle {
    /// Outline color
    #[arg(long, default_value = "k")]
    pub edgecolor: String,

    /// Fill color
    #[arg(long, default_value = "none")]
    pub facecolor: String,

    /// Opacity of both outline and fill
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Outline width in points
    #[arg(long, default_value_t = 1.0)]
    pub linewidth: f64,
}

/// Marker styling for a rotated pole
#[derive(Args, Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    /// Marker shape
    #[arg(long, default_value = "o")]
    pub marker: String,

    /// Marker size
    #[arg(long = "size", default_value_t = 20.0)]
    pub markersize: f64,

    /// Marker and confidence region color
    #[arg(long, default_value = "r")]
    pub color: String,

    /// Opacity of the confidence region
    #[arg(long, default_value_t = 0.6)]
    pub alpha: f64,
}

/// Styling for a rotated Kent mean and its ellipse
#[derive(Args, Debug, Clone, PartialEq, Serialize)]
pub struct EllipseStyle {
    #[command(flatten)]
    #[serde(flatten)]
    pub marker: MarkerStyle,

    /// Ellipse outline color
    #[arg(long, default_value = "k")]
    pub edgecolor: String,

    /// Plot on the lower hemisphere
    #[arg(long)]
    pub lower: bool,
}
