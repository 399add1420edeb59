// Copyright 2025 Cowboy AI, LLC.

//! Render boundary
//!
//! [`render_overlay`] hands a composed [`OverlayFrame`] to a [`Canvas`] and
//! applies the formatting policy (limits, legend, spines, ticks, labels).
//! The canvas is borrowed for the duration of the call only.

use crate::config::OverlayConfig;
use crate::descriptors::{ColorId, OverlayFrame};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color a canvas should draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum StrokeColor {
    /// Entry of the backend's color cycle
    Cycle(ColorId),
    /// Plain black
    Black,
}

/// Side of the plot frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Spine {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
}

/// Which way tick marks point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TickDirection {
    /// Into the plot area
    In,
    /// Away from the plot area
    Out,
}

/// A 2-D plotting surface
pub trait Canvas {
    /// Set the visible x and y ranges
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64));

    /// Draw a polyline
    fn plot_line(&mut self, points: &[(f64, f64)], color: StrokeColor, width: f64, label: Option<&str>);

    /// Fill the area between two curves sampled at `xs`
    fn fill_between(&mut self, xs: &[f64], lower: &[f64], upper: &[f64], color: StrokeColor, alpha: f64);

    /// Show a legend of labelled lines
    fn legend(&mut self, frame_alpha: f64);

    /// Show or hide one side of the frame
    fn set_spine_visible(&mut self, spine: Spine, visible: bool);

    /// Tick mark direction on both axes
    fn set_tick_direction(&mut self, direction: TickDirection);

    /// Axis captions
    fn set_axis_labels(&mut self, x: &str, y: &str);
}

/// Draw `frame` on `canvas`
pub fn render_overlay<C: Canvas + ?Sized>(canvas: &mut C, frame: &OverlayFrame, config: &OverlayConfig) {
    canvas.set_limits(frame.x_limits, (0.0, config.y_max));

    for curve in &frame.curves {
        let width = if curve.emphasized {
            config.emphasized_line_width
        } else {
            config.line_width
        };
        canvas.plot_line(&curve.points, StrokeColor::Cycle(curve.color), width, Some(curve.label.as_str()));
    }
    canvas.legend(config.legend_frame_alpha);

    canvas.set_spine_visible(Spine::Top, false);
    canvas.set_spine_visible(Spine::Right, false);
    canvas.set_tick_direction(TickDirection::Out);
    canvas.set_axis_labels(&frame.variable, &config.y_label);

    for fill in &frame.overlay.fills {
        canvas.fill_between(
            &fill.xs,
            &fill.lower,
            &fill.upper,
            StrokeColor::Cycle(fill.color),
            config.fill_alpha,
        );
    }

    if let Some(marker) = frame.overlay.marker {
        canvas.plot_line(
            &[(marker.x, marker.y_span.0), (marker.x, marker.y_span.1)],
            StrokeColor::Black,
            config.marker_line_width,
            Some(config.marker_label.as_str()),
        );
    }
}

/// One call made on a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasCommand {
    /// [`Canvas::set_limits`]
    Limits {
        /// x range
        x: (f64, f64),
        /// y range
        y: (f64, f64),
    },
    /// [`Canvas::plot_line`]
    Line {
        /// Vertices
        points: Vec<(f64, f64)>,
        /// Stroke color
        color: StrokeColor,
        /// Stroke width
        width: f64,
        /// Legend entry
        label: Option<String>,
    },
    /// [`Canvas::fill_between`]
    Fill {
        /// Sample positions
        xs: Vec<f64>,
        /// Lower bound
        lower: Vec<f64>,
        /// Upper bound
        upper: Vec<f64>,
        /// Fill color
        color: StrokeColor,
        /// Opacity
        alpha: f64,
    },
    /// [`Canvas::legend`]
    Legend {
        /// Frame opacity
        frame_alpha: f64,
    },
    /// [`Canvas::set_spine_visible`]
    Spine {
        /// Which side
        spine: Spine,
        /// Shown or hidden
        visible: bool,
    },
    /// [`Canvas::set_tick_direction`]
    Ticks {
        /// Direction
        direction: TickDirection,
    },
    /// [`Canvas::set_axis_labels`]
    AxisLabels {
        /// x caption
        x: String,
        /// y caption
        y: String,
    },
}

/// Canvas that records every call instead of drawing
///
/// Useful for golden tests and for shipping draw calls to another process.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    /// Create an empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls in the order they were made
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    /// Forget all recorded calls
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded calls as JSON
    pub fn to_json(&self) -> crate::errors::VizResult<String> {
        Ok(serde_json::to_string(&self.commands)?)
    }
}

impl Canvas for RecordingCanvas {
    fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) {
        self.commands.push(CanvasCommand::Limits { x, y });
    }

    fn plot_line(&mut self, points: &[(f64, f64)], color: StrokeColor, width: f64, label: Option<&str>) {
        self.commands.push(CanvasCommand::Line {
            points: points.to_vec(),
            color,
            width,
            label: label.map(str::to_string),
        });
    }

    fn fill_between(&mut self, xs: &[f64], lower: &[f64], upper: &[f64], color: StrokeColor, alpha: f64) {
        self.commands.push(CanvasCommand::Fill {
            xs: xs.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
            color,
            alpha,
        });
    }

    fn legend(&mut self, frame_alpha: f64) {
        self.commands.push(CanvasCommand::Legend { frame_alpha });
    }

    fn set_spine_visible(&mut self, spine: Spine, visible: bool) {
        self.commands.push(CanvasCommand::Spine { spine, visible });
    }

    fn set_tick_direction(&mut self, direction: TickDirection) {
        self.commands.push(CanvasCommand::Ticks { direction });
    }

    fn set_axis_labels(&mut self, x: &str, y: &str) {
        self.commands.push(CanvasCommand::AxisLabels {
            x: x.to_string(),
            y: y.to_string(),
        });
    }
}
