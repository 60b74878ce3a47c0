//! Viewport-relative geometry.

use serde::{Deserialize, Serialize};

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Size {
    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Distance from the viewport's left edge
    pub left: f64,
    /// Distance from the viewport's top edge
    pub top: f64,
}

impl Point {
    /// Create a point.
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Bounding rectangle as reported by the presentation layer.
///
/// # Examples
///
/// ```
/// use maru_core::Rect;
///
/// let rect = Rect::new(100.0, 50.0, 200.0, 80.0);
/// assert_eq!(rect.right(), 300.0);
/// assert_eq!(rect.expand(10.0), Rect::new(90.0, 40.0, 220.0, 100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Grow the rectangle by `padding` on every side.
    pub fn expand(&self, padding: f64) -> Self {
        Self {
            left: self.left - padding,
            top: self.top - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// The visible window area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner width
    pub width: f64,
    /// Inner height
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a box of `size` in the viewport.
    pub fn center(&self, size: Size) -> Point {
        Point::new(
            self.width / 2.0 - size.width / 2.0,
            self.height / 2.0 - size.height / 2.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}
