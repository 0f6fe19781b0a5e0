//! # Pixel Geometry
//!
//! Value types shared by the resizing pipeline:
//! - [`Size`] — a width × height pixel-dimension pair.
//! - [`Point`] — an (x, y) pixel offset, used as a crop origin.
//!
//! Both are plain immutable values; all derived geometry (square sides,
//! scaled heights, crop origins) is computed by the resizer itself.
//!
//! # Example
//! ```rust
//! use media_resizer::geometry::{Point, Size};
//!
//! let size = Size::new(1000, 500);
//! assert!(!size.is_square());
//! assert_eq!(size.shorter(), 500);
//! assert_eq!(size.to_string(), "1000x500");
//!
//! let origin = Point::new(250, 0);
//! assert_eq!(origin.x, 250);
//! ```

use std::fmt;

/// Pixel dimensions of an image or a target box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Creates a new [`Size`].
    ///
    /// # Example
    /// ```
    /// use media_resizer::geometry::Size;
    ///
    /// let s = Size::new(800, 600);
    /// assert_eq!(s.width, 800);
    /// assert_eq!(s.height, 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` when width and height are equal.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Length of the longer axis.
    pub fn longer(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Length of the shorter axis.
    pub fn shorter(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Pixel offset from the top-left corner, used as a crop origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Creates a new [`Point`].
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
