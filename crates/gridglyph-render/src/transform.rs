//! Affine transforms for placing icon artwork.

use std::fmt;

use crate::types::{Point, Rect};

/// A 2D affine transformation matrix.
///
/// Stored as a 3x2 matrix in column-major order:
/// ```text
/// | m00 m10 m20 |   | scale_x  skew_x   translate_x |
/// | m01 m11 m21 | = | skew_y   scale_y  translate_y |
/// ```
///
/// This is exactly the order of the SVG `matrix(a b c d e f)` function, so
/// [`Display`](fmt::Display) writes a transform that can go straight into a
/// `transform` attribute.
///
/// # Examples
///
/// ```
/// use gridglyph_render::{Point, Transform2D};
///
/// // Transforms are composed right-to-left with `then`
/// // (first translate, then scale)
/// let transform = Transform2D::scale(2.0)
///     .then(&Transform2D::translate(10.0, 0.0));
///
/// let p = transform.transform_point(Point::new(5.0, 0.0));
/// assert_eq!(p, Point::new(30.0, 0.0));
/// assert_eq!(transform.to_string(), "matrix(2 0 0 2 20 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Matrix elements in column-major order.
    m: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform (no transformation).
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, tx, ty],
        }
    }

    /// Create a uniform scaling transform.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Create a non-uniform scaling transform.
    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Map `source` uniformly into `target`.
    ///
    /// The source is moved to the origin, scaled by `s`, and then centered
    /// inside `target`. With `s = target.height / source.height` a square
    /// source fills a square target exactly.
    pub fn fit_centered(source: &Rect, target: &Rect, s: f32) -> Self {
        let center = target.center();
        let tx = center.x - s * source.width() / 2.0;
        let ty = center.y - s * source.height() / 2.0;

        Self::translate(tx, ty)
            .then(&Self::scale(s))
            .then(&Self::translate(-source.x(), -source.y()))
    }

    /// Concatenate this transform with another (self * other).
    ///
    /// The resulting transform first applies `other`, then `self`.
    #[inline]
    pub fn then(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        Self {
            m: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        Point {
            x: self.m[0] * p.x + self.m[2] * p.y + self.m[4],
            y: self.m[1] * p.x + self.m[3] * p.y + self.m[5],
        }
    }

    /// Check if this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Transform a rectangle's bounding box.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let right = rect.x() + rect.width();
        let bottom = rect.y() + rect.height();
        let corners = [
            self.transform_point(rect.origin),
            self.transform_point(Point::new(right, rect.y())),
            self.transform_point(Point::new(rect.x(), bottom)),
            self.transform_point(Point::new(right, bottom)),
        ];

        let min_x = corners.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let min_y = corners.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_x = corners
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max);
        let max_y = corners
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max);

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

impl fmt::Display for Transform2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.m;
        write!(f, "matrix({a} {b} {c} {d} {e} {g})")
    }
}
