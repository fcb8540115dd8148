// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for hit testing and overlay placement.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: PointF) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Shift the rect so it lies inside `bounds` where possible (left/top win on overflow).
    pub fn clamp_into(self, bounds: RectF) -> RectF {
        let w = self.width();
        let h = self.height();
        let left = clamp(self.left, bounds.left, (bounds.right - w).max(bounds.left));
        let top = clamp(self.top, bounds.top, (bounds.bottom - h).max(bounds.top));
        RectF::from_ltwh(left, top, w, h)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
