//! Point-in-region predicates for the mask shapes.
//!
//! All regions are centered at (w/2, h/2) and scale with min(w, h), except
//! the ellipse, which stretches to both dimensions. Coordinates handed to
//! [`Region::contains`] are absolute sample positions in pixel space; the
//! caller is responsible for sampling at pixel centers.

use std::f32::consts::PI;

use super::ShapeKind;

/// Geometry for one buffer's shape tests.
///
/// Precomputes the center and scale so the per-pixel predicate is a handful
/// of arithmetic operations.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    cx: f32,
    cy: f32,
    width: f32,
    height: f32,
    /// min(width, height), the base for most shape sizes.
    min_dim: f32,
}

impl Region {
    /// Build the region geometry for a w x h buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let w = width as f32;
        let h = height as f32;
        Self {
            cx: w / 2.0,
            cy: h / 2.0,
            width: w,
            height: h,
            min_dim: w.min(h),
        }
    }

    /// Test whether the sample point (x, y) lies inside the shape.
    pub fn contains(&self, shape: ShapeKind, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        match shape {
            ShapeKind::Circle => self.circle(dx, dy),
            ShapeKind::Rounded => self.rounded(x, y),
            ShapeKind::Star => self.star(dx, dy),
            ShapeKind::Heart => self.heart(dx, dy),
            ShapeKind::Hexagon => self.hexagon(dx, dy),
            ShapeKind::Diamond => self.diamond(dx, dy),
            ShapeKind::Triangle => self.triangle(dx, dy),
            ShapeKind::Pentagon => self.pentagon(dx, dy),
            ShapeKind::Cross => self.cross(dx, dy),
            ShapeKind::Ellipse => self.ellipse(dx, dy),
        }
    }

    /// Disc of radius 0.45 min(w, h).
    fn circle(&self, dx: f32, dy: f32) -> bool {
        let radius = 0.45 * self.min_dim;
        dx * dx + dy * dy <= radius * radius
    }

    /// Full rectangle with quarter-circle corners of radius 0.15 min(w, h).
    ///
    /// Only points inside a corner square can be cut; everywhere else the
    /// rectangle covers the whole buffer.
    fn rounded(&self, x: f32, y: f32) -> bool {
        let r = 0.15 * self.min_dim;

        let corner_x = if x < r {
            Some(r)
        } else if x > self.width - r {
            Some(self.width - r)
        } else {
            None
        };
        let corner_y = if y < r {
            Some(r)
        } else if y > self.height - r {
            Some(self.height - r)
        } else {
            None
        };

        match (corner_x, corner_y) {
            (Some(ccx), Some(ccy)) => {
                let dx = x - ccx;
                let dy = y - ccy;
                dx * dx + dy * dy <= r * r
            }
            _ => true,
        }
    }

    /// Five-point star via angular sectors.
    ///
    /// The full angle is divided into 10 sectors (two per point); even
    /// sectors extend to the outer radius, odd sectors only to the inner
    /// radius (0.4 of the outer).
    fn star(&self, dx: f32, dy: f32) -> bool {
        let outer = 0.45 * self.min_dim;
        let inner = 0.4 * outer;

        let dist = (dx * dx + dy * dy).sqrt();
        let mut angle = dy.atan2(dx);
        if angle < 0.0 {
            angle += 2.0 * PI;
        }

        let sector = (angle / (2.0 * PI / 10.0)) as u32 % 10;
        let threshold = if sector % 2 == 0 { outer } else { inner };
        dist <= threshold
    }

    /// Implicit heart curve, scaled by 0.35 min(w, h) and shifted up 0.2 s.
    fn heart(&self, dx: f32, dy: f32) -> bool {
        let s = 0.35 * self.min_dim;
        let nx = dx / s;
        let ny = dy / s + 0.2;
        let q = nx * nx + ny * ny - 1.0;
        q * q * q - nx * nx * ny * ny * ny <= 0.0
    }

    /// Flat-top hexagon inscribed in radius 0.45 min(w, h).
    fn hexagon(&self, dx: f32, dy: f32) -> bool {
        let s = 0.45 * self.min_dim;
        let ax = dx.abs();
        let ay = dy.abs();
        !(ax > 0.866 * s || ay > s || (ax > 0.5 * s && ay > 0.866 * s))
    }

    /// Diamond (L1 ball) of half-diagonal 0.45 min(w, h).
    fn diamond(&self, dx: f32, dy: f32) -> bool {
        let s = 0.45 * self.min_dim;
        dx.abs() / s + dy.abs() / s <= 1.0
    }

    /// Triangle, widest at the top band and narrowing downward.
    fn triangle(&self, dx: f32, dy: f32) -> bool {
        let s = 0.4 * self.min_dim;
        let nx = dx / s;
        let ny = dy / s;
        !(ny < -0.3 || ny > 0.5 || nx.abs() > 0.5 - ny - 0.2)
    }

    /// Regular pentagon with vertices at i 2pi/5 - pi/2, circumradius
    /// 0.45 min(w, h).
    ///
    /// Convex containment: the point is outside as soon as its projection
    /// onto any edge normal exceeds the apothem.
    fn pentagon(&self, dx: f32, dy: f32) -> bool {
        let radius = 0.45 * self.min_dim;
        let apothem = radius * (PI / 5.0).cos();

        for i in 0..5 {
            // Normal of the edge between vertices i and i+1
            let normal = (i as f32) * 2.0 * PI / 5.0 + PI / 5.0 - PI / 2.0;
            let projection = dx * normal.cos() + dy * normal.sin();
            if projection > apothem {
                return false;
            }
        }
        true
    }

    /// Plus sign: arm length 0.35 min(w, h), thickness 0.15 min(w, h).
    fn cross(&self, dx: f32, dy: f32) -> bool {
        let thickness = 0.15 * self.min_dim;
        let arm = 0.35 * self.min_dim;
        let ax = dx.abs();
        let ay = dy.abs();
        (ay <= thickness / 2.0 && ax <= arm) || (ax <= thickness / 2.0 && ay <= arm)
    }

    /// Axis-aligned ellipse with semi-axes 0.45 w and 0.45 h.
    ///
    /// The only shape that stretches to both dimensions instead of
    /// min(w, h).
    fn ellipse(&self, dx: f32, dy: f32) -> bool {
        let rx = 0.45 * self.width;
        let ry = 0.45 * self.height;
        (dx / rx) * (dx / rx) + (dy / ry) * (dy / ry) <= 1.0
    }
}
