//! Wrap-aware math on the square toroidal play field.
//!
//! Every gameplay distance/direction query goes through these helpers; a
//! naive Euclidean delta is never correct near the seam.

use glam::Vec2;

/// Normalize a position into `[0, side)` on both axes.
#[inline]
pub fn wrap(pos: Vec2, side: f32) -> Vec2 {
    Vec2::new(pos.x.rem_euclid(side), pos.y.rem_euclid(side))
}

/// Shortest vector from `from` to `to` on the torus: any component whose
/// raw magnitude exceeds `side/2` is shifted by `side` toward the shorter
/// path.
#[inline]
pub fn wrap_delta(from: Vec2, to: Vec2, side: f32) -> Vec2 {
    let half = side * 0.5;
    let mut d = to - from;
    if d.x > half {
        d.x -= side;
    } else if d.x < -half {
        d.x += side;
    }
    if d.y > half {
        d.y -= side;
    } else if d.y < -half {
        d.y += side;
    }
    d
}

/// Shortest-path distance between two points on the torus.
#[inline]
pub fn dist(a: Vec2, b: Vec2, side: f32) -> f32 {
    wrap_delta(a, b, side).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIDE: f32 = 2048.0;

    #[test]
    fn distance_is_symmetric_and_bounded() {
        let bound = SIDE * std::f32::consts::SQRT_2 * 0.5 + 1e-3;
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 2047.0),
            Vec2::new(1024.0, 1024.0),
            Vec2::new(2047.5, 0.5),
            Vec2::new(300.0, 1800.0),
        ];
        for a in pts {
            for b in pts {
                let d_ab = dist(a, b, SIDE);
                let d_ba = dist(b, a, SIDE);
                assert!((d_ab - d_ba).abs() < 1e-4, "dist not symmetric");
                assert!(d_ab <= bound, "dist {d_ab} exceeds torus bound {bound}");
            }
        }
    }

    #[test]
    fn seam_takes_the_short_path() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(2046.0, 0.0);
        // Raw delta is 2044; the wrapped path crosses the seam.
        assert!((dist(a, b, SIDE) - 4.0).abs() < 1e-4);
        assert!(wrap_delta(a, b, SIDE).x < 0.0);
    }

    #[test]
    fn wrap_pulls_positions_back_into_the_field() {
        let p = wrap(Vec2::new(-3.0, 2050.0), SIDE);
        assert!((p.x - 2045.0).abs() < 1e-4);
        assert!((p.y - 2.0).abs() < 1e-4);
    }
}
