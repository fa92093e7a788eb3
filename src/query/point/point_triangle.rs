use crate::math::{Point, Real};
use crate::shape::Triangle;

impl Triangle {
    /// Computes the point of this triangle closest to `pt`.
    ///
    /// The point is located by testing the Voronoï regions of the vertices, then of the edges,
    /// then of the face (see "Real-Time Collision Detection", Ericson, chapter 5.1.5).
    /// Degenerate triangles are handled as the union of their three edges.
    pub fn closest_point(&self, pt: &Point<Real>) -> Point<Real> {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return a;
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return b;
        }

        let vc = ab_ap * ac_bp - ab_bp * ac_ap;

        if a != b && vc <= 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / (ab_ap - ab_bp);
            return a + ab * v;
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return c;
        }

        let vb = ab_cp * ac_ap - ab_ap * ac_cp;

        if vb <= 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / (ac_ap - ac_cp);
            return a + ac * w;
        }

        let va = ab_bp * ac_cp - ab_cp * ac_bp;

        if va <= 0.0 && (ac_bp - ab_bp) >= 0.0 && (ab_cp - ac_cp) >= 0.0 {
            // Voronoï region of `bc`.
            let w = (ac_bp - ab_bp) / ((ac_bp - ab_bp) + (ab_cp - ac_cp));
            return b + (c - b) * w;
        }

        let sum = va + vb + vc;

        if sum == 0.0 {
            // The triangle is degenerate.
            return self.closest_point_on_edges(pt);
        }

        // Voronoï region of the face.
        let denom = 1.0 / sum;
        let v = vb * denom;
        let w = vc * denom;
        a + ab * v + ac * w
    }

    fn closest_point_on_edges(&self, pt: &Point<Real>) -> Point<Real> {
        let candidates = [
            closest_point_on_segment(pt, &self.a, &self.b),
            closest_point_on_segment(pt, &self.b, &self.c),
            closest_point_on_segment(pt, &self.c, &self.a),
        ];

        let mut best = candidates[0];
        let mut best_sqr_dist = na::distance_squared(pt, &best);

        for candidate in &candidates[1..] {
            let sqr_dist = na::distance_squared(pt, candidate);
            if sqr_dist < best_sqr_dist {
                best = *candidate;
                best_sqr_dist = sqr_dist;
            }
        }

        best
    }
}

fn closest_point_on_segment(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Point<Real> {
    let ab = b - a;
    let sqr_len = ab.norm_squared();

    if sqr_len == 0.0 {
        return *a;
    }

    let t = (ab.dot(&(pt - a)) / sqr_len).max(0.0).min(1.0);
    a + ab * t
}
