use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::Ray;
use num::Zero;

impl Aabb {
    /// Clips a ray against this `Aabb` using the slab test.
    ///
    /// Only the part of the ray with parameters in `[min_toi, max_toi]` is considered. Returns
    /// the parameters at which the ray enters and exits this box within that interval, or `None`
    /// if that part of the ray misses the box. A ray starting inside of the box enters it at
    /// `min_toi`.
    ///
    /// `max_toi` may be infinite.
    pub fn clip_ray(&self, ray: &Ray, min_toi: Real, max_toi: Real) -> Option<(Real, Real)> {
        let mut tmin = min_toi;
        let mut tmax = max_toi;

        for i in 0usize..DIM {
            if ray.dir[i].is_zero() {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at `min_toi`.
                    return None;
                }
            }
        }

        Some((tmin, tmax))
    }
}
