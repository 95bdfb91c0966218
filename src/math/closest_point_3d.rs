use super::{Point3, TOLERANCE};

/// Closest point to `p` on the closed segment `[a, b]`.
///
/// Returns the squared distance from `p` to that point together with the
/// point itself. A zero-length segment collapses onto `a`.
#[must_use]
pub fn point_segment_closest(p: &Point3, a: &Point3, b: &Point3) -> (f64, Point3) {
    let ab = b - a;
    let ap = p - a;
    let ab_ap = ab.dot(&ap);
    let sqnab = ab.norm_squared();

    let witness = if ab_ap <= 0.0 {
        // Voronoi region of `a`.
        *a
    } else if ab_ap >= sqnab {
        // Voronoi region of `b`.
        *b
    } else {
        a + ab * (ab_ap / sqnab)
    };

    ((p - witness).norm_squared(), witness)
}

/// Closest point to `p` on the closed triangle `abc`.
///
/// Walks the Voronoi regions of the vertices, then of the edges, before
/// projecting onto the interior with barycentric coordinates. Returns the
/// squared distance and the closest point.
///
/// Triangles whose area vanishes (relative to their edge lengths) are handled
/// as the union of their three edges, so the result stays finite for
/// collinear or coincident corners.
#[must_use]
pub fn point_triangle_closest(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> (f64, Point3) {
    let ab = b - a;
    let ac = c - a;

    let normal = ab.cross(&ac);
    if normal.norm_squared() <= TOLERANCE * TOLERANCE * ab.norm_squared() * ac.norm_squared() {
        return degenerate_triangle_closest(p, a, b, c);
    }

    let ap = p - a;
    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);
    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        return with_dist(p, *a);
    }

    let bp = p - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);
    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        return with_dist(p, *b);
    }

    let vc = ab_ap * ac_bp - ab_bp * ac_ap;
    if vc <= 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        let v = ab_ap / (ab_ap - ab_bp);
        return with_dist(p, a + ab * v);
    }

    let cp = p - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);
    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        return with_dist(p, *c);
    }

    let vb = ab_cp * ac_ap - ab_ap * ac_cp;
    if vb <= 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        let w = ac_ap / (ac_ap - ac_cp);
        return with_dist(p, a + ac * w);
    }

    let va = ab_bp * ac_cp - ab_cp * ac_bp;
    let on_bc_b = ac_bp - ab_bp;
    let on_bc_c = ab_cp - ac_cp;
    if va <= 0.0 && on_bc_b >= 0.0 && on_bc_c >= 0.0 {
        let w = on_bc_b / (on_bc_b + on_bc_c);
        return with_dist(p, b + (c - b) * w);
    }

    // Interior: va + vb + vc equals |ab x ac|^2, which is non-zero here.
    let denom = va + vb + vc;
    let v = vb / denom;
    let w = vc / denom;
    with_dist(p, a + ab * v + ac * w)
}

fn degenerate_triangle_closest(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> (f64, Point3) {
    let mut best = point_segment_closest(p, a, b);
    for candidate in [point_segment_closest(p, b, c), point_segment_closest(p, c, a)] {
        if candidate.0 < best.0 {
            best = candidate;
        }
    }
    best
}

fn with_dist(p: &Point3, witness: Point3) -> (f64, Point3) {
    ((p - witness).norm_squared(), witness)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── point_segment_closest ──

    #[test]
    fn segment_interior_projection() {
        let (dist, witness) =
            point_segment_closest(&Point3::origin(), &p(1.0, 0.0, 1.0), &p(0.0, 1.0, 1.0));
        assert_relative_eq!(witness, p(0.5, 0.5, 1.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn segment_clamps_to_start() {
        let (dist, witness) =
            point_segment_closest(&Point3::origin(), &p(1.0, 0.0, 0.0), &p(3.0, 0.0, 0.0));
        assert_eq!(witness, p(1.0, 0.0, 0.0));
        assert_relative_eq!(dist, 1.0);
    }

    #[test]
    fn segment_clamps_to_end() {
        let (dist, witness) =
            point_segment_closest(&Point3::origin(), &p(-3.0, 2.0, 0.0), &p(-1.0, 2.0, 0.0));
        assert_eq!(witness, p(-1.0, 2.0, 0.0));
        assert_relative_eq!(dist, 5.0);
    }

    #[test]
    fn segment_perpendicular_foot_at_endpoint() {
        // The foot of the perpendicular lands exactly on `a`.
        let (dist, witness) =
            point_segment_closest(&Point3::origin(), &p(0.0, 0.0, 1.0), &p(1.0, 0.0, 1.0));
        assert_eq!(witness, p(0.0, 0.0, 1.0));
        assert_relative_eq!(dist, 1.0);
    }

    #[test]
    fn zero_length_segment_collapses_to_point() {
        let a = p(2.0, -1.0, 0.5);
        let (dist, witness) = point_segment_closest(&Point3::origin(), &a, &a);
        assert_eq!(witness, a);
        assert_relative_eq!(dist, a.coords.norm_squared());
    }

    #[test]
    fn segment_through_query_point() {
        let (dist, witness) =
            point_segment_closest(&Point3::origin(), &p(-1.0, -1.0, -1.0), &p(1.0, 1.0, 1.0));
        assert_relative_eq!(dist, 0.0, epsilon = 1e-12);
        assert_relative_eq!(witness, Point3::origin(), epsilon = 1e-12);
    }

    // ── point_triangle_closest ──

    #[test]
    fn triangle_interior_projection() {
        let (dist, witness) = point_triangle_closest(
            &Point3::origin(),
            &p(-1.0, -1.0, 2.0),
            &p(1.0, -1.0, 2.0),
            &p(0.0, 1.0, 2.0),
        );
        assert_relative_eq!(witness, p(0.0, 0.0, 2.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_vertex_region() {
        let (dist, witness) = point_triangle_closest(
            &Point3::origin(),
            &p(0.0, 0.0, 1.0),
            &p(1.0, 0.0, 1.0),
            &p(0.0, 1.0, 1.0),
        );
        assert_eq!(witness, p(0.0, 0.0, 1.0));
        assert_relative_eq!(dist, 1.0);
    }

    #[test]
    fn triangle_vertex_regions_of_b_and_c() {
        let a = p(5.0, 5.0, 0.0);
        let b = p(1.0, 0.0, 0.0);
        let c = p(0.0, 1.0, 0.0);

        let (_, witness) = point_triangle_closest(&p(2.0, -1.0, 0.0), &a, &b, &c);
        assert_eq!(witness, b);

        let (_, witness) = point_triangle_closest(&p(-1.0, 2.0, 0.0), &a, &b, &c);
        assert_eq!(witness, c);
    }

    #[test]
    fn triangle_edge_regions() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(2.0, 0.0, 0.0);
        let c = p(0.0, 2.0, 0.0);

        // Below `ab`.
        let (dist, witness) = point_triangle_closest(&p(1.0, -1.0, 0.0), &a, &b, &c);
        assert_relative_eq!(witness, p(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 1.0, epsilon = 1e-12);

        // Left of `ac`.
        let (dist, witness) = point_triangle_closest(&p(-1.0, 1.0, 0.0), &a, &b, &c);
        assert_relative_eq!(witness, p(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 1.0, epsilon = 1e-12);

        // Beyond the hypotenuse `bc`.
        let (dist, witness) = point_triangle_closest(&p(2.0, 2.0, 0.0), &a, &b, &c);
        assert_relative_eq!(witness, p(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_containing_query_point() {
        let (dist, witness) = point_triangle_closest(
            &Point3::origin(),
            &p(-1.0, -1.0, 0.0),
            &p(2.0, 0.0, 0.0),
            &p(0.0, 2.0, 0.0),
        );
        assert_relative_eq!(dist, 0.0, epsilon = 1e-12);
        assert_relative_eq!(witness, Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn collinear_triangle_falls_back_to_edges() {
        let (dist, witness) = point_triangle_closest(
            &Point3::origin(),
            &p(-1.0, 1.0, 0.0),
            &p(0.0, 1.0, 0.0),
            &p(3.0, 1.0, 0.0),
        );
        assert!(dist.is_finite());
        assert_relative_eq!(witness, p(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(dist, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_corners_stay_finite() {
        let a = p(1.0, 2.0, 3.0);
        let (dist, witness) = point_triangle_closest(&Point3::origin(), &a, &a, &a);
        assert_eq!(witness, a);
        assert_relative_eq!(dist, 14.0);
    }

    #[test]
    fn witness_is_closest_among_samples() {
        let a = p(0.3, -1.2, 0.7);
        let b = p(1.9, 0.4, -0.2);
        let c = p(-0.8, 1.1, 1.5);
        let (dist, _) = point_triangle_closest(&Point3::origin(), &a, &b, &c);

        for i in 0..=20 {
            for j in 0..=(20 - i) {
                let u = f64::from(i) / 20.0;
                let v = f64::from(j) / 20.0;
                let sample = a + (b - a) * u + (c - a) * v;
                assert!(dist <= sample.coords.norm_squared() + 1e-12);
            }
        }
    }
}
