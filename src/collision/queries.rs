//! Pure geometric predicates: overlap tests, point containment and closest
//! point on a triangle. Nothing here mutates its operands.

use glam::Vec2;

use super::aabb::Aabb;
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::{cross, max3, min3, perp, project_on_edge};
use crate::shapes::{Collider, Shape};

pub fn overlap_circle_circle(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> bool {
    center_a.distance(center_b) < radius_a + radius_b
}

/// Circle against box via the closest point of the box to the circle center.
pub fn overlap_circle_box(center: Vec2, radius: f32, aabb: &Aabb) -> bool {
    if aabb.contains_point(center) {
        return true;
    }
    let closest = aabb.clamp(center);
    center.distance_squared(closest) < radius * radius
}

pub fn overlap_box_box(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps_x(b) && a.overlaps_y(b)
}

/// Circle against triangle; touching counts as overlapping.
pub fn overlap_circle_triangle(center: Vec2, radius: f32, verts: [Vec2; 3]) -> bool {
    let p = closest_point_on_triangle(verts[0], verts[1], verts[2], center);
    center.distance_squared(p) <= radius * radius
}

/// Separating-axis test between a box and a triangle.
///
/// The box axes are covered by rejecting on the triangle's bounds first; the
/// remaining candidate axes are the triangle's three edge normals.
pub fn overlap_box_triangle(aabb: &Aabb, verts: [Vec2; 3]) -> bool {
    let [a, b, c] = verts;
    let bounds = Aabb::from_min_max(a.min(b).min(c), a.max(b).max(c));
    if !aabb.overlaps(&bounds) {
        return false;
    }

    // Work relative to the box center so the box projects to [-r, r].
    let local = verts.map(|v| v - aabb.center);
    let edges = [b - a, c - b, a - c];

    for edge in edges {
        let n = perp(edge);
        let r = n.abs().dot(aabb.half_extent);
        let pa = local[0].dot(n);
        let pb = local[1].dot(n);
        let pc = local[2].dot(n);
        if max3(pa, pb, pc) < -r || min3(pa, pb, pc) > r {
            return false;
        }
    }
    true
}

pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    center.distance_squared(p) < radius * radius
}

pub fn point_in_box(p: Vec2, aabb: &Aabb) -> bool {
    aabb.contains_point(p)
}

/// Strict containment; points on an edge are outside.
pub fn point_in_triangle(p: Vec2, verts: [Vec2; 3]) -> bool {
    let [a, b, c] = verts;
    let d1 = cross(b - a, p - a);
    let d2 = cross(c - b, p - b);
    let d3 = cross(a - c, p - c);
    (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
}

/// Closest point to `p` on the (solid) triangle `va`, `vb`, `vc`, by Voronoi
/// region classification. Works for either winding.
pub fn closest_point_on_triangle(va: Vec2, vb: Vec2, vc: Vec2, p: Vec2) -> Vec2 {
    let ab = vb - va;
    let ac = vc - va;
    let bc = vc - vb;

    // Unnormalized parameters along each edge, from both ends.
    let s_ab = (p - va).dot(ab);
    let s_ba = (p - vb).dot(-ab);
    let t_bc = (p - vb).dot(bc);
    let t_cb = (p - vc).dot(-bc);
    let u_ac = (p - va).dot(ac);
    let u_ca = (p - vc).dot(-ac);

    // Vertex regions
    if s_ab <= 0.0 && u_ac <= 0.0 {
        return va;
    }
    if s_ba <= 0.0 && t_bc <= 0.0 {
        return vb;
    }
    if u_ca <= 0.0 && t_cb <= 0.0 {
        return vc;
    }

    // Edge regions: p projects inside the edge and lies on the outer side,
    // where "outer" is relative to the triangle's winding n.
    let n = cross(ab, ac);

    if s_ab > 0.0 && s_ba > 0.0 && n * cross(va - p, vb - p) <= 0.0 {
        return project_on_edge(p, va, vb);
    }
    if t_bc > 0.0 && t_cb > 0.0 && n * cross(vb - p, vc - p) <= 0.0 {
        return project_on_edge(p, vb, vc);
    }
    if u_ac > 0.0 && u_ca > 0.0 && n * cross(vc - p, va - p) <= 0.0 {
        return project_on_edge(p, va, vc);
    }

    p
}

/// Overlap test between any two colliders. Triangle pairs have no routine
/// and are reported as [`PhysicsError::UnsupportedPair`].
pub fn overlaps(a: &Collider, b: &Collider) -> PhysicsResult<bool> {
    let overlap = match (&a.shape, &b.shape) {
        (Shape::Circle(ca), Shape::Circle(cb)) => overlap_circle_circle(a.center, ca.radius, b.center, cb.radius),
        (Shape::Circle(c), Shape::Box(bx)) => overlap_circle_box(a.center, c.radius, &bx.aabb(b.center)),
        (Shape::Box(bx), Shape::Circle(c)) => overlap_circle_box(b.center, c.radius, &bx.aabb(a.center)),
        (Shape::Box(ba), Shape::Box(bb)) => overlap_box_box(&ba.aabb(a.center), &bb.aabb(b.center)),
        (Shape::Circle(c), Shape::Triangle(t)) => overlap_circle_triangle(a.center, c.radius, t.vertices(b.center)),
        (Shape::Triangle(t), Shape::Circle(c)) => overlap_circle_triangle(b.center, c.radius, t.vertices(a.center)),
        (Shape::Box(bx), Shape::Triangle(t)) => overlap_box_triangle(&bx.aabb(a.center), t.vertices(b.center)),
        (Shape::Triangle(t), Shape::Box(bx)) => overlap_box_triangle(&bx.aabb(b.center), t.vertices(a.center)),
        (Shape::Triangle(_), Shape::Triangle(_)) => {
            return Err(PhysicsError::UnsupportedPair { a: a.kind(), b: b.kind() })
        }
    };
    Ok(overlap)
}

/// Whether `p` lies strictly inside the collider.
pub fn contains_point(collider: &Collider, p: Vec2) -> bool {
    match &collider.shape {
        Shape::Circle(c) => point_in_circle(p, collider.center, c.radius),
        Shape::Box(b) => point_in_box(p, &b.aabb(collider.center)),
        Shape::Triangle(t) => point_in_triangle(p, t.vertices(collider.center)),
    }
}
