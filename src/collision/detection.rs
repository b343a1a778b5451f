//! Speculative contact generation. Every routine reports the closest points
//! of the two shapes whether or not they touch; the signed distance is
//! negative when they overlap.

use glam::Vec2;

use super::aabb::Aabb;
use super::contact::{body_at, Contact, ContactGeometry};
use crate::error::{PhysicsError, PhysicsResult};
use crate::math::unit_or;
use crate::objects::{Plane, RigidBody};
use crate::shapes::Shape;

/// Contact between two circles, A at `center_a` and B at `center_b`.
pub fn circle_circle(center_a: Vec2, radius_a: f32, center_b: Vec2, radius_b: f32) -> ContactGeometry {
    // Concentric circles have no preferred direction; push along +y.
    let normal = unit_or(center_b - center_a, Vec2::Y);
    let pos_a = center_a + normal * radius_a;
    let pos_b = center_b - normal * radius_b;
    ContactGeometry {
        pos_a,
        pos_b,
        normal,
        distance: normal.dot(pos_b - pos_a),
    }
}

/// Contact between a circle (A) and a box (B).
///
/// The circle center selects a face when it lies strictly within the box's
/// horizontal or vertical extent, otherwise the nearest corner. A center
/// inside the box uses the face it is closest to.
pub fn circle_box(center: Vec2, radius: f32, aabb: &Aabb) -> ContactGeometry {
    let inside_x = center.x > aabb.left() && center.x < aabb.right();
    let inside_y = center.y > aabb.bottom() && center.y < aabb.top();

    let (pos_b, normal) = if inside_x && inside_y {
        let face = nearest_face(center, aabb);
        (aabb.face_midpoint(face), -Aabb::normal(face))
    } else if inside_x {
        let face = if center.y < aabb.bottom() { 1 } else { 3 };
        (aabb.face_midpoint(face), -Aabb::normal(face))
    } else if inside_y {
        let face = if center.x < aabb.left() { 2 } else { 0 };
        (aabb.face_midpoint(face), -Aabb::normal(face))
    } else {
        let left = center.x < aabb.left();
        let below = center.y < aabb.bottom();
        let corner = match (left, below) {
            (true, true) => 2,
            (true, false) => 3,
            (false, true) => 1,
            (false, false) => 0,
        };
        let pos_b = aabb.vertex(corner);
        let fallback = unit_or(aabb.center - center, Vec2::Y);
        (pos_b, unit_or(pos_b - center, fallback))
    };

    let pos_a = center + radius * normal;
    ContactGeometry {
        pos_a,
        pos_b,
        normal,
        distance: normal.dot(pos_b - pos_a),
    }
}

/// Face of `aabb` closest to a point inside it; ties favour the top.
fn nearest_face(point: Vec2, aabb: &Aabb) -> i32 {
    let depths = [
        (3, aabb.top() - point.y),
        (1, point.y - aabb.bottom()),
        (2, point.x - aabb.left()),
        (0, aabb.right() - point.x),
    ];
    depths
        .into_iter()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map_or(3, |(face, _)| face)
}

fn face_contact(a: &Aabb, face_a: i32, b: &Aabb, face_b: i32) -> ContactGeometry {
    let pos_a = a.face_midpoint(face_a);
    let pos_b = b.face_midpoint(face_b);
    let normal = Aabb::normal(face_a);
    ContactGeometry {
        pos_a,
        pos_b,
        normal,
        distance: normal.dot(pos_b - pos_a),
    }
}

/// Contact between two boxes.
///
/// Boxes overlapping on exactly one axis meet face to face across the other;
/// boxes overlapping on neither meet corner to corner. When both axes overlap
/// the axis of least penetration is used.
pub fn box_box(a: &Aabb, b: &Aabb) -> ContactGeometry {
    match (a.overlaps_x(b), a.overlaps_y(b)) {
        (true, false) => {
            if a.top() <= b.bottom() {
                face_contact(a, 3, b, 1)
            } else {
                face_contact(a, 1, b, 3)
            }
        }
        (false, true) => {
            if a.right() < b.left() {
                face_contact(a, 0, b, 2)
            } else {
                face_contact(a, 2, b, 0)
            }
        }
        (false, false) => {
            let left = a.right() < b.left();
            let below = a.top() < b.bottom();
            let (corner_a, corner_b) = match (left, below) {
                (true, true) => (0, 2),
                (true, false) => (1, 3),
                (false, true) => (3, 1),
                (false, false) => (2, 0),
            };
            let pos_a = a.vertex(corner_a);
            let pos_b = b.vertex(corner_b);
            let normal = unit_or(pos_b - pos_a, unit_or(b.center - a.center, Vec2::Y));
            ContactGeometry {
                pos_a,
                pos_b,
                normal,
                distance: pos_a.distance(pos_b),
            }
        }
        (true, true) => {
            let x = if a.center.x < b.center.x {
                face_contact(a, 0, b, 2)
            } else {
                face_contact(a, 2, b, 0)
            };
            let y = if a.center.y < b.center.y {
                face_contact(a, 3, b, 1)
            } else {
                face_contact(a, 1, b, 3)
            };
            // Both distances are non-positive; the larger one is the
            // shallower penetration.
            if x.distance > y.distance {
                x
            } else {
                y
            }
        }
    }
}

/// Contact between a plane (A) and a circle (B).
pub fn circle_plane(center: Vec2, radius: f32, plane: &Plane) -> ContactGeometry {
    let sd = plane.signed_distance(center);
    ContactGeometry {
        pos_a: center - sd * plane.normal,
        pos_b: center - radius * plane.normal,
        normal: plane.normal,
        distance: sd - radius,
    }
}

/// Contact between a plane (A) and a box (B), using the box corner (or
/// face midpoint, for axis-aligned planes) deepest along the plane normal.
pub fn box_plane(aabb: &Aabb, plane: &Plane) -> ContactGeometry {
    let n = plane.normal;
    let toward = |n: f32, h: f32| {
        if n > 0.0 {
            -h
        } else if n < 0.0 {
            h
        } else {
            0.0
        }
    };
    let pos_b = aabb.center
        + Vec2::new(
            toward(n.x, aabb.half_extent.x),
            toward(n.y, aabb.half_extent.y),
        );
    ContactGeometry {
        pos_a: plane.project(pos_b),
        pos_b,
        normal: n,
        distance: plane.signed_distance(pos_b),
    }
}

/// Builds the contact between rigid bodies `a` and `b`.
///
/// For a box/circle pair the circle always becomes side A, so the returned
/// contact may list the bodies in the opposite order.
pub fn body_contact(bodies: &[RigidBody], a: usize, b: usize) -> PhysicsResult<Contact> {
    let body_a = body_at(bodies, a)?;
    let body_b = body_at(bodies, b)?;
    let (ca, cb) = (body_a.center(), body_b.center());

    match (&body_a.collider.shape, &body_b.collider.shape) {
        (Shape::Circle(s), Shape::Circle(t)) => {
            Contact::between_bodies(bodies, a, b, circle_circle(ca, s.radius, cb, t.radius))
        }
        (Shape::Circle(s), Shape::Box(t)) => {
            Contact::between_bodies(bodies, a, b, circle_box(ca, s.radius, &t.aabb(cb)))
        }
        (Shape::Box(s), Shape::Circle(t)) => {
            Contact::between_bodies(bodies, b, a, circle_box(cb, t.radius, &s.aabb(ca)))
        }
        (Shape::Box(s), Shape::Box(t)) => Contact::between_bodies(bodies, a, b, box_box(&s.aabb(ca), &t.aabb(cb))),
        _ => Err(PhysicsError::UnsupportedPair {
            a: body_a.kind(),
            b: body_b.kind(),
        }),
    }
}

/// Builds the contact between plane `plane` and rigid body `body`.
pub fn plane_contact(planes: &[Plane], plane: usize, bodies: &[RigidBody], body: usize) -> PhysicsResult<Contact> {
    let p = planes.get(plane).ok_or(PhysicsError::IndexOutOfRange {
        what: "plane",
        index: plane,
        len: planes.len(),
    })?;
    let b = body_at(bodies, body)?;
    let geometry = match &b.collider.shape {
        Shape::Circle(c) => circle_plane(b.center(), c.radius, p),
        Shape::Box(bx) => box_plane(&bx.aabb(b.center()), p),
        Shape::Triangle(_) => return Err(PhysicsError::UnsupportedBodyKind(b.kind())),
    };
    Contact::with_plane(plane, bodies, body, geometry)
}
