use common::shapes::Rectangle;

/// Strict overlap: rectangles that only share an edge do not collide. A
/// zero-area rectangle collides only when it lies strictly inside the other.
pub fn rectangle_rectangle(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}
