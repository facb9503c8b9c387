#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use approx::assert_abs_diff_eq;
use evodrive::simulation::geometry::{
    Point, Segment, intersect, lerp, polygon_touches_segment, polygons_intersect,
};
use evodrive::simulation::road::Road;

fn pt(x: f64, y: f64) -> Point {
    Point { x, y }
}

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment::new(pt(ax, ay), pt(bx, by))
}

fn square(x: f64, y: f64, size: f64) -> [Point; 4] {
    [
        pt(x, y),
        pt(x + size, y),
        pt(x + size, y + size),
        pt(x, y + size),
    ]
}

#[test]
fn test_crossing_segments_intersect_in_the_middle() {
    let hit = intersect(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0)).unwrap();

    assert_abs_diff_eq!(hit.point.x, 1.0);
    assert_abs_diff_eq!(hit.point.y, 1.0);
    assert_abs_diff_eq!(hit.t, 0.5);
    assert_abs_diff_eq!(hit.u, 0.5);
}

#[test]
fn test_intersection_is_symmetric() {
    let a = seg(0.0, 0.0, 4.0, 0.0);
    let b = seg(1.0, -1.0, 1.0, 1.0);

    let ab = intersect(&a, &b).unwrap();
    let ba = intersect(&b, &a).unwrap();

    assert_abs_diff_eq!(ab.point.x, ba.point.x, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.point.y, ba.point.y, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.t, 0.25, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.u, 0.5, epsilon = 1e-12);
    // parameter roles swap
    assert_abs_diff_eq!(ab.t, ba.u, epsilon = 1e-12);
    assert_abs_diff_eq!(ab.u, ba.t, epsilon = 1e-12);
}

#[test]
fn test_parallel_and_degenerate_segments_do_not_intersect() {
    assert!(intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)).is_none());
    // collinear overlap is parallel too
    assert!(intersect(&seg(0.0, 0.0, 2.0, 0.0), &seg(1.0, 0.0, 3.0, 0.0)).is_none());
    assert!(intersect(&seg(0.0, 0.0, 0.0, 0.0), &seg(-1.0, 0.0, 1.0, 0.0)).is_none());
}

#[test]
fn test_lines_crossing_outside_segments_do_not_intersect() {
    // lines cross at x = 2, beyond the end of the first segment
    assert!(intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(2.0, -1.0, 2.0, 1.0)).is_none());
    // lines cross at y = 0, before the start of the second segment
    assert!(intersect(&seg(0.0, 0.0, 4.0, 0.0), &seg(1.0, 1.0, 1.0, 3.0)).is_none());
}

#[test]
fn test_touching_endpoints_count_as_intersection() {
    let hit = intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(1.0, 0.0, 1.0, 1.0)).unwrap();
    assert_abs_diff_eq!(hit.t, 1.0);
    assert_abs_diff_eq!(hit.u, 0.0);
}

#[test]
fn test_polygon_intersection() {
    let a = square(0.0, 0.0, 1.0);

    // separated by more than the diagonal
    assert!(!polygons_intersect(&a, &square(3.0, 0.0, 1.0)));
    assert!(!polygons_intersect(&a, &square(2.0, 2.0, 1.0)));

    assert!(polygons_intersect(&a, &a));
    assert!(polygons_intersect(&a, &square(0.5, 0.5, 1.0)));
}

#[test]
fn test_polygon_against_segment() {
    let a = square(0.0, 0.0, 1.0);

    assert!(polygon_touches_segment(&a, &seg(0.5, -10.0, 0.5, 10.0)));
    assert!(!polygon_touches_segment(&a, &seg(2.0, -10.0, 2.0, 10.0)));
}

#[test]
fn test_lerp() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}

#[test]
fn test_lane_centers() {
    let road = Road::new(87.5, 175.0, 3);

    assert_abs_diff_eq!(road.lane_center(0), 29.166_666_666, epsilon = 1e-6);
    assert_abs_diff_eq!(road.lane_center(1), 87.5, epsilon = 1e-9);
    assert_abs_diff_eq!(road.lane_center(2), 145.833_333_333, epsilon = 1e-6);
}

#[test]
fn test_road_borders_and_dividers() {
    let road = Road::new(87.5, 175.0, 3);

    let borders = road.borders();
    assert_eq!(borders.len(), 2);
    assert_eq!(borders[0].start.x, 0.0);
    assert_eq!(borders[0].end.x, 0.0);
    assert_eq!(borders[1].start.x, 175.0);
    assert!(borders[0].start.y < -1_000_000.0);
    assert!(borders[0].end.y > 1_000_000.0);

    let dividers = road.lane_divider_xs();
    assert_eq!(dividers.len(), 2);
    assert_abs_diff_eq!(dividers[0], 175.0 / 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(dividers[1], 350.0 / 3.0, epsilon = 1e-9);
}
