#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use approx::assert_abs_diff_eq;
use evodrive::simulation::controls::ControlSource;
use evodrive::simulation::geometry::{Point, Segment};
use evodrive::simulation::sensor::Sensor;
use evodrive::simulation::vehicle::Vehicle;

fn car_at(x: f64, y: f64) -> Vehicle {
    Vehicle::new(x, y, 30.0, 50.0, 3.0, ControlSource::Static)
}

fn vertical_border(x: f64) -> Segment {
    Segment::new(Point { x, y: -1000.0 }, Point { x, y: 1000.0 })
}

#[test]
fn test_fresh_sensor_reads_nothing() {
    let sensor = Sensor::new(5, 150.0, FRAC_PI_2);

    assert_eq!(sensor.readings.len(), 5);
    assert!(sensor.readings.iter().all(Option::is_none));
    assert_eq!(sensor.offsets().to_vec(), vec![0.0; 5]);
}

#[test]
fn test_rays_fan_around_heading() {
    let car = car_at(50.0, 0.0);
    let mut sensor = Sensor::new(3, 100.0, FRAC_PI_2);

    sensor.update(&car, &[], &[]);

    assert_eq!(sensor.rays.len(), 3);
    for ray in &sensor.rays {
        assert_eq!(ray.start, car.position());
    }
    // leftmost first, centre ray straight ahead
    assert_abs_diff_eq!(sensor.rays[0].end.x, 50.0 - 100.0 * FRAC_1_SQRT_2, epsilon = 1e-9);
    assert_abs_diff_eq!(sensor.rays[1].end.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sensor.rays[1].end.y, -100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sensor.rays[2].end.x, 50.0 + 100.0 * FRAC_1_SQRT_2, epsilon = 1e-9);
    assert!(sensor.readings.iter().all(Option::is_none));
}

#[test]
fn test_single_ray_points_straight_ahead() {
    let mut car = car_at(0.0, 0.0);
    car.angle = FRAC_PI_2;
    let mut sensor = Sensor::new(1, 100.0, FRAC_PI_2);

    sensor.update(&car, &[], &[]);

    assert_abs_diff_eq!(sensor.rays[0].end.x, -100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sensor.rays[0].end.y, 0.0, epsilon = 1e-9);
}

#[test]
fn test_border_readings() {
    let car = car_at(50.0, 0.0);
    let mut sensor = Sensor::new(3, 100.0, FRAC_PI_2);

    sensor.update(&car, &[vertical_border(0.0), vertical_border(100.0)], &[]);

    let left = sensor.readings[0].unwrap();
    assert_abs_diff_eq!(left.offset, FRAC_1_SQRT_2, epsilon = 1e-9);
    assert_abs_diff_eq!(left.point.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(left.point.y, -50.0, epsilon = 1e-9);

    assert!(sensor.readings[1].is_none());

    let right = sensor.readings[2].unwrap();
    assert_abs_diff_eq!(right.offset, FRAC_1_SQRT_2, epsilon = 1e-9);
    assert_abs_diff_eq!(right.point.x, 100.0, epsilon = 1e-9);

    let offsets = sensor.offsets();
    assert_abs_diff_eq!(offsets[0], 1.0 - FRAC_1_SQRT_2, epsilon = 1e-9);
    assert_eq!(offsets[1], 0.0);
    assert_abs_diff_eq!(offsets[2], 1.0 - FRAC_1_SQRT_2, epsilon = 1e-9);
}

#[test]
fn test_vehicle_reading_uses_nearest_edge() {
    let car = car_at(50.0, 0.0);
    let ahead = car_at(50.0, -60.0);
    let mut sensor = Sensor::new(1, 100.0, FRAC_PI_2);

    sensor.update(&car, &[], &[&ahead]);

    // the rear edge of the car ahead sits at y = -35
    let reading = sensor.readings[0].unwrap();
    assert_abs_diff_eq!(reading.offset, 0.35, epsilon = 1e-9);
    assert_abs_diff_eq!(reading.point.y, -35.0, epsilon = 1e-9);
    assert_abs_diff_eq!(sensor.offsets()[0], 0.65, epsilon = 1e-9);
}

#[test]
fn test_nearest_obstruction_wins() {
    let car = car_at(50.0, 0.0);
    let ahead = car_at(50.0, -60.0);
    let barrier = Segment::new(Point { x: 0.0, y: -20.0 }, Point { x: 100.0, y: -20.0 });
    let mut sensor = Sensor::new(1, 100.0, FRAC_PI_2);

    sensor.update(&car, &[barrier], &[&ahead]);
    assert_abs_diff_eq!(sensor.readings[0].unwrap().offset, 0.2, epsilon = 1e-9);

    let far_barrier = Segment::new(Point { x: 0.0, y: -90.0 }, Point { x: 100.0, y: -90.0 });
    sensor.update(&car, &[far_barrier], &[&ahead]);
    assert_abs_diff_eq!(sensor.readings[0].unwrap().offset, 0.35, epsilon = 1e-9);
}

#[test]
fn test_readings_follow_the_vehicle() {
    let mut car = car_at(50.0, 0.0);
    let ahead = car_at(50.0, -160.0);
    let mut sensor = Sensor::new(1, 100.0, FRAC_PI_2);

    sensor.update(&car, &[], &[&ahead]);
    assert!(sensor.readings[0].is_none());

    car.y = -50.0;
    sensor.update(&car, &[], &[&ahead]);
    // rear edge at y = -135, 85 ahead
    assert_abs_diff_eq!(sensor.readings[0].unwrap().offset, 0.85, epsilon = 1e-9);
}
