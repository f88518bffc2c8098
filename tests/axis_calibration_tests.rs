use approx::assert_relative_eq;
use interval_chart::api::{
    AxisKind, AxisTransform, CoordinateTransform, calibrate_categorical_axis,
    calibrate_value_axis,
};
use interval_chart::core::{AxisRange, LinearScale, PlotBounds};

#[test]
fn categorical_axis_has_one_tick_per_position() {
    let axis = calibrate_categorical_axis(AxisRange::new(1.0, 4.0), (0.0, 1.0));

    assert_eq!(axis.kind, AxisKind::Categorical);
    assert_eq!(axis.domain, (0.5, 4.5));
    assert_eq!(axis.ticks.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(axis.tick_label(3.0), "3");
}

#[test]
fn empty_ranges_use_fallback_domain() {
    let categorical = calibrate_categorical_axis(AxisRange::EMPTY, (0.0, 1.0));
    assert_eq!(categorical.domain, (0.0, 1.0));
    assert!(categorical.ticks.is_empty());

    let value = calibrate_value_axis(AxisRange::EMPTY, 5, (0.0, 1.0)).expect("value axis");
    assert_eq!(value.domain.0, 0.0);
    assert_relative_eq!(value.domain.1, 1.0);
}

#[test]
fn value_axis_widens_to_nice_steps() {
    let axis = calibrate_value_axis(AxisRange::new(0.13, 0.87), 5, (0.0, 1.0)).expect("axis");

    assert_eq!(axis.kind, AxisKind::Value);
    assert_relative_eq!(axis.tick_step, 0.2);
    assert_relative_eq!(axis.domain.0, 0.0);
    assert_relative_eq!(axis.domain.1, 1.0);
    assert_eq!(axis.ticks.len(), 6);
    assert_eq!(axis.tick_label(axis.ticks[3]), "0.6");
}

#[test]
fn zero_width_value_range_is_padded() {
    let at_five = calibrate_value_axis(AxisRange::new(5.0, 5.0), 5, (0.0, 1.0)).expect("axis");
    assert_eq!(at_five.domain, (2.0, 8.0));

    let at_zero = calibrate_value_axis(AxisRange::new(0.0, 0.0), 5, (0.0, 1.0)).expect("axis");
    assert!(at_zero.domain.0 < 0.0 && at_zero.domain.1 > 0.0);
}

#[test]
fn inverted_value_range_is_ordered_before_calibration() {
    let axis = calibrate_value_axis(AxisRange::new(4.0, 0.0), 5, (0.0, 1.0)).expect("axis");
    assert_eq!(axis.domain, (0.0, 4.0));
}

#[test]
fn axis_transform_puts_larger_values_higher() {
    let x_axis = calibrate_categorical_axis(AxisRange::new(1.0, 3.0), (0.0, 1.0));
    let y_axis = calibrate_value_axis(AxisRange::new(0.0, 10.0), 5, (0.0, 1.0)).expect("axis");
    let bounds = PlotBounds {
        x: 50.0,
        y: 10.0,
        width: 600.0,
        height: 300.0,
    };
    let transform = AxisTransform::new(&x_axis, &y_axis, bounds).expect("transform");

    assert_relative_eq!(transform.transform_x(0.5), 50.0);
    assert_relative_eq!(transform.transform_x(3.5), 650.0);
    assert_relative_eq!(transform.transform_y(0.0), 310.0);
    assert_relative_eq!(transform.transform_y(10.0), 10.0);
    assert!(transform.transform_y(7.0) < transform.transform_y(3.0));
    assert_eq!(transform.plot_bounds(), bounds);
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 400.0, 0.0).expect("valid scale");

    let px = scale.domain_to_pixel(42.5);
    let recovered = scale.pixel_to_domain(px);
    assert_relative_eq!(recovered, 42.5, epsilon = 1e-9);
    assert_eq!(scale.domain_to_pixel(10.0), 400.0);
    assert_eq!(scale.domain_to_pixel(110.0), 0.0);
}

#[test]
fn linear_scale_rejects_degenerate_domain() {
    assert!(LinearScale::new(1.0, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::NAN, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 5.0, 5.0).is_err());
}

fn assert_finite_axis(range: AxisRange) {
    let axis = calibrate_value_axis(range, 5, (0.0, 1.0)).expect("value axis");
    let (low, high) = range.bounds().expect("non-empty range");

    assert!(axis.domain.0.is_finite() && axis.domain.1.is_finite());
    assert!(axis.domain.0 < axis.domain.1);
    assert!(axis.domain.0 <= low && axis.domain.1 >= high);
    assert!(axis.tick_step.is_finite() && axis.tick_step > 0.0);
    assert!(!axis.ticks.is_empty() && axis.ticks.len() <= 20);
    assert!(axis.ticks.iter().all(|tick| tick.is_finite()));
    assert!(
        axis.ticks
            .iter()
            .all(|tick| (axis.domain.0..=axis.domain.1).contains(tick))
    );
}

#[test]
fn value_axis_near_f64_max_stays_finite() {
    assert_finite_axis(AxisRange::new(0.0, 1.7e308));
    assert_finite_axis(AxisRange::new(f64::MAX, f64::MAX));
    assert_finite_axis(AxisRange::new(f64::MIN, f64::MIN));
}

#[test]
fn value_axis_wider_than_f64_max_stays_finite() {
    assert_finite_axis(AxisRange::new(-1e308, 1e308));
    assert_finite_axis(AxisRange::new(f64::MIN, f64::MAX));

    let axis = calibrate_value_axis(AxisRange::new(-1e308, 1e308), 5, (0.0, 1.0)).expect("axis");
    let bounds = PlotBounds {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };
    let x_axis = calibrate_categorical_axis(AxisRange::new(1.0, 1.0), (0.0, 1.0));
    let transform = AxisTransform::new(&x_axis, &axis, bounds).expect("transform");
    assert_relative_eq!(transform.transform_y(0.0), 50.0);
}

#[test]
fn subnormal_degenerate_value_range_is_padded() {
    assert_finite_axis(AxisRange::new(5e-324, 5e-324));
    assert_finite_axis(AxisRange::new(1e-310, 2e-310));

    let axis = calibrate_value_axis(AxisRange::new(5e-324, 5e-324), 5, (0.0, 1.0)).expect("axis");
    assert!(axis.domain.0 <= -0.5 && axis.domain.1 >= 0.5);
}
