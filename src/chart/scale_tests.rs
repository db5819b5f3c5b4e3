use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

mod symlog_transform_tests {
    use super::*;

    #[test]
    fn linear_inside_threshold() {
        let scale = AxisScale::symlog(5.71);
        assert!(approx(scale.transform(0.0), 0.0));
        assert!(approx(scale.transform(5.71), SYMLOG_LINEAR_WIDTH));
        assert!(approx(scale.transform(-2.855), -0.5 * SYMLOG_LINEAR_WIDTH));
    }

    #[test]
    fn linear_band_is_wider_than_one_decade() {
        let scale = AxisScale::symlog(1.0);
        assert!(approx(scale.transform(1.0), 10.0 / 9.0));
        assert!(approx(scale.inverse(10.0 / 9.0), 1.0));
    }

    #[test]
    fn logarithmic_beyond_threshold() {
        let scale = AxisScale::symlog(0.21);
        assert!(approx(scale.transform(2.1), SYMLOG_LINEAR_WIDTH + 1.0));
        assert!(approx(scale.transform(21.0), SYMLOG_LINEAR_WIDTH + 2.0));
        assert!(approx(scale.transform(-21.0), -(SYMLOG_LINEAR_WIDTH + 2.0)));
    }

    #[test]
    fn inverse_round_trips() {
        let scale = AxisScale::symlog(5.71);
        for value in [-1000.0, -5.71, -1.0, 0.0, 0.3, 5.71, 42.0, 1.0e6] {
            let round_trip = scale.inverse(scale.transform(value));
            assert!((round_trip - value).abs() < 1e-9 * value.abs().max(1.0));
        }
    }

    #[test]
    fn linear_scale_is_identity() {
        assert!(approx(AxisScale::Linear.transform(3.5), 3.5));
        assert!(approx(AxisScale::Linear.inverse(-2.0), -2.0));
    }
}

mod nice_step_tests {
    use super::*;

    #[test]
    fn rounds_to_one_two_five() {
        assert!(approx(nice_step(0.13), 0.1));
        assert!(approx(nice_step(2.2), 2.0));
        assert!(approx(nice_step(4.0), 5.0));
        assert!(approx(nice_step(8.0), 10.0));
        assert!(approx(nice_step(370.0), 500.0));
    }

    #[test]
    fn degenerate_input_is_one() {
        assert!(approx(nice_step(0.0), 1.0));
        assert!(approx(nice_step(f64::NAN), 1.0));
    }
}

mod tick_tests {
    use super::*;

    #[test]
    fn linear_ticks_are_evenly_spaced() {
        let ticks = AxisScale::Linear.ticks(0.0, 10.0);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn linear_ticks_snap_zero() {
        let ticks = AxisScale::Linear.ticks(-0.3, 0.3);
        assert!(ticks.contains(&0.0));
        assert!(ticks.iter().all(|t| t.is_sign_positive() || *t < 0.0));
    }

    #[test]
    fn symlog_ticks_are_zero_and_decades() {
        let ticks = AxisScale::symlog(5.71).ticks(0.0, 5000.0);
        assert_eq!(ticks, vec![0.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn symlog_ticks_mirror_negative_side() {
        let ticks = AxisScale::symlog(1.0).ticks(-100.0, 100.0);
        assert_eq!(ticks, vec![-100.0, -10.0, -1.0, 0.0, 1.0, 10.0, 100.0]);
    }

    #[test]
    fn symlog_adds_threshold_when_no_decade_fits() {
        let ticks = AxisScale::symlog(5.71).ticks(0.0, 9.0);
        assert_eq!(ticks, vec![0.0, 5.71]);
    }

    #[test]
    fn symlog_thins_many_decades() {
        let ticks = AxisScale::symlog(1.0e-6).ticks(0.0, 1.0e6);
        assert!(ticks.len() <= MAX_DECADE_TICKS + 1);
        assert_eq!(ticks[0], 0.0);
    }
}

mod scale_range_tests {
    use super::*;

    #[test]
    fn histogram_range_sticks_to_zero() {
        let range = ScaleRange::fit(AxisScale::Linear, 0.0, 10.0, true);
        let (lo, hi) = range.domain();

        assert!(approx(lo, 0.0));
        assert!(approx(hi, 10.5));
        assert!(approx(range.normalize(0.0), 0.0));
    }

    #[test]
    fn non_sticky_range_pads_both_sides() {
        let range = ScaleRange::fit(AxisScale::Linear, 0.0, 10.0, false);
        let (lo, hi) = range.domain();

        assert!(approx(lo, -0.5));
        assert!(approx(hi, 10.5));
        assert!(approx(range.normalize(5.0), 0.5));
    }

    #[test]
    fn symlog_range_normalizes_in_scale_space() {
        let range = ScaleRange::fit(AxisScale::symlog(1.0), 0.0, 100.0, true);
        // transform(100) = width + 2, padded by 5%
        let top = (SYMLOG_LINEAR_WIDTH + 2.0) * 1.05;
        assert!(approx(range.normalize(100.0), (SYMLOG_LINEAR_WIDTH + 2.0) / top));
        assert!(approx(range.normalize(1.0), SYMLOG_LINEAR_WIDTH / top));
    }

    #[test]
    fn single_value_range_is_not_degenerate() {
        let range = ScaleRange::fit(AxisScale::Linear, 4.0, 4.0, false);
        let (lo, hi) = range.domain();
        assert!(lo < 4.0 && hi > 4.0);
    }

    #[test]
    fn ticks_fall_inside_unit_interval() {
        let range = ScaleRange::fit(AxisScale::Linear, 0.1, 0.9, false);
        let ticks = range.ticks();

        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|(_, pos)| (0.0..=1.0).contains(pos)));
    }
}
