use crate::{CompressError, CompressionState, Compressor, CompressorConfig, Point, Trace, TraceEvent};
use proptest::prelude::*;

/// Slack for rounding in the slope arithmetic
const EPS: f64 = 1e-7;

prop_compose! {
    /// Random walk with strictly increasing, irregularly spaced timestamps
    fn arb_stream()(
        start in -100.0f64..100.0,
        steps in prop::collection::vec((0.1f64..10.0, -5.0f64..5.0), 1..300),
    ) -> Vec<Point> {
        let mut t = start;
        let mut v = 0.0;
        steps
            .into_iter()
            .map(|(dt, dv)| {
                t += dt;
                v += dv;
                Point::new(t, v)
            })
            .collect()
    }
}

proptest! {
    /// Property: the first point of a fresh compressor is archived alone
    #[test]
    fn prop_bootstrap(points in arb_stream(), comp_dev in 0.01f64..5.0) {
        let mut c = Compressor::new(CompressorConfig::new(comp_dev)).unwrap();
        c.push(points[0]).unwrap();
        prop_assert_eq!(c.archive().points(), &[points[0]]);
    }

    /// Property: archived points are never altered or removed
    #[test]
    fn prop_archive_append_only(
        points in arb_stream(),
        comp_dev in 0.01f64..5.0,
        comp_max in 1.0f64..50.0,
        comp_min in 0.0f64..0.5,
    ) {
        let config = CompressorConfig::new(comp_dev).with_max_gap(comp_max).with_min_gap(comp_min);
        let mut c = Compressor::new(config).unwrap();
        let mut before: Vec<Point> = Vec::new();
        for (i, &point) in points.iter().enumerate() {
            c.compression_test(point, i % 17 == 16).unwrap();
            let now = c.archive().points();
            prop_assert!(now.len() >= before.len());
            prop_assert!(now.len() <= before.len() + 1, "at most one point archived per call");
            prop_assert_eq!(&now[..before.len()], &before[..]);
            before = now.to_vec();
        }
    }

    /// Property: archived timestamps are strictly increasing
    #[test]
    fn prop_archive_time_ordered(points in arb_stream(), comp_dev in 0.01f64..5.0) {
        let mut c = Compressor::new(CompressorConfig::new(comp_dev)).unwrap();
        c.compress_all(&points).unwrap();
        let times = c.archive().time_stamps();
        for window in times.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        prop_assert_eq!(c.archive().last_archived(), points.last().copied());
    }

    /// Property: cone bounds never loosen while the anchor stays fixed
    #[test]
    fn prop_cone_monotonic_tightening(
        anchor_value in -100.0f64..100.0,
        snapshots in prop::collection::vec((0.01f64..10.0, -100.0f64..100.0), 1..100),
        comp_dev in 0.01f64..5.0,
        probe in 0.1f64..1_000.0,
    ) {
        let anchor = Point::new(0.0, anchor_value);
        let mut state = CompressionState::new();
        let mut t = 0.0;
        let mut prev_max = f64::INFINITY;
        let mut prev_min = f64::NEG_INFINITY;
        for (dt, value) in snapshots {
            t += dt;
            state.update_cone(anchor, Point::new(t, value), comp_dev).unwrap();
            let cone = state.cone();
            prop_assert_eq!(cone.f_max(anchor.time), anchor_value);
            prop_assert_eq!(cone.f_min(anchor.time), anchor_value);
            prop_assert!(cone.f_max(probe) <= prev_max);
            prop_assert!(cone.f_min(probe) >= prev_min);
            prev_max = cone.f_max(probe);
            prev_min = cone.f_min(probe);
        }
    }

    /// Property: linear reconstruction stays within comp_dev of every sample
    /// between two cone-driven archives
    #[test]
    fn prop_deviation_band(points in arb_stream(), comp_dev in 0.01f64..5.0) {
        let mut c = Compressor::new(CompressorConfig::new(comp_dev)).unwrap();
        for &point in &points {
            c.push(point).unwrap();
        }
        let archive = c.archive();
        let end = archive.last_archived().unwrap().time;
        for point in points.iter().filter(|pt| pt.time <= end) {
            let rebuilt = archive.interpolate(point.time).unwrap();
            let err = (rebuilt - point.value).abs();
            prop_assert!(
                err <= comp_dev + EPS * (1.0 + point.value.abs() + rebuilt.abs()),
                "t={} value={} rebuilt={} err={} comp_dev={}",
                point.time, point.value, rebuilt, err, comp_dev
            );
        }
    }

    /// Property: a tested point at or past comp_max since the last archive is archived
    #[test]
    fn prop_max_gap_forces_archive(
        points in arb_stream(),
        comp_dev in 0.01f64..5.0,
        comp_max in 1.0f64..30.0,
    ) {
        let mut c = Compressor::new(CompressorConfig::new(comp_dev).with_max_gap(comp_max)).unwrap();
        for &point in &points {
            let last = c.archive().last_archived();
            let tested = last.is_some() && last != c.state().snapshot();
            c.push(point).unwrap();
            if let (true, Some(last)) = (tested, last) {
                if point.time - last.time >= comp_max {
                    prop_assert_eq!(c.archive().last_archived(), Some(point));
                    prop_assert!(c.state().cone().is_unbounded());
                }
            }
        }
    }

    /// Property: an ignored point changes neither the archive nor the snapshot
    #[test]
    fn prop_min_gap_suppression(
        points in arb_stream(),
        comp_dev in 0.01f64..5.0,
        comp_min in 0.0f64..20.0,
    ) {
        let config = CompressorConfig::new(comp_dev).with_min_gap(comp_min);
        let mut c = Compressor::with_observer(config, Trace::new()).unwrap();
        for &point in &points {
            let archive_len = c.archive().len();
            let snapshot = c.state().snapshot();
            let last = c.archive().last_archived();
            c.push(point).unwrap();
            if c.observer().events().last() == Some(&TraceEvent::Ignored(point)) {
                prop_assert_eq!(c.archive().len(), archive_len);
                prop_assert_eq!(c.state().snapshot(), snapshot);
                prop_assert!(point.time - last.unwrap().time < comp_min);
            }
        }
        prop_assert_eq!(c.tested_count(), points.len());
    }

    /// Property: rejected points leave the compressor unchanged
    #[test]
    fn prop_rejected_point_is_noop(
        points in arb_stream(),
        back in 0.0f64..50.0,
        value in -100.0f64..100.0,
    ) {
        let mut c = Compressor::new(CompressorConfig::new(0.5)).unwrap();
        for &point in &points {
            c.push(point).unwrap();
        }
        let archive = c.archive().clone();
        let state = *c.state();
        let last = *points.last().unwrap();

        let bad = Point::new(last.time - back, value);
        let err = c.compression_test(bad, true).unwrap_err();
        prop_assert_eq!(err, CompressError::NonMonotonicInput { point: bad, previous: last });
        prop_assert_eq!(c.archive(), &archive);
        prop_assert_eq!(c.state(), &state);
        prop_assert_eq!(c.tested_count(), points.len());
    }
}
