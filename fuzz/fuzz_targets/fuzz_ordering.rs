#![no_main]

use libfuzzer_sys::fuzz_target;
use swingdoor::{CompressError, Compressor, CompressorConfig, Point};

fuzz_target!(|data: &[u8]| {
    let config = CompressorConfig::new(0.5).with_max_gap(40.0).with_min_gap(2.0);
    let mut compressor = Compressor::new(config).unwrap();
    let mut last: Option<Point> = None;

    // Bytes are (dt: i8, value: i8, force: u8) triples; dt <= 0 must be rejected
    for chunk in data.chunks_exact(3) {
        let dt = f64::from(chunk[0] as i8);
        let time = last.map_or(0.0, |p| p.time) + dt;
        let point = Point::new(time, f64::from(chunk[1] as i8));
        let force = chunk[2] & 1 == 1;

        let archive_before = compressor.archive().clone();
        let state_before = *compressor.state();

        match compressor.compression_test(point, force) {
            Ok(()) => {
                if let Some(prev) = last {
                    assert!(point.time > prev.time);
                }
                if force {
                    assert_eq!(compressor.archive().last_archived(), Some(point));
                }
                assert_eq!(&compressor.archive().points()[..archive_before.len()], archive_before.points());
                last = Some(point);
            }
            Err(CompressError::NonMonotonicInput { previous, .. }) => {
                assert_eq!(Some(previous), last);
                assert_eq!(compressor.archive(), &archive_before);
                assert_eq!(compressor.state(), &state_before);
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
});
