#![no_main]

use libfuzzer_sys::fuzz_target;
use swingdoor::{Compressor, CompressorConfig, Point};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    // First byte picks the deviation, the rest are (dt: u8, value: i16) triples
    let comp_dev = f64::from(data[0].max(1)) / 16.0;
    let mut compressor = Compressor::new(CompressorConfig::new(comp_dev)).unwrap();

    let mut points = Vec::new();
    let mut t = 0.0;
    for chunk in data[1..].chunks_exact(3) {
        t += f64::from(chunk[0].max(1));
        let value = f64::from(i16::from_le_bytes([chunk[1], chunk[2]])) / 8.0;
        let point = Point::new(t, value);
        compressor.push(point).unwrap();
        points.push(point);
    }

    let archive = compressor.archive();
    let Some(end) = archive.last_archived() else {
        return;
    };

    // Property: every sample up to the last archive is rebuilt within comp_dev
    for point in points.iter().filter(|p| p.time <= end.time) {
        let rebuilt = archive.interpolate(point.time).unwrap();
        assert!(
            (rebuilt - point.value).abs() <= comp_dev + 1e-7 * (1.0 + point.value.abs() + rebuilt.abs()),
            "t={} value={} rebuilt={} comp_dev={}",
            point.time, point.value, rebuilt, comp_dev
        );
    }
});
