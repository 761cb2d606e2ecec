#![no_main]

use bezier_draw::{CurveFitter, LatLng};
use libfuzzer_sys::fuzz_target;

/// Je 4 Bytes ergeben einen Anker auf einem ganzzahligen Raster
/// (lat, lng als i16, little endian).
fn decode_anchors(data: &[u8]) -> Vec<LatLng> {
    data.chunks_exact(4)
        .take(256)
        .map(|chunk| {
            let lat = i16::from_le_bytes([chunk[0], chunk[1]]);
            let lng = i16::from_le_bytes([chunk[2], chunk[3]]);
            LatLng::new(f64::from(lat), f64::from(lng))
        })
        .collect()
}

fn close(a: LatLng, b: LatLng) -> bool {
    (a.lat - b.lat).abs() < 1e-6 && (a.lng - b.lng).abs() < 1e-6
}

fuzz_target!(|data: &[u8]| {
    let anchors = decode_anchors(data);
    let fitter = CurveFitter::default();
    let curve = fitter.fit(&anchors);

    if anchors.len() < 3 {
        assert_eq!(curve, anchors);
        return;
    }

    assert!(curve.iter().all(|p| p.is_finite()));

    // Kurve beginnt auf dem ersten und endet (fast) auf dem letzten Anker
    assert_eq!(curve.first(), anchors.first());
    let (Some(&end), Some(&last)) = (curve.last(), anchors.last()) else {
        panic!("Kurve darf nicht leer sein");
    };
    assert!(close(end, last), "{end:?} != {last:?}");

    // Keine direkt aufeinanderfolgenden Duplikate
    for pair in curve.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }

    // Deterministisch
    assert_eq!(fitter.fit(&anchors), curve);
});
