use max31856_rs::data_types::ThermocoupleType;
use max31856_rs::registers::{
    celsius_to_fahrenheit, cj_celsius_to_raw, cj_raw_to_celsius, tc_celsius_to_raw,
    tc_raw_to_celsius,
};

#[test]
fn cj_known_encodings() {
    // 0x1900 = 6400 counts at 1/256 degC = +25.00 degC.
    assert_eq!(cj_raw_to_celsius(0x1900), 25.0);
    assert_eq!(cj_raw_to_celsius(0x0000), 0.0);
    // 0xFF00 = -256 counts = -1 degC; 0xFFC0 = -64 counts = -0.25 degC.
    assert_eq!(cj_raw_to_celsius(0xFF00), -1.0);
    assert_eq!(cj_raw_to_celsius(0xFFC0), -0.25);
}

#[test]
fn cj_roundtrip() {
    for raw in [0x0000u16, 0x1900, 0x7FFF, 0x8000, 0xFF00, 0xFFC0] {
        assert_eq!(cj_celsius_to_raw(cj_raw_to_celsius(raw)), raw);
    }
}

#[test]
fn tc_known_encodings() {
    // 10000 counts at 1/4096 degC = +2.44140625 degC.
    assert_eq!(tc_raw_to_celsius(0x00_2710), 10000.0 / 4096.0);
    assert!((tc_raw_to_celsius(0x00_2710) - 2.441).abs() < 0.001);
    // All-ones = -1 count.
    assert_eq!(tc_raw_to_celsius(0xFF_FFFF), -1.0 / 4096.0);
    assert_eq!(tc_raw_to_celsius(0x00_0000), 0.0);
}

#[test]
fn tc_roundtrip() {
    for raw in [
        0x00_0000u32,
        0x00_2710,
        0x7F_FFFF,
        0x80_0000,
        0xFF_FFFF,
        0x19_0000,
    ] {
        assert_eq!(tc_celsius_to_raw(tc_raw_to_celsius(raw)), raw);
    }
}

#[test]
fn fahrenheit_is_exact_linear_transform() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(25.0), 77.0);
    assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    for raw in [0x00_2710u32, 0xFF_FFFF, 0x19_0000] {
        let c = tc_raw_to_celsius(raw);
        assert_eq!(celsius_to_fahrenheit(c), c * 9.0 / 5.0 + 32.0);
    }
}

#[test]
fn type_ranges_survive_encoding() {
    let types = [
        ThermocoupleType::B,
        ThermocoupleType::E,
        ThermocoupleType::J,
        ThermocoupleType::K,
        ThermocoupleType::N,
        ThermocoupleType::R,
        ThermocoupleType::S,
        ThermocoupleType::T,
    ];
    for tc in types {
        let (lo, hi) = tc.temperature_range();
        assert!(lo < hi);
        for celsius in [lo, (lo + hi) / 2.0, hi] {
            let decoded = tc_raw_to_celsius(tc_celsius_to_raw(celsius));
            // Quantization only ever moves toward zero, never out of range.
            assert!(decoded >= lo - 0.001 && decoded <= hi + 0.001);
        }
    }
}
