//! Type K conversion tests - segment selection, range window and NIST reference points

use shieldrun_core::thermocouple::{
    evaluate_poly, mv_to_temp_c, select_segment, voltage_to_temp_type_k, volts_to_temp_constants,
    ConversionError, Segment,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_negative_segment_span() {
    for mv in [-5.892, -5.891, -3.0, -1.0, -1e-9] {
        assert_eq!(select_segment(mv).unwrap(), Segment::Negative, "mv = {mv}");
    }
}

#[test]
fn test_low_segment_span() {
    for mv in [0.0, 1e-9, 4.096, 10.0, 20.0, 20.643_999] {
        assert_eq!(select_segment(mv).unwrap(), Segment::Low, "mv = {mv}");
    }
}

#[test]
fn test_high_segment_span() {
    for mv in [20.644, 25.0, 41.276, 54.886, 54.887] {
        assert_eq!(select_segment(mv).unwrap(), Segment::High, "mv = {mv}");
    }
}

#[test]
fn test_boundaries_select_upper_segment() {
    assert_eq!(
        volts_to_temp_constants(0.0).unwrap(),
        Segment::Low.coefficients()
    );
    assert_eq!(
        volts_to_temp_constants(20.644).unwrap(),
        Segment::High.coefficients()
    );
}

#[test]
fn test_out_of_range_voltages() {
    assert_eq!(
        mv_to_temp_c(-5.893),
        Err(ConversionError::OutOfRange { mv: -5.893 })
    );
    assert_eq!(
        mv_to_temp_c(54.888),
        Err(ConversionError::OutOfRange { mv: 54.888 })
    );
    assert!(volts_to_temp_constants(-100.0).is_err());
    assert!(mv_to_temp_c(f64::INFINITY).is_err());
    assert!(mv_to_temp_c(f64::NEG_INFINITY).is_err());
}

#[test]
fn test_error_message_names_value() {
    let err = mv_to_temp_c(54.888).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Voltage 54.888 mV out of valid Type K range (-5.891 to 54.886 mV)"
    );
}

#[test]
fn test_polynomial_evaluation() {
    assert_eq!(evaluate_poly(&[2.0, 3.0, 4.0], 2.0), 24.0);
}

#[test]
fn test_zero_millivolts_is_zero_celsius() {
    assert_eq!(mv_to_temp_c(0.0).unwrap(), 0.0);
}

#[test]
fn test_reference_points() {
    // Values from the NIST inverse polynomials evaluated as a direct power series
    assert_close(mv_to_temp_c(-5.891).unwrap(), -199.93307683474234);
    assert_close(mv_to_temp_c(-1.0).unwrap(), -25.857398880770003);
    assert_close(mv_to_temp_c(1.0).unwrap(), 24.983647640506447);
    assert_close(mv_to_temp_c(4.096).unwrap(), 99.96328562604403);
    assert_close(mv_to_temp_c(10.0).unwrap(), 246.22195599999972);
    assert_close(mv_to_temp_c(20.644).unwrap(), 499.94737296922193);
    assert_close(mv_to_temp_c(25.0).unwrap(), 602.227654101562);
    assert_close(mv_to_temp_c(41.276).unwrap(), 999.987179518232);
    assert_close(mv_to_temp_c(54.886).unwrap(), 1372.042734747465);
}

#[test]
fn test_nist_table_agreement() {
    // Tabulated EMF at round temperatures, inverse error within 0.1 °C
    let table = [
        (-5.891, -200.0),
        (-3.554, -100.0),
        (4.096, 100.0),
        (20.644, 500.0),
        (41.276, 1000.0),
        (54.886, 1372.0),
    ];
    for (mv, celsius) in table {
        let t = mv_to_temp_c(mv).unwrap();
        assert!((t - celsius).abs() < 0.1, "{mv} mV -> {t} °C, want {celsius}");
    }
}

#[test]
fn test_segments_meet_at_boundary() {
    // The Low and High polynomials agree to within 0.05 °C at 20.644 mV
    let low = evaluate_poly(Segment::Low.coefficients(), 20.644);
    let high = evaluate_poly(Segment::High.coefficients(), 20.644);
    assert!((low - high).abs() < 0.05);
}

#[test]
fn test_monotonic_over_window() {
    let mut previous = f64::NEG_INFINITY;
    let mut mv = -5.892;
    while mv <= 54.887 {
        let t = mv_to_temp_c(mv).unwrap();
        assert!(t > previous - 0.05, "non-monotonic at {mv} mV");
        previous = t;
        mv += 0.01;
    }
}

#[test]
fn test_batch_matches_scalar() {
    let voltages = [0.0, 10.0, 25.0];
    let temps = voltage_to_temp_type_k(&voltages).unwrap();
    assert_eq!(temps.len(), 3);
    for (mv, t) in voltages.iter().zip(&temps) {
        assert_eq!(*t, mv_to_temp_c(*mv).unwrap());
    }
}

#[test]
fn test_batch_fails_fast() {
    assert_eq!(
        voltage_to_temp_type_k(&[0.0, 100.0]),
        Err(ConversionError::OutOfRange { mv: 100.0 })
    );
    // First offending value is the one reported
    assert_eq!(
        voltage_to_temp_type_k(&[-6.0, 1.0, 60.0]),
        Err(ConversionError::OutOfRange { mv: -6.0 })
    );
}

#[test]
fn test_batch_empty() {
    assert_eq!(voltage_to_temp_type_k(&[]).unwrap(), Vec::<f64>::new());
}

#[test]
fn test_batch_passes_nan_through() {
    let temps = voltage_to_temp_type_k(&[1.0, f64::NAN]).unwrap();
    assert_close(temps[0], 24.983647640506447);
    assert!(temps[1].is_nan());
}
