use pmtplot::data::table::*;

#[test]
fn error_pairs_match_value_pairs_in_length() {
    for cfg in Configuration::ALL {
        let data = cfg.data();
        assert_eq!(data.gain.len(), data.gain_error.len(), "gain for {cfg}");
        assert_eq!(data.pe.len(), data.pe_error.len(), "pe for {cfg}");
    }
}

#[test]
fn zero_values_co_occur_with_zero_errors() {
    for cfg in Configuration::ALL {
        let data = cfg.data();
        for (values, errors) in [(&data.gain, &data.gain_error), (&data.pe, &data.pe_error)] {
            for (v, e) in values.values().iter().zip(errors.values()) {
                assert_eq!(*v == 0.0, *e == 0.0, "{cfg}: value {v} with error {e}");
            }
        }
    }
}

#[test]
fn all_lists_six_distinct_configurations() {
    let all = Configuration::ALL;
    assert_eq!(all.len(), 6);
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(all[0], Configuration::V800_MV20);
    assert_eq!(all[5], Configuration::V1200_MV100);
}

#[test]
fn configuration_display() {
    assert_eq!(Configuration::V1200_MV20.to_string(), "1200V / 20mV");
    assert_eq!(Configuration::V800_MV100.to_string(), "800V / 100mV");
}

#[test]
fn gain_errors_are_half_the_recorded_statistic() {
    let data = Configuration::V1200_MV20.data();
    assert_eq!(data.gain.values(), &[1156531.688, 0.0]);
    assert_eq!(data.gain_error.values(), &[597301.0, 0.0]);

    let data = Configuration::V1200_MV100.data();
    assert_eq!(data.gain.values(), &[12808031.33, 13064846.04]);
    assert_eq!(data.gain_error.values(), &[6736743.0, 6907212.0]);
}

#[test]
fn photoelectron_values_for_800v_100mv() {
    let data = Configuration::V800_MV100.data();
    assert_eq!(data.pe.values(), &[148.9045004, 134.8595213]);
    assert_eq!(data.pe_error.values(), &[3.960910033, 3.79486892]);
}

#[test]
fn only_1200v_20mv_has_missing_trials() {
    for cfg in Configuration::ALL {
        let data = cfg.data();
        if cfg == Configuration::V1200_MV20 {
            assert_eq!(data.missing_gain_trials(), vec![1]);
            assert_eq!(data.missing_pe_trials(), vec![1]);
        } else {
            assert!(data.missing_gain_trials().is_empty(), "{cfg}");
            assert!(data.missing_pe_trials().is_empty(), "{cfg}");
        }
    }
}

#[test]
fn missing_trials_needs_both_value_and_error_zero() {
    assert_eq!(missing_trials(&[0.0, 0.0], &[1.0, 0.0]), vec![1]);
    assert!(missing_trials(&[5.0], &[0.0]).is_empty());
}

#[test]
fn pair_get_out_of_range_is_none() {
    let pair = MeasurementPair::new([1.0, 2.0]);
    assert_eq!(pair.get(1), Some(2.0));
    assert_eq!(pair.get(TRIALS), None);
}

#[test]
fn is_missing_checks_value_and_error_together() {
    let data = Configuration::V1200_MV20.data();
    assert!(!data.gain.is_missing(&data.gain_error, 0));
    assert!(data.gain.is_missing(&data.gain_error, 1));
    assert!(data.pe.is_missing(&data.pe_error, 1));

    let values = MeasurementPair::new([0.0, 4.0]);
    let errors = MeasurementPair::new([0.5, 0.0]);
    assert!(!values.is_missing(&errors, 0), "zero value with nonzero error is data");
    assert!(!values.is_missing(&errors, 1), "nonzero value with zero error is data");
    assert!(!values.is_missing(&errors, TRIALS));
}

#[test]
fn trial_count_present_skips_sentinels() {
    for cfg in Configuration::ALL {
        let data = cfg.data();
        let expected = if cfg == Configuration::V1200_MV20 { 1 } else { TRIALS };
        assert_eq!(data.gain.trial_count_present(&data.gain_error), expected, "{cfg}");
        assert_eq!(data.pe.trial_count_present(&data.pe_error), expected, "{cfg}");
    }
}

#[test]
fn configuration_missing_trials_pairs_gain_and_pe() {
    assert_eq!(
        Configuration::V1200_MV20.data().missing_trials(),
        (vec![1], vec![1])
    );
    assert_eq!(
        Configuration::V800_MV20.data().missing_trials(),
        (vec![], vec![])
    );
}
