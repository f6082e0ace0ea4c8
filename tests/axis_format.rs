use pmtplot::plot::*;

#[test]
fn tick_marks_at_given_positions() {
    let marks = tick_marks(&[1.0, 2.0]);
    let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
    assert_eq!(values, vec![1.0, 2.0]);
    assert!(marks.iter().all(|m| m.step_size == 1.0));
}

#[test]
fn x_ticks_show_trial_number() {
    assert_eq!(format_x_tick(1.0), "1");
    assert_eq!(format_x_tick(2.0), "2");
}

#[test]
fn gains_use_scientific_notation() {
    assert_eq!(format_y_tick(1156531.688), "1.16e6");
    assert_eq!(format_y_tick(-597301.0), "-5.97e5");
    assert_eq!(format_y_tick(100000.0), "1.00e5");
}

#[test]
fn counts_use_trimmed_decimals() {
    assert_eq!(format_y_tick(9.635490418), "9.635");
    assert_eq!(format_y_tick(150.0), "150");
    assert_eq!(format_y_tick(2.5), "2.5");
    assert_eq!(format_y_tick(0.0), "0");
    assert_eq!(format_y_tick(-0.0001), "0");
}

#[test]
fn cap_width_stays_fixed_on_screen() {
    // 5 points at 400 points per trial
    assert_eq!(cap_half_width_in_plot_units(5.0, 400.0), 0.0125);
    // a window twice as wide halves the cap in plot units
    assert_eq!(cap_half_width_in_plot_units(5.0, 800.0), 0.00625);
    assert_eq!(cap_half_width_in_plot_units(5.0, -400.0), 0.0125);
}

#[test]
fn cap_width_without_a_usable_scale_is_zero() {
    assert_eq!(cap_half_width_in_plot_units(5.0, 0.0), 0.0);
    assert_eq!(cap_half_width_in_plot_units(5.0, f64::INFINITY), 0.0);
    assert_eq!(cap_half_width_in_plot_units(5.0, f64::NAN), 0.0);
    assert_eq!(cap_half_width_in_plot_units(0.0, 400.0), 0.0);
}
