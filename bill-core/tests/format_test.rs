use bill_core::format::{currency, discount_label_pct, energy, percentage, percentage_default};

#[test]
fn currency_groups_thousands_with_dots() {
    assert_eq!(currency(1234.5), "R$ 1.234,50");
    assert_eq!(currency(1234567.891), "R$ 1.234.567,89");
}

#[test]
fn currency_small_amounts() {
    assert_eq!(currency(0.0), "R$ 0,00");
    assert_eq!(currency(92.51), "R$ 92,51");
    assert_eq!(currency(706.0), "R$ 706,00");
}

#[test]
fn currency_rounds_to_cents() {
    assert_eq!(currency(119.196), "R$ 119,20");
    assert_eq!(currency(679.314), "R$ 679,31");
}

#[test]
fn currency_negative_keeps_marker_first() {
    assert_eq!(currency(-9.23), "R$ -9,23");
    assert_eq!(currency(-1500.0), "R$ -1.500,00");
}

#[test]
fn energy_has_no_marker() {
    assert_eq!(energy(1234.5), "1.234,50");
    assert_eq!(energy(642.0), "642,00");
}

#[test]
fn percentage_uses_comma_without_grouping() {
    assert_eq!(percentage_default(17.5), "17,5");
    assert_eq!(percentage(1234.5, 1), "1234,5");
    assert_eq!(percentage(20.0, 0), "20");
    assert_eq!(percentage(12.346, 2), "12,35");
}

#[test]
fn label_percentage_drops_whole_decimals() {
    assert_eq!(discount_label_pct(20.0), "20");
    assert_eq!(discount_label_pct(17.5), "17,5");
    assert_eq!(discount_label_pct(100.0), "100");
}

#[test]
fn label_percentage_rounds_before_dropping_decimals() {
    assert_eq!(discount_label_pct(19.96), "20");
    assert_eq!(discount_label_pct(12.34), "12,3");
    assert_eq!(discount_label_pct(0.04), "0");
}
