use super::*;

#[test]
fn build_filters_blank_inputs_give_empty_query() {
    let filters = build_filters("  ", "", "").expect("valid");
    assert!(filters.to_query().is_empty());
}

#[test]
fn build_filters_keeps_trimmed_values() {
    let filters = build_filters(" math ", "Taipei", "900").expect("valid");
    assert_eq!(filters.keyword.as_deref(), Some("math"));
    assert_eq!(filters.location.as_deref(), Some("Taipei"));
    assert_eq!(filters.max_price, Some(900.0));
}

#[test]
fn build_filters_rejects_bad_price() {
    assert_eq!(build_filters("", "", "cheap"), Err("Max price must be a positive number."));
    assert_eq!(build_filters("", "", "-5"), Err("Max price must be a positive number."));
}

#[test]
fn price_label_rounds_or_falls_back() {
    let mut course = Course {
        id: 1,
        subject: "piano".to_owned(),
        description: None,
        price: Some(750.4),
        location: None,
        avg_rating: None,
        teacher_id: None,
        teacher_name: None,
    };
    assert_eq!(price_label(&course), "NT$750");
    course.price = None;
    assert_eq!(price_label(&course), "Price on request");
}
