use super::*;

#[test]
fn ratings_allow_one_decimal_up_to_five() {
    for ok in ["1", "3", "4.5", "5", "5.0", "1.0"] {
        assert!(is_valid_rating(ok), "{ok}");
    }
    for bad in ["", "0", "6", "5.5", "4.55", "4.", ".5", "10", "3,5", "-1"] {
        assert!(!is_valid_rating(bad), "{bad}");
    }
}

#[test]
fn valid_review_keeps_rating_text() {
    let review = validate_review("9", " 4.5 ", "  great  ").expect("valid");
    let expected = ReviewInput {
        course_id: 9,
        rating: "4.5".to_owned(),
        comment: Some("great".to_owned()),
    };
    assert_eq!(review, expected);
}

#[test]
fn blank_comment_is_omitted() {
    assert_eq!(validate_review("9", "4", " ").expect("valid").comment, None);
}

#[test]
fn review_rejects_bad_fields() {
    assert_eq!(validate_review("x", "4", ""), Err("Choose a course."));
    assert_eq!(validate_review("9", "7", ""), Err("Rating must be between 1 and 5."));
    let long = "b".repeat(1001);
    assert_eq!(validate_review("9", "4", &long), Err("Comment must be at most 1000 characters."));
}
