use super::*;

fn filled() -> TeacherForm {
    TeacherForm {
        name: " Mei Lin ".to_owned(),
        email: "mei@example.com".to_owned(),
        phone: String::new(),
        education: "NTU, Mathematics".to_owned(),
        certifications: "Teaching licence".to_owned(),
        intro: "Patient and practical.".to_owned(),
        teaching_experience: "5 years".to_owned(),
    }
}

#[test]
fn complete_form_builds_registration() {
    let reg = validate_teacher(Some(3), &filled()).expect("valid");
    assert_eq!(reg.user_id, 3);
    assert_eq!(reg.name, "Mei Lin");
    assert_eq!(reg.phone, None);
}

#[test]
fn registration_requires_login() {
    assert_eq!(validate_teacher(None, &filled()), Err("Log in before registering as a teacher."));
}

#[test]
fn email_must_look_valid() {
    let bad_emails =
        ["", "mei", "mei@", "@example.com", "mei@example", "mei@@example.com", "mei@example..com"];
    for bad in bad_emails {
        let form = TeacherForm { email: bad.to_owned(), ..filled() };
        assert_eq!(validate_teacher(Some(3), &form), Err("Enter a valid email address."), "{bad}");
    }
}

#[test]
fn profile_sections_are_required() {
    let form = TeacherForm { intro: "  ".to_owned(), ..filled() };
    assert_eq!(validate_teacher(Some(3), &form), Err("Fill in every profile section."));
}

#[test]
fn phone_is_kept_when_given() {
    let form = TeacherForm { phone: " 0912345678 ".to_owned(), ..filled() };
    let reg = validate_teacher(Some(3), &form).expect("valid");
    assert_eq!(reg.phone.as_deref(), Some("0912345678"));
}
