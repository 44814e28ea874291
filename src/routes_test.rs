use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn teacher_path_binds_name() {
    let m = resolve("/teacher/jane-doe").expect("match");
    assert_eq!(m.page, Page::TeacherInfo);
    assert_eq!(m.param(TEACHER_NAME_PARAM), Some("jane-doe"));
}

#[test]
fn unknown_path_matches_nothing() {
    assert_eq!(resolve("/nonexistent"), None);
}

#[test]
fn every_literal_route_resolves_to_its_page() {
    for entry in ROUTES.iter().filter(|e| !e.pattern.contains(':')) {
        let m = resolve(entry.pattern)
            .unwrap_or_else(|| panic!("{} should resolve", entry.pattern));
        assert_eq!(m.page, entry.page, "{}", entry.pattern);
        assert!(m.params.is_empty());
    }
}

#[test]
fn root_resolves_to_home() {
    assert_eq!(resolve("/").map(|m| m.page), Some(Page::Home));
    assert_eq!(resolve("").map(|m| m.page), Some(Page::Home));
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(resolve("/about/").map(|m| m.page), Some(Page::About));
    assert_eq!(resolve("/search?subject=math").map(|m| m.page), Some(Page::Search));
    assert_eq!(resolve("/booking#top").map(|m| m.page), Some(Page::Booking));
    let m = resolve("/teacher/lin?tab=reviews").expect("match");
    assert_eq!(m.param(TEACHER_NAME_PARAM), Some("lin"));
}

#[test]
fn teacher_param_requires_a_non_empty_segment() {
    assert_eq!(resolve("/teacher"), None);
    assert_eq!(resolve("/teacher/"), None);
    assert_eq!(resolve("/teacher//x"), None);
    assert_eq!(resolve("/teacher/a/b"), None);
}

#[test]
fn matching_is_case_sensitive_and_exact() {
    assert_eq!(resolve("/About"), None);
    assert_eq!(resolve("/registerx"), None);
}

#[test]
fn register_teacher_and_course_form_are_both_reachable() {
    assert_eq!(resolve("/register-teacher").map(|m| m.page), Some(Page::RegisterTeacher));
    assert_eq!(resolve("/courseform").map(|m| m.page), Some(Page::CourseForm));
    let restored: Vec<&str> = ROUTES.iter().filter(|e| e.restored).map(|e| e.pattern).collect();
    assert_eq!(restored, vec!["/register-teacher", "/courseform"]);
}

#[test]
fn table_order_and_size_are_stable() {
    let patterns: Vec<&str> = ROUTES.iter().map(|e| e.pattern).collect();
    assert_eq!(
        patterns,
        vec![
            "/",
            "/about",
            "/login",
            "/register",
            "/search",
            "/personaldashboard",
            "/teacherdashboard",
            "/teacher/:teacherName",
            "/booking",
            "/register-teacher",
            "/courseform",
            "/reviewform",
        ]
    );
}

// =============================================================
// href
// =============================================================

#[test]
fn href_for_static_pages_is_the_pattern() {
    assert_eq!(Page::Login.href(None).as_deref(), Some("/login"));
    assert_eq!(Page::Home.href(Some("ignored")).as_deref(), Some("/"));
}

#[test]
fn teacher_href_fills_parameter_and_round_trips() {
    let href = Page::teacher_href("jane-doe").expect("href");
    assert_eq!(href, "/teacher/jane-doe");
    let m = resolve(&href).expect("match");
    assert_eq!(m.param(TEACHER_NAME_PARAM), Some("jane-doe"));
}

#[test]
fn teacher_href_rejects_missing_names() {
    assert_eq!(Page::TeacherInfo.href(None), None);
    assert_eq!(Page::teacher_href(""), None);
}

#[test]
fn teacher_href_encodes_reserved_and_non_ascii_names() {
    assert_eq!(
        Page::teacher_href("王小明").as_deref(),
        Some("/teacher/%E7%8E%8B%E5%B0%8F%E6%98%8E")
    );
    assert_eq!(Page::teacher_href("O'Brien").as_deref(), Some("/teacher/O%27Brien"));
    assert_eq!(Page::teacher_href("a/b").as_deref(), Some("/teacher/a%2Fb"));
    assert_eq!(Page::teacher_href("Mei Lin").as_deref(), Some("/teacher/Mei%20Lin"));
}

#[test]
fn encoded_teacher_segment_is_decoded() {
    for name in ["王小明", "O'Brien", "a/b", "Mei Lin", "jane-doe"] {
        let href = Page::teacher_href(name).expect("href");
        let m = resolve(&href).expect("match");
        assert_eq!(m.param(TEACHER_NAME_PARAM), Some(name), "{href}");
    }
    let m = resolve("/teacher/%E7%8E%8B%E5%B0%8F%E6%98%8E").expect("match");
    assert_eq!(m.param(TEACHER_NAME_PARAM), Some("王小明"));
}

#[test]
fn invalid_utf8_escape_matches_nothing() {
    assert_eq!(resolve("/teacher/%FF"), None);
}
