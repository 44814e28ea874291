//! Navigable paths and the pages that render them.
//!
//! The table is flat and ordered: the first entry whose pattern matches wins.
//! A pattern segment starting with `:` matches any non-empty segment and binds
//! it, percent-decoded, under that name. No redirects, guards or nested routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes escaped in a path segment: everything but RFC 3986 unreserved.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Page components reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Login,
    Register,
    Search,
    PersonalDashboard,
    TeacherDashboard,
    TeacherInfo,
    Booking,
    RegisterTeacher,
    CourseForm,
    ReviewForm,
}

/// One `(pattern, page)` binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub page: Page,
    /// Set on the entries that were folded into a single malformed entry in
    /// the previous client, where only one of the pair was reachable.
    pub restored: bool,
}

const fn route(pattern: &'static str, page: Page) -> RouteEntry {
    RouteEntry { pattern, page, restored: false }
}

const fn restored(pattern: &'static str, page: Page) -> RouteEntry {
    RouteEntry { pattern, page, restored: true }
}

pub const TEACHER_NAME_PARAM: &str = "teacherName";

pub const ROUTES: &[RouteEntry] = &[
    route("/", Page::Home),
    route("/about", Page::About),
    route("/login", Page::Login),
    route("/register", Page::Register),
    route("/search", Page::Search),
    route("/personaldashboard", Page::PersonalDashboard),
    route("/teacherdashboard", Page::TeacherDashboard),
    route("/teacher/:teacherName", Page::TeacherInfo),
    route("/booking", Page::Booking),
    restored("/register-teacher", Page::RegisterTeacher),
    restored("/courseform", Page::CourseForm),
    route("/reviewform", Page::ReviewForm),
];

/// Result of resolving a path against [`ROUTES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: Page,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Resolve a browser path. Query string, fragment and trailing `/` are
/// ignored.
#[must_use]
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = normalize(path);
    ROUTES.iter().find_map(|entry| {
        match_pattern(entry.pattern, &path).map(|params| RouteMatch {
            page: entry.page,
            params,
        })
    })
}

impl Page {
    /// Pattern registered for this page.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        ROUTES.iter().find(|e| e.page == self).map_or("/", |e| e.pattern)
    }

    /// Concrete path for a link. `param` fills the named segment, if the
    /// pattern has one, percent-encoded; `None` when it is required but
    /// missing or empty.
    #[must_use]
    pub fn href(self, param: Option<&str>) -> Option<String> {
        let pattern = self.pattern();
        if !pattern.contains("/:") {
            return Some(pattern.to_owned());
        }
        let value = param.filter(|p| !p.is_empty())?;
        let encoded = utf8_percent_encode(value, SEGMENT).to_string();
        let segments: Vec<&str> = pattern
            .split('/')
            .map(|seg| if seg.starts_with(':') { encoded.as_str() } else { seg })
            .collect();
        Some(segments.join("/"))
    }

    /// Link to a teacher's public page.
    #[must_use]
    pub fn teacher_href(teacher_name: &str) -> Option<String> {
        Self::TeacherInfo.href(Some(teacher_name))
    }
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let expected: Vec<&'static str> = pattern.split('/').collect();
    let actual: Vec<&str> = path.split('/').collect();
    if expected.len() != actual.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in expected.into_iter().zip(actual) {
        if let Some(name) = want.strip_prefix(':') {
            if got.is_empty() {
                return None;
            }
            let decoded = percent_decode_str(got).decode_utf8().ok()?;
            params.push((name, decoded.into_owned()));
        } else if want != got {
            return None;
        }
    }
    Some(params)
}
