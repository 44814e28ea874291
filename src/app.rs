//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{A, Router};
use leptos_router::hooks::use_location;

use crate::net::{BrowserGateway, ClientConfig, FetchTransport, Gateway, Session};
use crate::pages::{
    about::AboutPage, booking::BookingPage, course_form::CourseFormPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, personal_dashboard::PersonalDashboardPage,
    register::RegisterPage, register_teacher::RegisterTeacherPage, review_form::ReviewFormPage,
    search::SearchPage, teacher_dashboard::TeacherDashboardPage, teacher_info::TeacherInfoPage,
};
use crate::routes::{self, Page, RouteMatch, TEACHER_NAME_PARAM};
use crate::state::auth::{AuthState, sign_out};
use crate::util::navigation::{LOGIN_PATH, hard_redirect};

/// Root application component.
///
/// Builds the shared gateway, provides it and the auth state as context, and
/// renders whichever page the route table selects for the current path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gateway = build_gateway();
    let auth = RwSignal::new(AuthState::from_session(gateway.session()));

    provide_context(auth);
    provide_context(StoredValue::new_local(gateway));

    view! {
        <Stylesheet id="leptos" href="/pkg/tutor-client.css"/>
        <Title text="Tutor"/>

        <Router>
            <NavBar/>
            <main class="page">
                <RoutedPage/>
            </main>
        </Router>
    }
}

/// Context handle for the shared gateway.
pub type GatewayHandle = StoredValue<BrowserGateway, LocalStorage>;

/// The shared gateway provided by [`App`]. Call during component setup and
/// clone out with `get_value()` inside handlers.
pub fn use_gateway() -> GatewayHandle {
    expect_context::<GatewayHandle>()
}

/// Run a gateway task on the browser event loop. Without the `csr` feature
/// there is no transport to drive, so the task is dropped.
pub fn spawn_task(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

fn build_gateway() -> BrowserGateway {
    Gateway::new(ClientConfig::from_build_env(), browser_session(), FetchTransport, || {
        hard_redirect(LOGIN_PATH);
    })
}

#[cfg(feature = "csr")]
fn browser_session() -> Session {
    Session::browser()
}

#[cfg(not(feature = "csr"))]
fn browser_session() -> Session {
    Session::new(std::rc::Rc::new(crate::net::MemoryStore::new()))
}

#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();
    move || match routes::resolve(&location.pathname.get()) {
        Some(matched) => render_page(&matched),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

fn render_page(matched: &RouteMatch) -> AnyView {
    match matched.page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Search => view! { <SearchPage/> }.into_any(),
        Page::PersonalDashboard => view! { <PersonalDashboardPage/> }.into_any(),
        Page::TeacherDashboard => view! { <TeacherDashboardPage/> }.into_any(),
        Page::TeacherInfo => {
            let teacher_name = matched.param(TEACHER_NAME_PARAM).unwrap_or_default().to_owned();
            view! { <TeacherInfoPage teacher_name=teacher_name/> }.into_any()
        }
        Page::Booking => view! { <BookingPage/> }.into_any(),
        Page::RegisterTeacher => view! { <RegisterTeacherPage/> }.into_any(),
        Page::CourseForm => view! { <CourseFormPage/> }.into_any(),
        Page::ReviewForm => view! { <ReviewFormPage/> }.into_any(),
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gateway = use_gateway();
    let link = |page: Page| page.href(None).unwrap_or_default();

    let on_logout = move |_| {
        let gateway = gateway.get_value();
        spawn_task(async move {
            if let Err(e) = sign_out(&gateway).await {
                log::warn!("logout request failed: {e}");
            }
            auth.set(AuthState::default());
        });
    };

    view! {
        <nav class="nav">
            <A href=link(Page::Home)>"Home"</A>
            <A href=link(Page::Search)>"Find a tutor"</A>
            <A href=link(Page::About)>"About"</A>
            <Show
                when=move || auth.get().logged_in
                fallback=move || {
                    view! {
                        <A href=link(Page::Login)>"Log in"</A>
                        <A href=link(Page::Register)>"Sign up"</A>
                    }
                }
            >
                <A href=link(Page::PersonalDashboard)>"My bookings"</A>
                <button class="nav__logout" on:click=on_logout>"Log out"</button>
            </Show>
        </nav>
    }
}
