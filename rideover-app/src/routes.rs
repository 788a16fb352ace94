/// Application paths.
pub const HOME_PATH: &str = "/";
pub const RIDE_PATH: &str = "/ride";
pub const PROFILE_PATH: &str = "/profile";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Ride,
    Profile,
    Login,
    Register,
    NotFound,
}

/// Result of resolving a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Render(Page),
    Redirect(&'static str),
}

/// Map a requested path to exactly one page. Total and synchronous: every
/// input resolves to a page or a redirect. The profile page requires a
/// session; without one the request is redirected to the login page.
pub fn resolve(path: &str, session_present: bool) -> RouteOutcome {
    let normalized = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    match normalized {
        HOME_PATH => RouteOutcome::Render(Page::Home),
        RIDE_PATH => RouteOutcome::Render(Page::Ride),
        PROFILE_PATH if session_present => RouteOutcome::Render(Page::Profile),
        PROFILE_PATH => RouteOutcome::Redirect(LOGIN_PATH),
        LOGIN_PATH => RouteOutcome::Render(Page::Login),
        REGISTER_PATH => RouteOutcome::Render(Page::Register),
        _ => RouteOutcome::Render(Page::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_pages() {
        assert_eq!(resolve("/", false), RouteOutcome::Render(Page::Home));
        assert_eq!(resolve("/ride", false), RouteOutcome::Render(Page::Ride));
        assert_eq!(resolve("/login", false), RouteOutcome::Render(Page::Login));
        assert_eq!(
            resolve("/register", false),
            RouteOutcome::Render(Page::Register)
        );
    }

    #[test]
    fn profile_is_gated_on_a_session() {
        assert_eq!(
            resolve("/profile", true),
            RouteOutcome::Render(Page::Profile)
        );
        assert_eq!(
            resolve("/profile", false),
            RouteOutcome::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(
            resolve("/drivers", true),
            RouteOutcome::Render(Page::NotFound)
        );
        assert_eq!(resolve("", false), RouteOutcome::Render(Page::NotFound));
    }

    #[test]
    fn trailing_slashes_are_ignored() {
        assert_eq!(resolve("/ride/", false), RouteOutcome::Render(Page::Ride));
        assert_eq!(
            resolve("/profile/", false),
            RouteOutcome::Redirect(LOGIN_PATH)
        );
    }
}
