#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    OAuthSuccess,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            "/oauth-success" => Route::OAuthSuccess,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login | Route::NotFound => "/",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::OAuthSuccess => "/oauth-success",
        }
    }

    pub fn current() -> Route {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Login)
    }
}

/// Full page navigation, the same way the server redirects into the app.
pub fn go_to(href: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(href).is_err() {
            log::error!("navigation to {} failed", href);
        }
    }
}

pub fn navigate(route: Route) {
    go_to(route.path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/signup"), Route::Signup);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/oauth-success"), Route::OAuthSuccess);
    }

    #[test]
    fn trailing_slash_query_and_fragment_are_ignored() {
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/oauth-success?code=abc"), Route::OAuthSuccess);
        assert_eq!(Route::from_path("/signup#top"), Route::Signup);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::from_path("/login"), Route::NotFound);
        assert_eq!(Route::from_path("/dashboard/extra"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Login, Route::Signup, Route::Dashboard, Route::OAuthSuccess] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
