//! URL paths for the four views.
//!
//! | Path            | View                  |
//! |-----------------|-----------------------|
//! | `/`             | product list          |
//! | `/product/{id}` | product detail        |
//! | `/create`       | form, create mode     |
//! | `/edit/{id}`    | form, edit mode       |
//!
//! Anything else redirects to `/`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Detail(ProductId),
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no view matches path `{0}`")]
pub struct RouteError(pub String);

/// Outcome of resolving an arbitrary path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// The path matched nothing and was replaced by the list route.
    pub redirected: bool,
}

impl Route {
    /// Resolve `path`, redirecting unmatched paths to [`Route::List`].
    pub fn resolve(path: &str) -> Resolved {
        match path.parse() {
            Ok(route) => Resolved {
                route,
                redirected: false,
            },
            Err(_) => Resolved {
                route: Route::List,
                redirected: true,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/product/{id}"),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let id = |s: &str| s.parse::<ProductId>().map_err(|_| RouteError(raw.to_string()));

        match segments.as_slice() {
            [] if path.starts_with('/') => Ok(Route::List),
            ["create"] => Ok(Route::Create),
            ["product", s] => Ok(Route::Detail(id(*s)?)),
            ["edit", s] => Ok(Route::Edit(id(*s)?)),
            _ => Err(RouteError(raw.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::List);
        assert_eq!("/product/5".parse::<Route>().unwrap(), Route::Detail(5));
        assert_eq!("/create".parse::<Route>().unwrap(), Route::Create);
        assert_eq!("/edit/12".parse::<Route>().unwrap(), Route::Edit(12));
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!("/edit/3/".parse::<Route>().unwrap(), Route::Edit(3));
        assert_eq!("/create?from=list".parse::<Route>().unwrap(), Route::Create);
    }

    #[test]
    fn unknown_paths_redirect_to_list() {
        for path in ["/nope", "/product/abc", "/edit", "/product/1/extra", ""] {
            let resolved = Route::resolve(path);
            assert_eq!(resolved.route, Route::List, "{path}");
            assert!(resolved.redirected, "{path}");
        }
    }

    #[test]
    fn root_is_not_a_redirect() {
        assert!(!Route::resolve("/").redirected);
    }

    #[test]
    fn path_and_parse_agree() {
        for route in [Route::List, Route::Detail(1), Route::Create, Route::Edit(9)] {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
    }
}
