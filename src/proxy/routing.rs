//! Prefix-based route matching for the registered REST paths.
//!
//! Routes are raw string prefixes of the request path. When several
//! prefixes match, the longest one wins, so the `testrun/search` entry
//! takes priority over the general `testrun` prefix regardless of the
//! order in which routes are registered.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub prefix: &'static str,
}

pub const ROUTES: &[Route] = &[
    Route {
        name: "testplan",
        prefix: "/rest/atm/1.0/testplan/",
    },
    Route {
        name: "testrun-search",
        prefix: "/rest/atm/1.0/testrun/search",
    },
    Route {
        name: "testrun",
        prefix: "/rest/atm/1.0/testrun",
    },
];

#[must_use]
pub fn match_route<'a>(routes: &'a [Route], path: &str) -> Option<&'a Route> {
    routes
        .iter()
        .filter(|route| path.starts_with(route.prefix))
        .max_by_key(|route| route.prefix.len())
}
