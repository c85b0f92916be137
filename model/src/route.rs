//! Hash-fragment routing.
//!
//! The site is a single page; the part of the URL after `#` decides which
//! page is mounted. Resolution is a pure prefix match over a fixed table with
//! [`Route::Home`] as the catch-all, so there is no error case.
//!
//! [`RouteResolver`] wraps the pure mapping with the current route and a list
//! of subscribers. The browser shell feeds it `hashchange` fragments; tests
//! feed it strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Expos,
    Sponsors,
    Programs,
    Team,
}

/// Prefix table checked in order. Home is not listed: it is the default arm.
const PREFIXES: [(&str, Route); 4] = [
    ("/expos", Route::Expos),
    ("/sponsors", Route::Sponsors),
    ("/programs", Route::Programs),
    ("/team", Route::Team),
];

impl Route {
    /// All routes in navigation order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Expos,
        Route::Sponsors,
        Route::Programs,
        Route::Team,
    ];

    /// Resolve a location fragment to a page.
    ///
    /// One leading `#` is stripped. An empty fragment means `/home`. Matching
    /// is by prefix, so `#/team/captains` is still the team page, and
    /// in-page anchors such as `#about` land on Home.
    pub fn resolve(fragment: &str) -> Route {
        Route::resolve_or(fragment, Route::Home)
    }

    /// Like [`Route::resolve`], but an empty fragment yields `landing`.
    ///
    /// A prerendered `expos.html` opened without a hash is still the Expos
    /// page.
    pub fn resolve_or(fragment: &str, landing: Route) -> Route {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        if path.is_empty() {
            return landing;
        }

        PREFIXES
            .iter()
            .find(|(prefix, _)| path.starts_with(prefix))
            .map(|(_, route)| *route)
            .unwrap_or(Route::Home)
    }

    /// Path form used inside the fragment, e.g. `/expos`.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/home",
            Route::Expos => "/expos",
            Route::Sponsors => "/sponsors",
            Route::Programs => "/programs",
            Route::Team => "/team",
        }
    }

    /// Full fragment including `#`, suitable for an `href`.
    pub fn fragment(&self) -> &'static str {
        match self {
            Route::Home => "#/home",
            Route::Expos => "#/expos",
            Route::Sponsors => "#/sponsors",
            Route::Programs => "#/programs",
            Route::Team => "#/team",
        }
    }

    pub fn slug(&self) -> &'static str {
        &self.path()[1..]
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Expos => "Expos",
            Route::Sponsors => "Sponsors",
            Route::Programs => "Programs",
            Route::Team => "Team",
        }
    }

    /// File name of the prerendered page for this route.
    pub fn static_file(&self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::Expos => "expos.html",
            Route::Sponsors => "sponsors.html",
            Route::Programs => "programs.html",
            Route::Team => "team.html",
        }
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::resolve(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Handle returned by [`RouteResolver::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(Route)>;

/// Current route plus change notification.
///
/// The resolver never reads global location state. The initial fragment is
/// passed in, and later fragments arrive through [`RouteResolver::navigate`].
pub struct RouteResolver {
    current: Route,
    landing: Route,
    next_id: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl RouteResolver {
    pub fn new(initial_fragment: &str) -> Self {
        Self::with_landing(initial_fragment, Route::Home)
    }

    /// Resolver for a page prerendered as `landing`: empty fragments, now and
    /// on later navigation, resolve to that page instead of Home.
    pub fn with_landing(initial_fragment: &str, landing: Route) -> Self {
        Self {
            current: Route::resolve_or(initial_fragment, landing),
            landing,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn landing(&self) -> Route {
        self.landing
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Register a callback invoked on every navigation event.
    pub fn subscribe(&mut self, listener: impl FnMut(Route) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Handle one navigation event.
    ///
    /// Every subscriber is called exactly once with the resolved route, even
    /// when the page does not change (the fragment may have moved to an
    /// in-page anchor).
    pub fn navigate(&mut self, fragment: &str) -> Route {
        self.current = Route::resolve_or(fragment, self.landing);
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.current);
        }
        self.current
    }
}

impl Default for RouteResolver {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolver")
            .field("current", &self.current)
            .field("landing", &self.landing)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
