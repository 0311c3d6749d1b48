//! ==============================================================================
//! routes.rs - static path table
//! ==============================================================================
//!
//! two routes, no parameters, no guards. the router in the dashboard crate
//! is built from these segments; anything else selects nothing.
//!
//! ==============================================================================

/// views reachable by navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    /// `/` - static greeting
    Home,
    /// `/admin` - dashboard view
    Admin,
}

impl AppRoute {
    /// absolute path of the route
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Admin => "/admin",
        }
    }

    /// static segment handed to the router (empty for the root)
    pub fn segment(self) -> &'static str {
        match self {
            AppRoute::Home => "",
            AppRoute::Admin => "admin",
        }
    }

    /// document title while the route is active
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Home => "Home",
            AppRoute::Admin => "Admin Dashboard",
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
