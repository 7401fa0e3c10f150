// Route path constants - single source of truth for all page and service paths

use crate::models::{Props, RouteEntry};

pub const INDEX: &str = "/";
pub const ABOUT: &str = "/about";
pub const HEALTH: &str = "/health";

/// The static route table: one entry per page path, defined at process start,
/// read on every matching request, never mutated.
///
/// Invariant: `path` values are unique within the table. The router build
/// rejects a table that violates this.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            path: INDEX,
            view_name: "Index",
            props: Props::new(),
        },
        RouteEntry {
            path: ABOUT,
            view_name: "About",
            props: Props::new(),
        },
    ]
}

/// Look up the route entry registered for an exact path. Unmatched paths are
/// not this table's concern; the router falls through to its default 404.
pub fn find_entry(path: &str) -> Option<RouteEntry> {
    route_table().into_iter().find(|entry| entry.path == path)
}
