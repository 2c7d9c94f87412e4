//! Route handlers organized by resource

pub mod admin;
pub mod catalog;
pub mod health;
pub mod sitemap;
pub mod users;

/// Public API routes, as listed by the sitemap
pub const PUBLIC_ROUTES: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /people",
    "GET /people/{id}",
    "GET /planets",
    "GET /planets/{id}",
    "GET /users",
    "GET /users/{id}/favorites",
    "POST /users/{id}/favorite/planet/{planet_id}",
    "DELETE /users/{id}/favorite/planet/{planet_id}",
    "POST /users/{id}/favorite/people/{people_id}",
    "DELETE /users/{id}/favorite/people/{people_id}",
];

/// Admin table-editing routes, present unless disabled
pub const ADMIN_ROUTES: &[&str] = &[
    "GET /admin/users",
    "POST /admin/users",
    "GET /admin/users/{id}",
    "PUT /admin/users/{id}",
    "DELETE /admin/users/{id}",
    "GET /admin/people",
    "POST /admin/people",
    "GET /admin/people/{id}",
    "PUT /admin/people/{id}",
    "DELETE /admin/people/{id}",
    "GET /admin/planets",
    "POST /admin/planets",
    "GET /admin/planets/{id}",
    "PUT /admin/planets/{id}",
    "DELETE /admin/planets/{id}",
    "GET /admin/favorites",
    "POST /admin/favorites",
    "DELETE /admin/favorites/{id}",
];
