// Middleware modules for PhishGuard Core

pub mod auth;
pub mod cors;

pub use auth::ForwardedToken;
pub use cors::cors_layer;
