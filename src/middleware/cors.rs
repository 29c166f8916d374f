use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{debug, warn};

use crate::app_config::AppConfig;

/// CORS policy for the dashboard.
///
/// A `*` origin outside production reflects the request origin so the
/// dashboard can send credentials from any dev host. Otherwise only the
/// listed origins are allowed.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = &config.server.cors_allowed_origins;
    let has_wildcard = origins.iter().any(|o| o == "*");

    let allow_origin = if has_wildcard && !config.is_production() {
        debug!("CORS: Reflecting request origin");
        AllowOrigin::mirror_request()
    } else {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter(|o| o.as_str() != "*")
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("CORS: Ignoring invalid origin {:?}", o);
                    None
                },
            })
            .collect();
        debug!("CORS: {} whitelisted origins", allowed.len());
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
