use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the browser front end
///
/// Only `http://` and `https://` origins are honored; with none configured
/// the local development front end is allowed.
#[must_use]
pub fn cors_middleware(origins: &[String]) -> Cors {
    let mut allowed: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    if allowed.is_empty() {
        allowed = vec!["http://localhost:3000", "http://127.0.0.1:3000"];
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    for origin in allowed {
        cors = cors.allowed_origin(origin);
    }

    cors
}
