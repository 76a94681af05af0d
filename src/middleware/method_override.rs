// src/middleware/method_override.rs

// Formulários HTML só enviam GET e POST. Um POST com `?_method=PUT`
// (ou DELETE / PATCH) é reescrito antes do roteamento.
//
// Precisa envolver o Router inteiro (não `Router::layer`), porque o
// roteamento por método acontece antes de qualquer layer interno.

use axum::{extract::Request, http::Method};

const OVERRIDE_PARAM: &str = "_method";

fn override_from_query(query: &str) -> Option<Method> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == OVERRIDE_PARAM)
        .and_then(|(_, value)| match value.to_ascii_uppercase().as_str() {
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        })
}

pub fn method_override(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    let target = request.uri().query().and_then(override_from_query);

    if let Some(method) = target {
        tracing::debug!(%method, uri = %request.uri(), "Método sobrescrito via _method");
        *request.method_mut() = method;
    }

    request
}
