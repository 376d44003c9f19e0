use axum::http::HeaderMap;

/// Check the shared-secret credential on a protected route.
///
/// The secret can arrive as `X-API-Key: <secret>` or as
/// `Authorization: Bearer <secret>`. When no secret is configured the
/// service runs in open mode and every request is authorized. This is an
/// intentional default for private deployments, not an oversight.
pub fn is_authorized(headers: &HeaderMap, api_password: Option<&str>) -> bool {
    let Some(expected) = api_password else {
        return true;
    };

    if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok())
        && key == expected
    {
        return true;
    }

    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok())
        && let Some(token) = auth.strip_prefix("Bearer ")
        && token == expected
    {
        return true;
    }

    false
}
