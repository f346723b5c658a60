use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "CloudSelect API",
        version = "0.1.0",
        description = "Ranks cloud providers against a workload's requirements and budget"
    ),
    servers(
        (url = "/api", description = "API base path")
    )
)]
struct ServiceDoc;

/// Service-level document with the recommendations API merged in.
///
/// The domain routes are merged at the API root rather than nested, so the
/// domain document is merged rather than nested too.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_recommendations::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_paths_are_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/providers",
            "/providers/{id}",
            "/assess",
            "/assessment/{id}",
            "/email-results",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        assert_eq!(doc.info.title, "CloudSelect API");
    }
}
