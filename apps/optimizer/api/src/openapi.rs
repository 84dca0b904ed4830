use utoipa::OpenApi;

/// Combined API documentation.
///
/// Domain docs nest with an empty path prefix: the operation paths are the
/// public contract and live at the router root.
#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse, crate::api::info::InfoResponse)),
    info(
        title = "AI Code Optimizer Backend",
        version = "0.1.0",
        description = "LLM-backed code analysis plus semantic snippet storage and search"
    ),
    paths(crate::api::info::root),
    nest(
        (path = {""}, api = domain_snippets::SnippetsApiDoc),
        (path = {""}, api = domain_analysis::AnalysisApiDoc)
    )
)]
pub struct ApiDoc;
