use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Gallery API",
        version = "0.1.0",
        description = "Login, token renewal and session revocation for the gallery"
    )
)]
struct GalleryDoc;

/// The served document: gallery metadata plus every domain's paths.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = GalleryDoc::openapi();
        doc.merge(domain_auth::handlers::ApiDoc::openapi());
        doc
    }
}
