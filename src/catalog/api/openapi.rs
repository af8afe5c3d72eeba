//! OpenAPI documentation for the catalog service

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::support::{hal, health, pagination, problem};

use super::{authors, books, catalog, editions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alexandria Catalog API",
        version = "1.0.0",
        description = "Library catalog consultation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        health::health_check,
        catalog::get_catalog,
        authors::get_author,
        books::get_book,
        editions::get_edition,
    ),
    components(
        schemas(
            catalog::CatalogPageResponse,
            catalog::CatalogEmbedded,
            authors::AuthorModel,
            authors::AuthorDetailsModel,
            authors::AuthorDetailsResponse,
            authors::NotableBooksEmbedded,
            books::BookModel,
            books::BookDetailsResponse,
            books::BookDetailsLinks,
            books::AuthorsEmbedded,
            editions::EditionModel,
            editions::EditionDetailsModel,
            pagination::PageMetadata,
            hal::Link,
            hal::SelfLinks,
            hal::NavigationLinks,
            problem::Problem,
            problem::ProblemError,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Catalog browsing"),
        (name = "authors", description = "Author consultation"),
        (name = "books", description = "Book consultation"),
        (name = "editions", description = "Edition consultation")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
