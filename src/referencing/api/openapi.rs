//! OpenAPI documentation for the referencing service

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::support::{hal, health, pagination, problem};

use super::{authors, books};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alexandria Referencing API",
        version = "1.0.0",
        description = "Author and book referencing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        health::health_check,
        authors::list_authors,
        authors::reference_author,
        authors::get_author,
        books::list_books,
        books::reference_book,
        books::get_book,
    ),
    components(
        schemas(
            authors::AuthorReferencingRequest,
            authors::AuthorModel,
            authors::AuthorsEmbedded,
            authors::AuthorsPageResponse,
            books::BookReferencingRequest,
            books::BookReferencingDetail,
            books::BookModel,
            books::BookDetailModel,
            books::BooksEmbedded,
            books::BooksPageResponse,
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
        (name = "authors", description = "Author referencing and listing"),
        (name = "books", description = "Book referencing and listing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
