//! Server-rendered website controllers

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::catalog_client::{Book, CatalogClientError};
use super::navigation::NavigablePage;
use super::{views, WebsiteState};

const SESSION_COOKIE: &str = "alexandria_session";

/// Build the website router
pub fn router(state: WebsiteState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/catalog", get(catalog))
        .route("/catalog/:page", get(catalog_page))
        .route("/catalog/books/:id", get(book_detail))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    link: Option<String>,
}

async fn home() -> Html<String> {
    views::render("home", &json!({}))
}

async fn catalog(
    State(state): State<WebsiteState>,
    jar: CookieJar,
    Query(query): Query<CatalogQuery>,
    headers: HeaderMap,
) -> Response {
    let accept_languages = accept_languages(&headers);
    let (jar, token) = session_token(jar);

    let result = match query.link {
        Some(link) => match state.sessions.current_page(token) {
            Some(current) => state.catalog.follow_link(&current, &link, &accept_languages).await,
            // The session may not hold the current page anymore, e.g.
            // after a restart; start browsing over.
            None => {
                state.sessions.clear_current_page(token);
                return (jar, Redirect::to("/catalog")).into_response();
            }
        },
        None => state.catalog.list_books(&accept_languages).await,
    };

    (jar, browse_page(&state, token, result)).into_response()
}

async fn catalog_page(
    State(state): State<WebsiteState>,
    jar: CookieJar,
    Path(page_number): Path<usize>,
    headers: HeaderMap,
) -> Response {
    let accept_languages = accept_languages(&headers);
    let (jar, token) = session_token(jar);
    let result = state
        .catalog
        .list_books_page(page_number, &accept_languages)
        .await;
    (jar, browse_page(&state, token, result)).into_response()
}

async fn book_detail(
    State(state): State<WebsiteState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Response {
    let accept_languages = accept_languages(&headers);
    match state.catalog.get_book(id, &accept_languages).await {
        Ok(book) => views::render(
            "catalog/book-detail",
            &json!({
                "book": {
                    "id": book.id.to_string(),
                    "title": book.title,
                    "description": book.description,
                    "authors": author_names(book.authors.iter().map(|author| author.name.as_str())),
                    "editions": book.editions.iter().map(|edition| json!({
                        "isbn": edition.isbn,
                        "title": edition.title,
                        "publisher": edition.publisher,
                        "publicationDate": edition.publication_date,
                        "language": edition.language,
                    })).collect::<Vec<_>>(),
                }
            }),
        )
        .into_response(),
        Err(error) => error_view(error).into_response(),
    }
}

fn browse_page(
    state: &WebsiteState,
    token: Uuid,
    result: Result<NavigablePage<Book>, CatalogClientError>,
) -> Html<String> {
    match result {
        Ok(page) => {
            state.sessions.switch_page(token, page.clone());
            views::render("catalog/root", &page_context(&page))
        }
        Err(error) => error_view(error),
    }
}

fn error_view(error: CatalogClientError) -> Html<String> {
    tracing::warn!("Rendering error view: {error}");
    views::render("error", &json!({"message": error.to_string()}))
}

fn page_context(page: &NavigablePage<Book>) -> serde_json::Value {
    let books: Vec<_> = page
        .content()
        .iter()
        .map(|book| {
            json!({
                "id": book.id.to_string(),
                "title": book.title,
                "authors": author_names(book.authors.iter().map(|author| author.name.as_str())),
                "description": book.description,
            })
        })
        .collect();

    let mut context = json!({
        "books": books,
        "pageUrl": format!("/catalog/{}", page.number()),
    });
    // First and last links are displayed only if there is respectively a
    // previous or a next page, since the catalog always provides first
    // and last links on non-empty pages.
    let attributes = [
        ("firstPageLinkName", "first", page.has_link("first") && page.has_link("prev")),
        ("previousPageLinkName", "prev", page.has_link("prev")),
        ("nextPageLinkName", "next", page.has_link("next")),
        ("lastPageLinkName", "last", page.has_link("last") && page.has_link("next")),
    ];
    for (attribute, link_name, present) in attributes {
        if present {
            context[attribute] = json!(link_name);
        }
    }
    context
}

fn author_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn accept_languages(headers: &HeaderMap) -> String {
    headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

fn session_token(jar: CookieJar) -> (CookieJar, Uuid) {
    if let Some(token) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
    {
        return (jar, token);
    }
    let token = Uuid::new_v4();
    let jar = jar.add(Cookie::build((SESSION_COOKIE, token.to_string())).path("/"));
    (jar, token)
}
