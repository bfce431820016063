use std::sync::Arc;

use actix_web::web::Data;
use actix_web::{Error, HttpResponse};
use paperclip::actix::{
    api_v2_operation,
    web::{self},
};

use crate::api::{Book, BookPayload, BookResponse, BookStatus, BookView, Isbn, UpdateStatusQuery};
use crate::book_store::{BookStore, BookStoreError, NewBook};
use crate::links;

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

fn unprocessable(message: impl Into<String>) -> HttpResponse {
    HttpResponse::UnprocessableEntity()
        .content_type("text/plain")
        .body(message.into())
}

fn book_view(book: &Book) -> BookView {
    BookView {
        isbn: book.isbn,
        title: book.title.clone(),
        publication_date: book.publication_date.clone(),
        language: book.language.clone(),
        num_pages: book.num_pages,
        status: book.status,
        authors: links::author_links(book),
        reviews: links::review_links(book),
    }
}

#[api_v2_operation]
pub async fn get_book(
    book_store: Data<Arc<dyn BookStore + Send + Sync>>,
    isbn: web::Path<Isbn>,
) -> Result<HttpResponse, Error> {
    Ok(match book_store.get_by_isbn(isbn.into_inner()).await {
        Ok(book) => HttpResponse::Ok().json(BookResponse {
            book: Some(book_view(&book)),
            links: links::book_links(book.isbn),
        }),
        Err(BookStoreError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Get book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

#[api_v2_operation]
pub async fn create_book(
    book_store: Data<Arc<dyn BookStore + Send + Sync>>,
    payload: web::Json<BookPayload>,
) -> Result<HttpResponse, Error> {
    let payload = payload.into_inner();

    let status = match BookStatus::parse_or_default(payload.status.as_deref()) {
        Ok(status) => status,
        Err(err) => return Ok(unprocessable(err.to_string())),
    };
    if payload.authors.is_empty() {
        return Ok(unprocessable("Author cannot be empty"));
    }
    if payload.authors.iter().any(|author| author.name.is_empty()) {
        return Ok(unprocessable("Author Name cannot be empty"));
    }

    let new_book = NewBook {
        title: payload.title,
        publication_date: payload.publication_date,
        language: payload.language,
        num_pages: payload.num_pages,
        status,
        authors: payload
            .authors
            .into_iter()
            .map(|author| author.name)
            .collect(),
    };

    Ok(match book_store.save(new_book).await {
        Ok(book) => {
            HttpResponse::Created().json(BookResponse::links_only(links::book_links(book.isbn)))
        }
        Err(err) => {
            tracing::error!("Create book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

#[api_v2_operation]
pub async fn update_book_status(
    book_store: Data<Arc<dyn BookStore + Send + Sync>>,
    isbn: web::Path<Isbn>,
    query: web::Query<UpdateStatusQuery>,
) -> Result<HttpResponse, Error> {
    let status = match BookStatus::parse_or_default(query.status.as_deref()) {
        Ok(status) => status,
        Err(err) => return Ok(unprocessable(err.to_string())),
    };

    Ok(match book_store.update_status(isbn.into_inner(), status).await {
        Ok(book) => {
            let mut links = links::book_links(book.isbn);
            if !book.reviews.is_empty() {
                links.push(links::list_reviews_link(book.isbn));
            }
            HttpResponse::Ok().json(BookResponse::links_only(links))
        }
        Err(BookStoreError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Update book status failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}

#[api_v2_operation]
pub async fn delete_book(
    book_store: Data<Arc<dyn BookStore + Send + Sync>>,
    isbn: web::Path<Isbn>,
) -> Result<HttpResponse, Error> {
    Ok(match book_store.delete(isbn.into_inner()).await {
        Ok(()) => {
            HttpResponse::Ok().json(BookResponse::links_only(vec![links::create_book_link()]))
        }
        Err(BookStoreError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(err) => {
            tracing::error!("Delete book failed {}", err);
            HttpResponse::InternalServerError().finish()
        }
    })
}
