use crate::api::{Book, Isbn, Link};

/// Root of the books collection, shared by the route table and link hrefs.
pub const BOOKS_PATH: &str = "/v1/books";

fn book_location(isbn: Isbn) -> String {
    format!("{}/{}", BOOKS_PATH, isbn)
}

/// Links advertised for a single book: view, update, delete and review it.
pub fn book_links(isbn: Isbn) -> Vec<Link> {
    let location = book_location(isbn);
    vec![
        Link::new("view-book", location.clone(), "GET"),
        Link::new("update-book", location.clone(), "PUT"),
        Link::new("delete-book", location.clone(), "DELETE"),
        Link::new("create-review", format!("{}/reviews", location), "POST"),
    ]
}

pub fn create_book_link() -> Link {
    Link::new("create-book", BOOKS_PATH, "POST")
}

pub fn list_reviews_link(isbn: Isbn) -> Link {
    Link::new(
        "list-reviews",
        format!("{}/reviews", book_location(isbn)),
        "GET",
    )
}

/// One view-author link per author of the book.
pub fn author_links(book: &Book) -> Vec<Link> {
    book.authors
        .iter()
        .map(|author| {
            Link::new(
                "view-author",
                format!("{}/authors/{}", book_location(book.isbn), author.id),
                "GET",
            )
        })
        .collect()
}

/// One view-review link per review of the book.
pub fn review_links(book: &Book) -> Vec<Link> {
    book.reviews
        .iter()
        .map(|review| {
            Link::new(
                "view-review",
                format!("{}/reviews/{}", book_location(book.isbn), review.id),
                "GET",
            )
        })
        .collect()
}

#[cfg(test)]
mod links_tests {
    use crate::api::{Author, Book, BookStatus, Link, Review};
    use crate::links;

    fn book_with(authors: Vec<Author>, reviews: Vec<Review>) -> Book {
        Book {
            isbn: 7,
            title: "title".to_string(),
            publication_date: "2013-09-01".to_string(),
            language: "english".to_string(),
            num_pages: 100,
            status: BookStatus::Available,
            authors,
            reviews,
        }
    }

    #[test]
    fn book_links_cover_all_four_operations() {
        assert_eq!(
            links::book_links(7),
            vec![
                Link::new("view-book", "/v1/books/7", "GET"),
                Link::new("update-book", "/v1/books/7", "PUT"),
                Link::new("delete-book", "/v1/books/7", "DELETE"),
                Link::new("create-review", "/v1/books/7/reviews", "POST"),
            ]
        );
    }

    #[test]
    fn collection_level_links() {
        assert_eq!(
            links::create_book_link(),
            Link::new("create-book", "/v1/books", "POST")
        );
        assert_eq!(
            links::list_reviews_link(7),
            Link::new("list-reviews", "/v1/books/7/reviews", "GET")
        );
    }

    #[test]
    fn one_link_per_author_and_review() {
        let book = book_with(
            vec![
                Author {
                    id: 1,
                    name: "a".to_string(),
                },
                Author {
                    id: 2,
                    name: "b".to_string(),
                },
            ],
            vec![Review {
                id: 5,
                comment: "ok".to_string(),
            }],
        );

        assert_eq!(
            links::author_links(&book),
            vec![
                Link::new("view-author", "/v1/books/7/authors/1", "GET"),
                Link::new("view-author", "/v1/books/7/authors/2", "GET"),
            ]
        );
        assert_eq!(
            links::review_links(&book),
            vec![Link::new("view-review", "/v1/books/7/reviews/5", "GET")]
        );
    }

    #[test]
    fn no_links_for_empty_lists() {
        let book = book_with(vec![], vec![]);
        assert!(links::author_links(&book).is_empty());
        assert!(links::review_links(&book).is_empty());
    }
}
