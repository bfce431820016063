use std::fmt;
use std::str::FromStr;

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

pub type Isbn = i64;
pub type AuthorId = i32;
pub type ReviewId = i32;

/// Status of a library book, always stored in its lowercase canonical form.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    #[default]
    Available,
    CheckOut,
    InQueue,
    Lost,
}

#[derive(thiserror::Error, Debug)]
#[error(
    "Wrong status value. Status should be one of the following: available, check-out, in-queue or lost"
)]
pub struct InvalidStatus(pub String);

impl BookStatus {
    /// Normalizes a raw status value from a request body or query parameter.
    /// A missing or empty value falls back to `Available`.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, InvalidStatus> {
        match raw {
            None => Ok(BookStatus::Available),
            Some(value) if value.is_empty() => Ok(BookStatus::Available),
            Some(value) => value.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckOut => "check-out",
            BookStatus::InQueue => "in-queue",
            BookStatus::Lost => "lost",
        }
    }
}

impl FromStr for BookStatus {
    type Err = InvalidStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "available" => Ok(BookStatus::Available),
            "check-out" => Ok(BookStatus::CheckOut),
            "in-queue" => Ok(BookStatus::InQueue),
            "lost" => Ok(BookStatus::Lost),
            _ => Err(InvalidStatus(value.to_string())),
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct Review {
    pub id: ReviewId,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    #[serde(rename = "publication-date")]
    pub publication_date: String,
    pub language: String,
    #[serde(rename = "num-pages")]
    pub num_pages: i32,
    pub status: BookStatus,
    pub authors: Vec<Author>,
    pub reviews: Vec<Review>,
}

/// Body of POST /v1/books.
/// The status arrives as free text and is validated by the handler.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct BookPayload {
    pub title: String,
    #[serde(rename = "publication-date")]
    pub publication_date: String,
    pub language: String,
    #[serde(rename = "num-pages")]
    pub num_pages: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub authors: Vec<AuthorPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct AuthorPayload {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct UpdateStatusQuery {
    #[serde(default)]
    pub status: Option<String>,
}

/// A hypermedia link advertised to clients alongside each response.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct Link {
    pub rel: String,
    pub href: String,
    pub method: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            method: method.into(),
        }
    }
}

/// View of a book as returned by GET: the entity fields with the owned
/// author and review lists replaced by per-item navigation links.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct BookView {
    pub isbn: Isbn,
    pub title: String,
    #[serde(rename = "publication-date")]
    pub publication_date: String,
    pub language: String,
    #[serde(rename = "num-pages")]
    pub num_pages: i32,
    pub status: BookStatus,
    pub authors: Vec<Link>,
    pub reviews: Vec<Link>,
}

/// Response envelope built fresh for every request and discarded after
/// serialization. Operations that do not return the entity carry links only.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
pub struct BookResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<BookView>,
    pub links: Vec<Link>,
}

impl BookResponse {
    pub fn links_only(links: Vec<Link>) -> Self {
        Self { book: None, links }
    }
}

#[cfg(test)]
mod book_status_tests {
    use crate::api::{BookStatus, InvalidStatus};

    #[test]
    fn parses_all_canonical_values() {
        assert_eq!(
            "available".parse::<BookStatus>().unwrap(),
            BookStatus::Available
        );
        assert_eq!(
            "check-out".parse::<BookStatus>().unwrap(),
            BookStatus::CheckOut
        );
        assert_eq!(
            "in-queue".parse::<BookStatus>().unwrap(),
            BookStatus::InQueue
        );
        assert_eq!("lost".parse::<BookStatus>().unwrap(), BookStatus::Lost);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("LOST".parse::<BookStatus>().unwrap(), BookStatus::Lost);
        assert_eq!(
            "Check-Out".parse::<BookStatus>().unwrap(),
            BookStatus::CheckOut
        );
        assert_eq!(
            "AVAILABLE".parse::<BookStatus>().unwrap(),
            BookStatus::Available
        );
    }

    #[test]
    fn missing_or_empty_value_defaults_to_available() {
        assert_eq!(
            BookStatus::parse_or_default(None).unwrap(),
            BookStatus::Available
        );
        assert_eq!(
            BookStatus::parse_or_default(Some("")).unwrap(),
            BookStatus::Available
        );
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = BookStatus::parse_or_default(Some("borrowed")).unwrap_err();
        assert!(matches!(err, InvalidStatus(ref value) if value == "borrowed"));
        assert_eq!(
            err.to_string(),
            "Wrong status value. Status should be one of the following: \
             available, check-out, in-queue or lost"
        );
    }

    #[test]
    fn serializes_to_canonical_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookStatus::CheckOut).unwrap(),
            "\"check-out\""
        );
        assert_eq!(
            serde_json::to_string(&BookStatus::InQueue).unwrap(),
            "\"in-queue\""
        );
        assert_eq!(BookStatus::Lost.to_string(), "lost");
    }
}
