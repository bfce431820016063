use anyhow::{bail, Context};
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_tracing::TracingMiddleware;

use crate::api::{BookPayload, BookResponse, Isbn};
use crate::links;

pub struct BookServiceBooksClient {
    url: String,
    client: ClientWithMiddleware,
}

impl BookServiceBooksClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        let client = ClientBuilder::new(reqwest_client)
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// Calls POST /v1/books
    /// Returns the ISBN assigned to the created book, parsed from the
    /// view-book link of the envelope
    pub async fn create_book(&self, payload: BookPayload) -> anyhow::Result<Isbn> {
        let response = self
            .client
            .post(format!("{}{}", self.url, links::BOOKS_PATH))
            .json(&payload)
            .send()
            .await?;

        if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
            let message = response.text().await.unwrap_or_default();
            bail!("Book rejected: {}", message)
        }
        if !response.status().is_success() {
            bail!("Failed to create book {}", response.status())
        }

        let envelope: BookResponse = response
            .json()
            .await
            .context("Failed to decode create book response")?;

        envelope
            .links
            .iter()
            .find(|link| link.rel == "view-book")
            .context("No view-book link in response")?
            .href
            .rsplit('/')
            .next()
            .context("Invalid view-book link")?
            .parse()
            .context("Failed to parse isbn")
    }

    /// Calls GET /v1/books/{isbn}
    /// Returns None if the book does not exist
    pub async fn get_book(&self, isbn: Isbn) -> anyhow::Result<Option<BookResponse>> {
        let response = self
            .client
            .get(format!("{}{}/{}", self.url, links::BOOKS_PATH, isbn))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            bail!("Failed to get book {}", response.status())
        }

        Ok(Some(
            response
                .json()
                .await
                .context("Failed to decode get book response")?,
        ))
    }

    /// Calls PUT /v1/books/{isbn}?status=
    /// Returns the links envelope for the updated book
    pub async fn update_status(&self, isbn: Isbn, status: &str) -> anyhow::Result<BookResponse> {
        let response = self
            .client
            .put(format!("{}{}/{}", self.url, links::BOOKS_PATH, isbn))
            .query(&[("status", status)])
            .send()
            .await?;

        if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
            let message = response.text().await.unwrap_or_default();
            bail!("Status rejected: {}", message)
        }
        if !response.status().is_success() {
            bail!("Failed to update book status {}", response.status())
        }

        response
            .json()
            .await
            .context("Failed to decode update status response")
    }

    /// Calls DELETE /v1/books/{isbn}
    /// Returns the links envelope pointing back at the collection
    pub async fn delete_book(&self, isbn: Isbn) -> anyhow::Result<BookResponse> {
        let response = self
            .client
            .delete(format!("{}{}/{}", self.url, links::BOOKS_PATH, isbn))
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("Failed to delete book {}", response.status())
        }

        response
            .json()
            .await
            .context("Failed to decode delete book response")
    }
}
