//! Word endpoints

use super::error::ClientResult;
use super::request::{segment, ApiRequest};
use super::LangPortalClient;
use crate::models::{NewWord, PaginatedResponse, Word, WordFilters, WordUpdate};

/// Page size used by the vocabulary lists
pub const DEFAULT_WORDS_PER_PAGE: u32 = 20;

pub struct WordsApi<'a> {
    client: &'a LangPortalClient,
}

impl<'a> WordsApi<'a> {
    pub(super) fn new(client: &'a LangPortalClient) -> Self {
        Self { client }
    }

    /// `GET /words?page&per_page&search&jlpt_level&part_of_speech&group_id`
    ///
    /// Empty filters are left out of the query string.
    pub async fn list(
        &self,
        page: u32,
        per_page: u32,
        filters: &WordFilters,
    ) -> ClientResult<PaginatedResponse<Word>> {
        let request = filters
            .to_query()
            .into_iter()
            .fold(ApiRequest::get("/words").page(page, per_page), |req, (k, v)| {
                req.query(k, v)
            });

        self.client.send(request).await
    }

    /// `GET /words/{id}`
    pub async fn get(&self, id: &str) -> ClientResult<Word> {
        self.client
            .send(ApiRequest::get(format!("/words/{}", segment(id))))
            .await
    }

    /// `POST /words`
    pub async fn create(&self, word: &NewWord) -> ClientResult<Word> {
        self.client.send(ApiRequest::post("/words").json(word)?).await
    }

    /// `PUT /words/{id}`
    pub async fn update(&self, id: &str, update: &WordUpdate) -> ClientResult<Word> {
        let request = ApiRequest::put(format!("/words/{}", segment(id))).json(update)?;
        self.client.send(request).await
    }

    /// `DELETE /words/{id}`
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send_unit(ApiRequest::delete(format!("/words/{}", segment(id))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::MockExecutor;
    use crate::client::LangPortalClient;
    use crate::models::WordFilters;
    use serde_json::json;
    use std::sync::Arc;

    fn empty_page() -> serde_json::Value {
        json!({ "data": [], "total": 0, "page": 1, "per_page": 20, "total_pages": 0 })
    }

    #[tokio::test]
    async fn test_list_with_filters() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/words", empty_page());

        let client = LangPortalClient::new(mock.clone());
        let filters = WordFilters::default()
            .search("taberu")
            .jlpt_level("N5")
            .part_of_speech("");
        client.words().list(1, 20, &filters).await.unwrap();

        assert_eq!(
            mock.requests()[0].path_and_query(),
            "/words?page=1&per_page=20&search=taberu&jlpt_level=N5"
        );
    }

    #[tokio::test]
    async fn test_list_without_filters() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/words", empty_page());

        let client = LangPortalClient::new(mock.clone());
        client.words().list(4, 20, &WordFilters::default()).await.unwrap();

        assert_eq!(mock.requests()[0].path_and_query(), "/words?page=4&per_page=20");
    }

    #[tokio::test]
    async fn test_get_missing_word() {
        let mock = Arc::new(MockExecutor::new());
        mock.fail("/words/99", 404, "Word not found");

        let client = LangPortalClient::new(mock);
        let err = client.words().get("99").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Word not found");
    }
}
