//! Word group endpoints

use super::error::ClientResult;
use super::request::{segment, ApiRequest};
use super::LangPortalClient;
use crate::models::{NewWordGroup, PaginatedResponse, Word, WordGroup, WordGroupUpdate};

pub struct GroupsApi<'a> {
    client: &'a LangPortalClient,
}

impl<'a> GroupsApi<'a> {
    pub(super) fn new(client: &'a LangPortalClient) -> Self {
        Self { client }
    }

    /// `GET /groups`
    pub async fn list(&self) -> ClientResult<Vec<WordGroup>> {
        self.client.send(ApiRequest::get("/groups")).await
    }

    /// `GET /groups/{id}`
    pub async fn get(&self, id: &str) -> ClientResult<WordGroup> {
        self.client
            .send(ApiRequest::get(format!("/groups/{}", segment(id))))
            .await
    }

    /// `GET /groups/{id}/words?page&per_page`
    pub async fn words(&self, id: &str, page: u32, per_page: u32) -> ClientResult<PaginatedResponse<Word>> {
        let request = ApiRequest::get(format!("/groups/{}/words", segment(id))).page(page, per_page);
        self.client.send(request).await
    }

    /// `POST /groups`
    pub async fn create(&self, group: &NewWordGroup) -> ClientResult<WordGroup> {
        self.client.send(ApiRequest::post("/groups").json(group)?).await
    }

    /// `PUT /groups/{id}`
    pub async fn update(&self, id: &str, update: &WordGroupUpdate) -> ClientResult<WordGroup> {
        let request = ApiRequest::put(format!("/groups/{}", segment(id))).json(update)?;
        self.client.send(request).await
    }

    /// `DELETE /groups/{id}`
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send_unit(ApiRequest::delete(format!("/groups/{}", segment(id))))
            .await
    }
}
