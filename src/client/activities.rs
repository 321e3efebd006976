//! Study activity endpoints

use super::error::ClientResult;
use super::request::{segment, ApiRequest};
use super::LangPortalClient;
use crate::models::{
    NewStudyActivity, PaginatedResponse, StudyActivity, StudyActivityUpdate, StudySession,
};

pub struct ActivitiesApi<'a> {
    client: &'a LangPortalClient,
}

impl<'a> ActivitiesApi<'a> {
    pub(super) fn new(client: &'a LangPortalClient) -> Self {
        Self { client }
    }

    /// `GET /study_activities`
    pub async fn list(&self) -> ClientResult<Vec<StudyActivity>> {
        self.client.send(ApiRequest::get("/study_activities")).await
    }

    /// `GET /study_activities/{id}`
    pub async fn get(&self, id: &str) -> ClientResult<StudyActivity> {
        self.client
            .send(ApiRequest::get(format!("/study_activities/{}", segment(id))))
            .await
    }

    /// `GET /study_activities/{id}/study_sessions?page&per_page`
    pub async fn sessions(
        &self,
        id: &str,
        page: u32,
        per_page: u32,
    ) -> ClientResult<PaginatedResponse<StudySession>> {
        let request = ApiRequest::get(format!("/study_activities/{}/study_sessions", segment(id)))
            .page(page, per_page);
        self.client.send(request).await
    }

    /// `POST /study_activities`
    pub async fn create(&self, activity: &NewStudyActivity) -> ClientResult<StudyActivity> {
        self.client
            .send(ApiRequest::post("/study_activities").json(activity)?)
            .await
    }

    /// `PUT /study_activities/{id}`
    pub async fn update(
        &self,
        id: &str,
        update: &StudyActivityUpdate,
    ) -> ClientResult<StudyActivity> {
        let request = ApiRequest::put(format!("/study_activities/{}", segment(id))).json(update)?;
        self.client.send(request).await
    }

    /// `DELETE /study_activities/{id}`
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send_unit(ApiRequest::delete(format!("/study_activities/{}", segment(id))))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::mock::MockExecutor;
    use crate::client::{LangPortalClient, Method};
    use crate::models::{ActivityType, Difficulty, NewStudyActivity};
    use serde_json::json;
    use std::sync::Arc;

    fn activity_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": "Kanji Match",
            "description": "Match kanji to readings",
            "type": "kanji",
            "difficulty": "intermediate",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/study_activities", json!([activity_json("1"), activity_json("2")]));
        mock.respond("/study_activities/1", activity_json("1"));

        let client = LangPortalClient::new(mock.clone());
        let all = client.activities().list().await.unwrap();
        let one = client.activities().get("1").await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(one.activity_type, ActivityType::Kanji);
    }

    #[tokio::test]
    async fn test_sessions_are_paginated() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond(
            "/study_activities/7/study_sessions",
            json!({ "data": [], "total": 0, "page": 3, "per_page": 5, "total_pages": 0 }),
        );

        let client = LangPortalClient::new(mock.clone());
        client.activities().sessions("7", 3, 5).await.unwrap();

        assert_eq!(
            mock.requests()[0].path_and_query(),
            "/study_activities/7/study_sessions?page=3&per_page=5"
        );
    }

    #[tokio::test]
    async fn test_create_sends_body() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/study_activities", activity_json("9"));

        let client = LangPortalClient::new(mock.clone());
        let new = NewStudyActivity {
            name: "Kanji Match".to_string(),
            description: "Match kanji to readings".to_string(),
            activity_type: ActivityType::Kanji,
            thumbnail: None,
            difficulty: Difficulty::Intermediate,
        };
        let created = client.activities().create(&new).await.unwrap();

        let request = &mock.requests()[0];
        assert_eq!(created.id, "9");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.body.as_ref().unwrap()["type"], "kanji");
        assert!(request.body.as_ref().unwrap().get("thumbnail").is_none());
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let mock = Arc::new(MockExecutor::new());
        mock.respond("/study_activities/3", serde_json::Value::Null);

        let client = LangPortalClient::new(mock.clone());
        client.activities().delete("3").await.unwrap();

        assert_eq!(mock.requests()[0].method, Method::Delete);
    }
}
