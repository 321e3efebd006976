//! Study session endpoints

use super::error::ClientResult;
use super::request::{segment, ApiRequest};
use super::LangPortalClient;
use crate::models::{NewStudySession, PaginatedResponse, StudySession, StudySessionUpdate};

/// Page size used by the session lists
pub const DEFAULT_SESSIONS_PER_PAGE: u32 = 10;

pub struct SessionsApi<'a> {
    client: &'a LangPortalClient,
}

impl<'a> SessionsApi<'a> {
    pub(super) fn new(client: &'a LangPortalClient) -> Self {
        Self { client }
    }

    /// `GET /study_sessions?page&per_page`
    pub async fn list(&self, page: u32, per_page: u32) -> ClientResult<PaginatedResponse<StudySession>> {
        self.client
            .send(ApiRequest::get("/study_sessions").page(page, per_page))
            .await
    }

    /// `GET /study_sessions/{id}`
    pub async fn get(&self, id: &str) -> ClientResult<StudySession> {
        self.client
            .send(ApiRequest::get(format!("/study_sessions/{}", segment(id))))
            .await
    }

    /// `POST /study_sessions`
    pub async fn create(&self, session: &NewStudySession) -> ClientResult<StudySession> {
        self.client
            .send(ApiRequest::post("/study_sessions").json(session)?)
            .await
    }

    /// `PUT /study_sessions/{id}`
    pub async fn update(&self, id: &str, update: &StudySessionUpdate) -> ClientResult<StudySession> {
        let request = ApiRequest::put(format!("/study_sessions/{}", segment(id))).json(update)?;
        self.client.send(request).await
    }

    /// `DELETE /study_sessions/{id}`
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client
            .send_unit(ApiRequest::delete(format!("/study_sessions/{}", segment(id))))
            .await
    }
}
