//! Dashboard endpoints

use super::error::ClientResult;
use super::request::ApiRequest;
use super::LangPortalClient;
use crate::models::DashboardStats;

pub struct DashboardApi<'a> {
    client: &'a LangPortalClient,
}

impl<'a> DashboardApi<'a> {
    pub(super) fn new(client: &'a LangPortalClient) -> Self {
        Self { client }
    }

    /// `GET /dashboard/stats`
    pub async fn stats(&self) -> ClientResult<DashboardStats> {
        self.client.send(ApiRequest::get("/dashboard/stats")).await
    }
}
