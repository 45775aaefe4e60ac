//! Project endpoints.

use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::response::ApiResponse;

impl ApiClient {
    /// `GET /projects` - every project visible to the caller.
    pub async fn fetch_projects(&self) -> Result<ApiResponse, ApiError> {
        self.get("/projects").await
    }

    /// `GET /projects/{id}`.
    pub async fn fetch_project(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/projects/{id}")).await
    }

    /// `POST /projects`.
    pub async fn create_project<B>(&self, project: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post("/projects", project).await
    }

    /// `PUT /projects/{id}`.
    pub async fn update_project<B>(&self, id: i64, project: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.put(&format!("/projects/{id}"), project).await
    }

    /// `DELETE /projects/{id}`.
    pub async fn delete_project(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("/projects/{id}")).await
    }

    /// `GET /projects/search?q={query}`.
    ///
    /// The query is percent-encoded, so spaces become `%20` rather than `+`.
    pub async fn search_projects(&self, query: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/projects/search?q={}", urlencoding::encode(query)))
            .await
    }
}
