//! List endpoints.
//!
//! The backend mounts per-project list collections and project membership
//! under the `/lists/{projectId}/...` prefix; operations on a single list
//! live at `/lists/{id}`.

use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiError;
use super::response::ApiResponse;

impl ApiClient {
    /// `GET /lists/{projectId}/lists` - every list in a project.
    pub async fn fetch_project_lists(&self, project_id: i64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/lists/{project_id}/lists")).await
    }

    /// `GET /lists/{id}`.
    pub async fn fetch_list(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/lists/{id}")).await
    }

    /// `POST /lists/{projectId}/lists` as multipart form data, for lists
    /// created with a file attachment.
    pub async fn create_list(&self, project_id: i64, list: Form) -> Result<ApiResponse, ApiError> {
        self.post_form_data(&format!("/lists/{project_id}/lists"), list)
            .await
    }

    /// `PUT /lists/{id}`.
    pub async fn update_list<B>(&self, id: i64, list: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.put(&format!("/lists/{id}"), list).await
    }

    /// `DELETE /lists/{id}`.
    pub async fn delete_list(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("/lists/{id}")).await
    }

    /// `PATCH /lists/{id}/claim` - assign the list to the caller. Sent
    /// without a body.
    pub async fn claim_list(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.request(Method::PATCH, &format!("/lists/{id}/claim"))
            .send()
            .await
    }

    /// `PATCH /lists/{id}/status`.
    pub async fn update_list_status<B>(&self, id: i64, status: &B) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.patch(&format!("/lists/{id}/status"), status).await
    }

    // ===== Project membership =====

    /// `POST /lists/{projectId}/invite`.
    pub async fn invite_member<B>(
        &self,
        project_id: i64,
        invite: &B,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post(&format!("/lists/{project_id}/invite"), invite)
            .await
    }

    /// `GET /lists/{projectId}/members`.
    pub async fn fetch_members(&self, project_id: i64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/lists/{project_id}/members")).await
    }

    /// `DELETE /lists/{projectId}/members/{userId}`.
    pub async fn remove_member(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("/lists/{project_id}/members/{user_id}"))
            .await
    }
}
