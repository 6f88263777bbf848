//! Label Endpoints

use gloo_net::http::Request;

use super::{expect_ok, read_json, send, send_json, Api};
use crate::error::ApiError;
use crate::models::{Label, LabelUpdate, LabelsResponse, NewLabel, TogglePrintResponse};

impl Api {
    pub async fn list_labels(&self) -> Result<Vec<Label>, ApiError> {
        tracing::debug!("GET labels");
        let response = send(Request::get(&self.url("/api/labels"))).await?;
        let body: LabelsResponse = read_json(response).await?;
        Ok(body.labels)
    }

    pub async fn create_label(&self, label: &NewLabel) -> Result<(), ApiError> {
        tracing::debug!(product = %label.product_name, "POST label");
        let response = send_json(Request::post(&self.url("/api/label")), label).await?;
        expect_ok(response).await
    }

    pub async fn update_label(&self, id: u32, update: &LabelUpdate) -> Result<(), ApiError> {
        tracing::debug!(id, "PUT label");
        let url = self.url(&format!("/api/label/{}", id));
        let response = send_json(Request::put(&url), update).await?;
        expect_ok(response).await
    }

    pub async fn delete_label(&self, id: u32) -> Result<(), ApiError> {
        tracing::debug!(id, "DELETE label");
        let url = self.url(&format!("/api/label/{}", id));
        let response = send(Request::delete(&url)).await?;
        expect_ok(response).await
    }

    /// Flip the print flag on the server; returns the new value
    pub async fn toggle_print(&self, id: u32) -> Result<bool, ApiError> {
        tracing::debug!(id, "toggle print");
        let url = self.url(&format!("/api/label/{}/toggle-print", id));
        let response = send(Request::post(&url)).await?;
        let body: TogglePrintResponse = read_json(response).await?;
        Ok(body.marked_to_print)
    }
}
