//! Form Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{expect_ok, read_json, send, send_json, Api};
use crate::config::encode;
use crate::error::ApiError;
use crate::models::{Form, FormsResponse};

#[derive(Serialize)]
struct FormNameArgs<'a> {
    name: &'a str,
}

impl Api {
    pub async fn list_forms(&self, sort: &str) -> Result<Vec<Form>, ApiError> {
        let url = self.url(&format!("/api/form?sort={}", encode(sort)));
        tracing::debug!(%url, "GET forms");
        let response = send(Request::get(&url)).await?;
        let body: FormsResponse = read_json(response).await?;
        Ok(body.forms)
    }

    pub async fn create_form(&self, form: &Form) -> Result<(), ApiError> {
        tracing::debug!(name = %form.name, "POST form");
        let response = send_json(Request::post(&self.url("/api/form")), form).await?;
        expect_ok(response).await
    }

    /// Forms are keyed by name, so the name inside `form` selects the record
    pub async fn update_form(&self, form: &Form) -> Result<(), ApiError> {
        tracing::debug!(name = %form.name, "PUT form");
        let response = send_json(Request::put(&self.url("/api/form")), form).await?;
        expect_ok(response).await
    }

    pub async fn delete_form(&self, name: &str) -> Result<(), ApiError> {
        tracing::debug!(%name, "DELETE form");
        let response = send_json(Request::delete(&self.url("/api/form")), &FormNameArgs { name }).await?;
        expect_ok(response).await
    }
}
