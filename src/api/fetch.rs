//! `fetch`-backed implementation of [`TaskApi`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{ErrorBody, NewTask, Task, TaskId, TaskPatch};

/// Talks to the collection through the browser's `fetch`
#[derive(Debug, Clone)]
pub struct FetchTaskApi {
    config: ClientConfig,
}

impl FetchTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn send(&self, method: &str, url: &str, body: Option<String>) -> Result<Response, ApiError> {
        let init = RequestInit::new();
        init.set_method(method);
        let has_body = body.is_some();
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::from_js)?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ApiError::from_js)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ApiError::from_js)?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;

        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(&response).await)
        }
    }

    async fn send_json<B: Serialize>(&self, method: &str, url: &str, body: &B) -> Result<Response, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(method, url, Some(body)).await
    }
}

impl TaskApi for FetchTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.send("GET", self.config.collection_url(), None).await?;
        read_json(&response).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<(), ApiError> {
        self.send_json("POST", self.config.collection_url(), task).await?;
        Ok(())
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<(), ApiError> {
        self.send_json("PUT", &self.config.task_url(id), patch).await?;
        Ok(())
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        self.send("DELETE", &self.config.task_url(id), None).await?;
        Ok(())
    }
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    Ok(value.as_string().unwrap_or_default())
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let text = read_text(response).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Build a status error, keeping the server's `{error}` text when it sent one
async fn status_error(response: &Response) -> ApiError {
    let message = read_text(response)
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
        .map(|body| body.error);

    ApiError::Status {
        status: response.status(),
        message,
    }
}
