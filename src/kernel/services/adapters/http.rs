//! reqwest-backed content API adapter.

use crate::kernel::services::ports::content::Result;
use crate::kernel::services::ports::{BoxFuture, ContentApi, ContentError, ProjectMap};
use crate::models::TreeNode;

pub struct HttpContentApi {
    client: reqwest::Client,
    base: String,
}

impl HttpContentApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.base, suffix)
    }
}

fn checked(
    response: std::result::Result<reqwest::Response, reqwest::Error>,
    url: &str,
) -> Result<reqwest::Response> {
    let response = response.map_err(|e| ContentError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::Status {
            code: status.as_u16(),
            path: url.to_string(),
        });
    }
    Ok(response)
}

impl ContentApi for HttpContentApi {
    fn list_projects(&self) -> BoxFuture<'_, Result<ProjectMap>> {
        let url = self.url("/sites/");
        let client = self.client.clone();
        Box::pin(async move {
            let response = checked(client.get(&url).send().await, &url)?;
            response
                .json::<ProjectMap>()
                .await
                .map_err(|e| ContentError::Decode(e.to_string()))
        })
    }

    fn list_files(&self, project: String) -> BoxFuture<'_, Result<TreeNode>> {
        let url = self.url(&format!("/sites/{project}/files/"));
        let client = self.client.clone();
        Box::pin(async move {
            let response = checked(client.get(&url).send().await, &url)?;
            response
                .json::<TreeNode>()
                .await
                .map_err(|e| ContentError::Decode(e.to_string()))
        })
    }

    fn read_file(&self, project: String, path: String) -> BoxFuture<'_, Result<String>> {
        let url = self.url(&format!("/sites/{project}/files{path}"));
        let client = self.client.clone();
        Box::pin(async move {
            let response = checked(client.get(&url).send().await, &url)?;
            response
                .text()
                .await
                .map_err(|e| ContentError::Decode(e.to_string()))
        })
    }

    fn write_file(
        &self,
        project: String,
        path: String,
        content: String,
    ) -> BoxFuture<'_, Result<()>> {
        let url = self.url(&format!("/sites/{project}/files{path}"));
        let client = self.client.clone();
        Box::pin(async move {
            // Response body is ignored, only the status matters.
            checked(
                client
                    .post(&url)
                    .query(&[("o", "all")])
                    .body(content)
                    .send()
                    .await,
                &url,
            )?;
            Ok(())
        })
    }

    fn publish(&self, project: String) -> BoxFuture<'_, Result<()>> {
        let url = self.url(&format!("/sites/{project}/publish/"));
        let client = self.client.clone();
        Box::pin(async move {
            checked(client.put(&url).send().await, &url)?;
            Ok(())
        })
    }
}
