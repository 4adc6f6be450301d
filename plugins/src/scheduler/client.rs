use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::SchedulerHttpError;

/// Standard response wrapper of the scheduler REST API.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Clone)]
pub struct SchedulerClient {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl SchedulerClient {
    pub fn new(base_url: String, token: String, timeout_ms: u64) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            http,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.token.trim().is_empty() {
            req
        } else {
            req.header("token", &self.token)
        }
    }

    /// GET `path` and unwrap the `data` field of the response envelope.
    pub async fn get_data<T>(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.url(path);
        let req = self.http.get(&url).query(query);
        let resp = self
            .auth(req)
            .send()
            .await
            .map_err(|err| SchedulerHttpError::from_reqwest(err, url.clone()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| SchedulerHttpError::from_reqwest(err, url.clone()))?;

        if !status.is_success() {
            return Err(SchedulerHttpError::status_error(status.as_u16(), url, &body).into());
        }

        let envelope = serde_json::from_str::<Envelope<T>>(&body)
            .map_err(|err| SchedulerHttpError::decode_error(status.as_u16(), url.clone(), err, &body))?;
        if envelope.code != 0 {
            return Err(SchedulerHttpError::api_error(envelope.code, envelope.msg, url).into());
        }

        tracing::trace!(target: "dagmenu.http", stage = "scheduler.get.out", url = %url, status = %status);
        Ok(envelope.data.unwrap_or_default())
    }
}
