mod types;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as AsyncClient, StatusCode};

use self::types::ErrorResponse;
use crate::config::VERSION;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub headers: HeaderMap,
    pub ua: String,
}

impl HttpClient {
    pub fn new(token: Option<String>, api_url: String) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert("accept", HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            headers.insert(
                "authorization",
                format!("Bearer {token}")
                    .parse()
                    .context("Invalid API token")?,
            );
        }

        let ua = format!(
            "riff_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers.clone())
                .build()?,
            base_url: api_url.trim_end_matches('/').to_string(),
            headers,
            ua,
        })
    }

    pub async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = match response.status() {
            StatusCode::CREATED | StatusCode::NO_CONTENT => return Ok(None),
            status => {
                if !status.is_success() {
                    return self.handle_error(response, status).await;
                }

                response
            }
        };

        response.json::<T>().await.map(Some).map_err(|e| anyhow!(e))
    }

    async fn handle_error<T>(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> Result<Option<T>> {
        let body = response.json::<ErrorResponse>().await;

        match body {
            Ok(body) if !body.message.is_empty() => {
                log::debug!("API error: {:?} ({:?})", body.reason, body.code);

                Err(anyhow!("{}", body.message))
            }

            Ok(_) => Err(anyhow!("Error: HTTP {status}")),

            Err(err) => {
                log::debug!("Error deserialize message: {:#?}", err);

                Err(anyhow!("Error: HTTP {status}"))
            }
        }
    }

    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        data: Option<Vec<u8>>,
    ) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.request(
            method.parse().context("Invalid HTTP method")?,
            format!("{}{}", self.base_url, path),
        );

        log::debug!("request: {} {}", method, path);

        if let Some(body) = data {
            request = request.header("content-type", "application/json");

            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!("request body: {}", String::from_utf8_lossy(&body));

            request = request.body(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(response).await
    }
}
