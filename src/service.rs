use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Serialize)]
struct PaletteRequest<'a> {
    image: &'a str,
}

#[derive(Serialize)]
struct RecolorRequest<'a> {
    image: &'a str,
    palette: &'a [String],
}

#[derive(Deserialize)]
struct PaletteResponse {
    palette: Vec<String>,
}

#[derive(Deserialize)]
struct RecolorResponse {
    recolor: String,
}

/// HTTP/JSON adapter for the palette backend. Two request/response calls,
/// no retry, no timeout; transport errors, non-2xx statuses and bodies
/// missing the expected field all surface as one failure to the caller.
pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `POST /palette` with the encoded image; returns the extracted
    /// colors in server order, however many there are.
    pub async fn extract_palette(&self, image_base64: &str) -> Result<Vec<String>> {
        let response = self
            .http
            .post(self.endpoint("palette"))
            .json(&PaletteRequest {
                image: image_base64,
            })
            .send()
            .await
            .context("palette request failed")?
            .error_for_status()
            .context("palette request rejected")?;

        let body: PaletteResponse = response
            .json()
            .await
            .context("unexpected palette response body")?;
        Ok(body.palette)
    }

    /// `POST /recolor` with the base image and the palette snapshot;
    /// returns the opaque recolored payload.
    pub async fn recolor(&self, image_base64: &str, palette: &[String]) -> Result<String> {
        let response = self
            .http
            .post(self.endpoint("recolor"))
            .json(&RecolorRequest {
                image: image_base64,
                palette,
            })
            .send()
            .await
            .context("recolor request failed")?
            .error_for_status()
            .context("recolor request rejected")?;

        let body: RecolorResponse = response
            .json()
            .await
            .context("unexpected recolor response body")?;
        Ok(body.recolor)
    }
}
