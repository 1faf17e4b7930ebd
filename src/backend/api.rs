use async_channel::bounded;
use reqwest::{blocking::Client, StatusCode};
use serde::de::DeserializeOwned;
use std::thread::spawn;
use thiserror::Error;

use crate::constants;

/// Everything that can go wrong between asking the endpoint and holding decoded data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("malformed payload from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("background worker exited before reporting a result")]
    WorkerExited,
}

pub fn client() -> Result<Client, FetchError> {
    Client::builder()
        .user_agent(format!("AppCatalog/{}", constants::VERSION))
        .build()
        .map_err(FetchError::Client)
}

fn send(client: &Client, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
    let resp = client
        .get(url)
        .header(reqwest::header::ACCEPT, "*/*")
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_owned(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_owned(),
            status,
        });
    }
    Ok(resp)
}

pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    send(client, url)?.json::<T>().map_err(|source| {
        if source.is_decode() {
            FetchError::Malformed {
                url: url.to_owned(),
                source,
            }
        } else {
            FetchError::Request {
                url: url.to_owned(),
                source,
            }
        }
    })
}

pub fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let bytes = send(client, url)?
        .bytes()
        .map_err(|source| FetchError::Request {
            url: url.to_owned(),
            source,
        })?;
    Ok(bytes.to_vec())
}

/// Runs `work` on its own thread and resolves once it reports back, so a
/// blocking request can be awaited from the main loop without stalling it.
pub async fn run_blocking<T, F>(work: F) -> Result<T, FetchError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, receiver) = bounded(1);
    spawn(move || {
        let _ = sender.send_blocking(work());
    });
    receiver.recv().await.map_err(|_| FetchError::WorkerExited)
}
