//! Image loading for gallery layout.
//!
//! The layout engine only needs two things from an image: its pixels, to embed,
//! and its natural size, to compute an aspect-preserving box. Where the bytes come
//! from is behind the [ImageLoader] trait so reports can be built from the network,
//! from disk, or from fixtures in tests.

use crate::error::ImageFetchError;
use crate::image::Image;
use base64::Engine;
use std::borrow::Cow;
use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches and decodes the image behind a URL.
///
/// Loads are awaited one at a time by the gallery, in gallery order, so an
/// implementation never sees two concurrent calls for the same document. The
/// returned future must be `Send`; with a `Sync` loader the composer's futures can
/// then be handed to `tokio::spawn`.
pub trait ImageLoader {
    fn load(&self, url: &str) -> impl Future<Output = Result<Image, ImageFetchError>> + Send;
}

/// Loads `http(s)://` URLs with reqwest, `file://` URLs and plain paths from disk,
/// and `data:image/...` URIs (base64 or percent-encoded) in place.
pub struct UrlImageLoader {
    client: reqwest::Client,
    timeout_secs: Option<u64>,
}

impl UrlImageLoader {
    /// Create a loader. `timeout_secs` bounds each individual fetch; `None` leaves
    /// fetches unbounded, so one hung server stalls the whole report.
    pub fn new(timeout_secs: Option<u64>) -> UrlImageLoader {
        UrlImageLoader::with_client(client_builder(timeout_secs), timeout_secs)
    }

    fn with_client(builder: reqwest::ClientBuilder, timeout_secs: Option<u64>) -> UrlImageLoader {
        let client = builder.build().unwrap_or_else(|e| {
            warn!("could not configure HTTP client ({e}), falling back to defaults");
            reqwest::Client::new()
        });

        UrlImageLoader {
            client,
            timeout_secs,
        }
    }

    async fn fetch_http(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                ImageFetchError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout_secs.unwrap_or_default(),
                }
            } else {
                ImageFetchError::Request {
                    url: url.to_string(),
                    source: e,
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(map_err)?;
        if !response.status().is_success() {
            return Err(ImageFetchError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(map_err)?;
        Ok(bytes.to_vec())
    }
}

fn client_builder(timeout_secs: Option<u64>) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    match timeout_secs {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    }
}

impl Default for UrlImageLoader {
    fn default() -> Self {
        UrlImageLoader::new(Some(30))
    }
}

impl ImageLoader for UrlImageLoader {
    async fn load(&self, url: &str) -> Result<Image, ImageFetchError> {
        let bytes = match ImageSource::parse(url) {
            ImageSource::Http => self.fetch_http(url).await?,
            ImageSource::File(path) => {
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| ImageFetchError::Io { path, source })?
            }
            ImageSource::Base64(payload) => base64::engine::general_purpose::STANDARD
                .decode(payload.trim())
                .map_err(|_| ImageFetchError::Unsupported {
                    url: truncate_for_log(url),
                })?,
            ImageSource::Plain(payload) => {
                urlencoding::decode_binary(payload.as_bytes()).into_owned()
            }
        };
        debug!(url = %truncate_for_log(url), bytes = bytes.len(), "fetched image");

        Image::from_bytes(bytes).map_err(|source| ImageFetchError::Decode {
            url: truncate_for_log(url),
            source,
        })
    }
}

/// A loader that never fetches anything; every gallery image is skipped. Used for
/// text-only reports.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineImageLoader;

impl ImageLoader for OfflineImageLoader {
    async fn load(&self, url: &str) -> Result<Image, ImageFetchError> {
        Err(ImageFetchError::Unsupported {
            url: truncate_for_log(url),
        })
    }
}

/// Serves images that are already in memory, keyed by URL. Useful when the caller
/// has the listing photos at hand already (thumbnails shown in a UI, fixtures).
#[derive(Debug, Default, Clone)]
pub struct MemoryImageLoader {
    images: HashMap<String, Vec<u8>>,
}

impl MemoryImageLoader {
    pub fn new() -> MemoryImageLoader {
        MemoryImageLoader::default()
    }

    /// Register the encoded bytes served for `url`
    pub fn insert<S: ToString>(&mut self, url: S, bytes: Vec<u8>) -> &mut Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageLoader for MemoryImageLoader {
    async fn load(&self, url: &str) -> Result<Image, ImageFetchError> {
        let bytes = self
            .images
            .get(url)
            .ok_or_else(|| ImageFetchError::Status {
                url: truncate_for_log(url),
                status: 404,
            })?
            .clone();
        Image::from_bytes(bytes).map_err(|source| ImageFetchError::Decode {
            url: truncate_for_log(url),
            source,
        })
    }
}

#[derive(Debug, PartialEq)]
enum ImageSource<'a> {
    Http,
    File(PathBuf),
    /// `data:image/png;base64,...`
    Base64(&'a str),
    /// `data:image/svg+xml,...`, percent-encoded or not at all
    Plain(&'a str),
}

impl<'a> ImageSource<'a> {
    fn parse(url: &'a str) -> ImageSource<'a> {
        if url.starts_with("http://") || url.starts_with("https://") {
            ImageSource::Http
        } else if let Some(path) = url.strip_prefix("file://") {
            let path = urlencoding::decode(path).unwrap_or(Cow::Borrowed(path));
            ImageSource::File(PathBuf::from(path.as_ref()))
        } else if url.starts_with("data:image/") {
            match url.split_once(',') {
                Some((header, payload)) if header.ends_with(";base64") => {
                    ImageSource::Base64(payload)
                }
                Some((_, payload)) => ImageSource::Plain(payload),
                None => ImageSource::Plain(""),
            }
        } else {
            ImageSource::File(PathBuf::from(url))
        }
    }
}

/// data URIs can be megabytes long; keep log lines readable
fn truncate_for_log(url: &str) -> String {
    const MAX: usize = 96;
    if url.chars().count() > MAX {
        let head: String = url.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}


/// Throwaway local HTTP servers for loader tests
#[cfg(test)]
pub(crate) mod testing {
    use super::{client_builder, UrlImageLoader};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// A loader that talks to localhost directly, whatever proxy the environment sets
    pub(crate) fn local_loader(timeout_secs: Option<u64>) -> UrlImageLoader {
        UrlImageLoader::with_client(client_builder(timeout_secs).no_proxy(), timeout_secs)
    }

    pub(crate) fn http_response(status: &str, body: &[u8]) -> Vec<u8> {
        let mut response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        response
    }

    /// Answer the first request with `response`, then hang up
    pub(crate) async fn serve_once(response: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/foto.png")
    }

    /// Accept connections and read requests, but never answer
    pub(crate) async fn never_replies() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                open.push(socket);
            }
        });
        format!("http://{addr}/lenta.png")
    }
}
