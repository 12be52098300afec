//! Client for the Airly v2 REST API (<https://developer.airly.org/docs>).

use std::fmt;
use std::io::Read;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};
use crate::model::{Installation, IndexType, Location, MeasurementType, Measurements};
use crate::options::NearestOptions;
use crate::transport::{default_transport, Request, Response, Transport};

pub const BASE_URL: &str = "https://airapi.airly.eu/v2/";
const API_KEY_HEADER: &str = "apikey";

#[derive(Clone)]
pub struct Client {
    key: String,
    language: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("key", &"<redacted>")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client on the process-wide default transport, without a language preference.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            language: String::new(),
            transport: default_transport(),
        }
    }

    /// Sets `Accept-Language` (`en`, `pl`, ...). An empty value sends no header.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Installation metadata by id.
    pub fn installation(&self, id: u64) -> Result<Installation> {
        self.get(&format!("installations/{id}"))
    }

    /// Installations within `options.max_distance_km` of `location`, at most `options.max_results`.
    pub fn nearest_installations(
        &self,
        location: Location,
        options: NearestOptions,
    ) -> Result<Vec<Installation>> {
        self.get(&format!(
            "installations/nearest?lat={:.6}&lng={:.6}&maxDistanceKM={:.6}&maxResults={}",
            location.latitude, location.longitude, options.max_distance_km, options.max_results
        ))
    }

    /// Measurements of the installation closest to `location`.
    ///
    /// `options.max_results` is accepted for symmetry with
    /// [`nearest_installations`](Self::nearest_installations) but is not sent.
    pub fn nearest_measurements(
        &self,
        location: Location,
        options: NearestOptions,
    ) -> Result<Measurements> {
        self.get(&format!(
            "measurements/nearest?lat={:.6}&lng={:.6}&maxDistanceKM={:.6}",
            location.latitude, location.longitude, options.max_distance_km
        ))
    }

    /// Measurements interpolated for an arbitrary point from the sensors around it.
    pub fn point_measurements(&self, location: Location) -> Result<Measurements> {
        self.get(&format!(
            "measurements/point?lat={:.6}&lng={:.6}",
            location.latitude, location.longitude
        ))
    }

    pub fn installation_measurements(&self, installation_id: u64) -> Result<Measurements> {
        self.get(&format!(
            "measurements/installation?installationId={installation_id}"
        ))
    }

    /// Index types with their levels.
    pub fn index_types(&self) -> Result<Vec<IndexType>> {
        self.get("meta/measurements")
    }

    /// Measurement types with their labels and units.
    pub fn measurement_types(&self) -> Result<Vec<MeasurementType>> {
        self.get("meta/measurements")
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.build_request(path)?;
        let response = self.transport.send(request).map_err(Error::Transport)?;
        let status = response.status;
        let body = read_body(response)?;
        tracing::debug!(path, status, bytes = body.len(), "airly response");

        if status != 200 {
            return Err(Error::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn build_request(&self, path: &str) -> Result<Request> {
        let url = Url::parse(BASE_URL)
            .and_then(|base| base.join(path))
            .map_err(|err| Error::Request(format!("invalid path {path:?}: {err}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut key = header_value(API_KEY_HEADER, &self.key)?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        if !self.language.is_empty() {
            headers.insert(
                ACCEPT_LANGUAGE,
                header_value(ACCEPT_LANGUAGE.as_str(), &self.language)?,
            );
        }

        Ok(Request { url, headers })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|err| Error::Request(format!("invalid {name} header: {err}")))
}

fn read_body(response: Response) -> Result<Vec<u8>> {
    let mut reader = response.body;
    let mut body = Vec::new();
    let read = reader.read_to_end(&mut body);
    drop(reader);
    read.map_err(|err| Error::Transport(Box::new(err)))?;
    Ok(body)
}
