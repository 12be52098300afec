use std::io::{self, Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::TransportError;
use crate::transport::{Request, Response, Transport};

pub const INSTALLATION_JSON: &str = r#"{
  "id": 204,
  "location": {
    "latitude": 50.062006,
    "longitude": 19.940984
  },
  "address": {
    "country": "Poland",
    "city": "Kraków",
    "street": "Mikołajska",
    "number": "4B",
    "displayAddress1": "Kraków",
    "displayAddress2": "Mikołajska"
  },
  "elevation": 220.38,
  "airly": true,
  "sponsor": {
    "name": "KrakówOddycha",
    "description": "Sensor Airly w ramach akcji",
    "logo": "https://cdn.airly.org/logo/KrakówOddycha.jpg",
    "link": "https://przykladowy_link_do_strony_sponsora.pl"
  }
}"#;

pub const MEASUREMENTS_JSON: &str = r##"{
  "current": {
    "fromDateTime": "2018-08-24T08:24:48.652Z",
    "tillDateTime": "2018-08-24T09:24:48.652Z",
    "values": [
      { "name": "PM1",  "value": 12.73 },
      { "name": "PM25", "value": 18.7 }
    ],
    "indexes": [
      {
        "name": "AIRLY_CAQI",
        "value": 35.53,
        "level": "LOW",
        "description": "Dobre powietrze.",
        "advice": "Możesz bez obaw wyjść na zewnątrz.",
        "color": "#D1CF1E"
      }
    ],
    "standards": [
      {
        "name": "WHO",
        "pollutant": "PM25",
        "limit": 25,
        "percent": 74.81
      }
    ]
  },
  "history": [],
  "forecast": []
}"##;

pub const INDEX_TYPES_JSON: &str = r##"[
  {
    "name": "AIRLY_CAQI",
    "levels": [
      { "values": "0-25",  "level": "VERY_LOW", "description": "Very Low", "color": "#6BC926" },
      { "values": "25-50", "level": "LOW",      "description": "Low",      "color": "#D1CF1E" }
    ]
  }
]"##;

pub const MEASUREMENT_TYPES_JSON: &str = r#"[
  { "name": "PM1",  "label": "PM1",   "unit": "µg/m³" },
  { "name": "PM25", "label": "PM2.5", "unit": "µg/m³" }
]"#;

type Reply = dyn Fn(&Request) -> Result<Response, TransportError> + Send + Sync;

/// Records every request and answers from a closure.
pub struct StubTransport {
    requests: Mutex<Vec<Request>>,
    reply: Box<Reply>,
}

impl StubTransport {
    pub fn new(
        reply: impl Fn(&Request) -> Result<Response, TransportError> + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    pub fn ok(body: &str) -> Arc<Self> {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(Response::new(status, Cursor::new(body.clone().into_bytes()))))
    }

    /// Answers once with the given body; later calls get a 500.
    pub fn with_body(status: u16, body: impl Read + Send + 'static) -> Arc<Self> {
        let body: Mutex<Option<Box<dyn Read + Send>>> = Mutex::new(Some(Box::new(body)));
        Self::new(move |_| match body.lock().expect("body lock").take() {
            Some(body) => Ok(Response { status, body }),
            None => Ok(Response::new(500, io::empty())),
        })
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests()
            .pop()
            .expect("stub transport received no request")
    }
}

impl Transport for StubTransport {
    fn send(&self, request: Request) -> Result<Response, TransportError> {
        let reply = (self.reply)(&request);
        self.requests.lock().expect("requests lock").push(request);
        reply
    }
}

/// Response body that flags when it is dropped.
pub struct TrackedBody {
    inner: Cursor<Vec<u8>>,
    dropped: Arc<AtomicBool>,
}

impl TrackedBody {
    pub fn new(body: &str) -> (Self, Arc<AtomicBool>) {
        let dropped = Arc::new(AtomicBool::new(false));
        let body = Self {
            inner: Cursor::new(body.as_bytes().to_vec()),
            dropped: dropped.clone(),
        };
        (body, dropped)
    }
}

impl Read for TrackedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for TrackedBody {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

/// Response body whose connection resets on the first read.
pub struct FailingBody {
    dropped: Arc<AtomicBool>,
}

impl FailingBody {
    pub fn new() -> (Self, Arc<AtomicBool>) {
        let dropped = Arc::new(AtomicBool::new(false));
        (
            Self {
                dropped: dropped.clone(),
            },
            dropped,
        )
    }
}

impl Read for FailingBody {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
    }
}

impl Drop for FailingBody {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}
