//! Typed client for the [Airly](https://airly.org) air-quality API.
//!
//! ```no_run
//! use airly_client::{Client, Location, NearestOptions};
//!
//! let client = Client::new("my-api-key").with_language("en");
//! let nearby = client.nearest_installations(
//!     Location::new(50.062006, 19.940984),
//!     NearestOptions::default().max_distance(5.0).max_results(3),
//! )?;
//! for installation in nearby {
//!     let measurements = client.installation_measurements(installation.id)?;
//!     println!("{}: {:?}", installation.address.display_address1, measurements.current.value("PM25"));
//! }
//! # Ok::<(), airly_client::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod options;
mod time;
pub mod transport;

#[cfg(test)]
pub mod test_support;

pub use client::Client;
pub use error::{Error, Result};
pub use model::{
    Address, Index, IndexType, Installation, Level, Location, Measurement, MeasurementType,
    Measurements, Sponsor, Standard, Value,
};
pub use options::NearestOptions;
pub use transport::{ReqwestTransport, Transport};
