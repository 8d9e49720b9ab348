//! country_geojson
//!
//! A small Rust library for turning the public geo-countries boundary dataset
//! into a lean GeoJSON file of real countries. Pairs with the
//! `country-geojson` CLI.
//!
//! ### Features
//! - Download the dataset (or read a local copy) into typed GeoJSON models
//! - Keep only features with ISO 3166-1 codes, minus a configurable table of
//!   non-country entities (base areas, cosmodromes, remote islands)
//! - Strip every property except `name` and save as indented JSON
//! - Inspect the property schema (`ADMIN` vs `name`, key census, keyword search)
//!
//! ### Example
//! ```no_run
//! use country_geojson::{Client, ExclusionList, config, filter, storage};
//!
//! let download = Client::new()?.fetch(config::DEFAULT_URL)?;
//! let out = filter::simplify(&download.collection, &ExclusionList::default());
//! storage::save_geojson(&out.collection, config::DEFAULT_OUTPUT)?;
//! println!("kept {}, excluded {}", out.collection.len(), out.excluded_count);
//! # Ok::<(), country_geojson::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod inspect;
pub mod models;
pub mod stats;
pub mod storage;

pub use api::{Client, Download};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{Classification, ExclusionList, Simplified};
pub use models::{Feature, FeatureCollection};
