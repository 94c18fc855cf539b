#[cfg(test)]
#[path = "../tests/unit/resolver_test.rs"]
mod resolver_test;

use crate::dataset::{deserialize_dataset, PlaceRecord};
use crate::normalize::fold_key;
use lazy_static::lazy_static;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tour_core::prelude::{create_stderr_logger, GenericError, GeoPoint, InfoLogger, LocationResolver};

/// An offline location resolver backed by a city dataset which is loaded lazily from disk
/// on the first lookup and cached read-only for the process lifetime. A missing or
/// malformed dataset degrades every lookup to a miss, it never fails.
pub struct Gazetteer {
    path: PathBuf,
    logger: InfoLogger,
    cache: OnceLock<Vec<PlaceRecord>>,
}

impl Gazetteer {
    /// Creates a new instance of `Gazetteer` for given dataset path.
    pub fn new<P: AsRef<Path>>(path: P, logger: InfoLogger) -> Self {
        Self { path: path.as_ref().to_path_buf(), logger, cache: OnceLock::new() }
    }

    /// Returns cached place records, loading the dataset on the first call. `OnceLock`
    /// guarantees concurrent first callers converge on a single cached copy.
    fn records(&self) -> &[PlaceRecord] {
        self.cache.get_or_init(|| self.load_records()).as_slice()
    }

    fn load_records(&self) -> Vec<PlaceRecord> {
        let records = File::open(&self.path)
            .map_err(GenericError::from)
            .and_then(|file| deserialize_dataset(BufReader::new(file)));

        match records {
            Ok(records) => {
                let (valid, skipped): (Vec<_>, Vec<_>) =
                    records.into_iter().partition(PlaceRecord::has_valid_coordinate);
                if !skipped.is_empty() {
                    (self.logger)(&format!("skipped {} dataset records with invalid coordinates", skipped.len()));
                }

                valid
            }
            Err(err) => {
                (self.logger)(&format!(
                    "cannot load dataset from '{}': '{err}', name resolution is disabled",
                    self.path.display()
                ));

                Vec::default()
            }
        }
    }
}

impl LocationResolver for Gazetteer {
    /// Matches a query against the dataset, first match wins, ties break by dataset
    /// order:
    /// 1. with a comma in the query, a record whose name and country equal its city and
    ///    country parts,
    /// 2. a record whose canonical name equals the full query or the city part,
    /// 3. a record with an alternate name equal to the full query or the city part.
    fn resolve(&self, name: &str) -> Option<GeoPoint> {
        let records = self.records();

        let query = fold_key(name);
        let (city, country) = match query.split_once(',') {
            Some((city, country)) => (city.trim().to_string(), Some(country.trim().to_string())),
            None => (query.clone(), None),
        };

        if let Some(country) = &country {
            let combined = records
                .iter()
                .find(|record| fold_key(&record.name) == city && fold_key(&record.country) == *country);
            if let Some(record) = combined {
                return Some(GeoPoint::new(record.lat, record.lng));
            }
        }

        let canonical = records.iter().find(|record| {
            let folded = fold_key(&record.name);
            folded == query || folded == city
        });
        if let Some(record) = canonical {
            return Some(GeoPoint::new(record.lat, record.lng));
        }

        records
            .iter()
            .find(|record| {
                record.alt_names.iter().any(|alt| {
                    let folded = fold_key(alt);
                    folded == query || folded == city
                })
            })
            .map(|record| GeoPoint::new(record.lat, record.lng))
    }
}

lazy_static! {
    static ref SHARED: Gazetteer = Gazetteer::new(default_dataset_path(), create_stderr_logger());
}

/// Returns the process wide gazetteer instance. The dataset path is read from the
/// `CITIES_DATASET` environment variable, with `data/cities.json` as default.
pub fn shared() -> &'static Gazetteer {
    &SHARED
}

fn default_dataset_path() -> PathBuf {
    std::env::var_os("CITIES_DATASET").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("data/cities.json"))
}
