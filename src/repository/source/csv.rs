//! Bulk trip import from CSV sheets.
//!
//! Expected header:
//! `type,company,departure,destination,date,departure_time,arrival_time,price,total_seats`

use std::{fs::File, io::Read, path::Path, time::Instant};
use tracing::{debug, warn};

use super::Config;
use crate::{repository::Error, trip::TripForm};

/// Reads every well formed row of the sheet at `path` as a trip form.
/// Rows that cannot be read are logged and skipped. The forms are not validated here.
pub fn read_forms<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<TripForm>, Error> {
    let file = File::open(path)?;
    read_forms_from(file, config)
}

pub fn read_forms_from<R: Read>(reader: R, config: &Config) -> Result<Vec<TripForm>, Error> {
    debug!("Reading trip sheet...");
    let now = Instant::now();
    let trim = if config.trim {
        ::csv::Trim::All
    } else {
        ::csv::Trim::None
    };
    let mut reader = ::csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .trim(trim)
        .from_reader(reader);

    let forms: Vec<TripForm> = reader
        .deserialize::<TripForm>()
        .enumerate()
        .filter_map(|(i, row)| match row {
            Ok(form) => Some(form),
            Err(err) => {
                warn!("Skipping row {}: {err}", i + 1);
                None
            }
        })
        .collect();
    debug!("Reading {} trip rows took {:?}", forms.len(), now.elapsed());
    Ok(forms)
}
