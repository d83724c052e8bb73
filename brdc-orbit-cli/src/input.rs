//! Ephemeris (JSON) input
use serde::Deserialize;
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path, str::FromStr};

use brdc_orbit::prelude::{Ephemeris, EphemerisBook, Epoch, SV};

use crate::Error;

/// One ephemeris record, as described in the JSON input.
/// Parameters may use navigation file name variants.
#[derive(Debug, Deserialize)]
struct Record {
    sv: String,
    toe: String,
    params: BTreeMap<String, f64>,
}

impl Record {
    fn to_ephemeris(&self) -> Result<Ephemeris, Error> {
        let sv = SV::from_str(self.sv.trim()).map_err(|_| Error::InvalidSV(self.sv.clone()))?;
        let toe =
            Epoch::from_str(self.toe.trim()).map_err(|_| Error::InvalidEpoch(self.toe.clone()))?;

        let mut eph = Ephemeris::new(sv, toe);
        for (name, value) in self.params.iter() {
            if let Err(e) = eph.set_by_name(name, *value) {
                warn!("{}({}) - {}: ignored", toe, sv, e);
            }
        }
        Ok(eph)
    }
}

/// Loads all ephemeris records of this file into the [EphemerisBook].
pub fn load<P: AsRef<Path>>(book: &mut EphemerisBook, path: P) -> Result<usize, Error> {
    let fd = File::open(path.as_ref())?;
    let records: Vec<Record> = serde_json::from_reader(BufReader::new(fd))?;

    let mut loaded = 0;
    for record in records.iter() {
        book.insert(record.to_ephemeris()?);
        loaded += 1;
    }

    debug!(
        "\"{}\": {} records",
        path.as_ref().to_string_lossy(),
        loaded
    );

    Ok(loaded)
}
