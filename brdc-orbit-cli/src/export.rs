//! CSV export
use csv::Writer;
use std::path::{Path, PathBuf};

use brdc_orbit::prelude::{Trajectory, SV};

use crate::Error;

/// Returns the CSV path of this satellite. When several satellites
/// are exported, the satellite is appended to the file stem.
pub fn csv_path(path: &Path, sv: SV, multiple: bool) -> PathBuf {
    if !multiple {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!("{}-{}.csv", stem, sv))
}

/// Writes this [Trajectory] as `time,x,y,z` (ECEF meters).
pub fn write_trajectory<P: AsRef<Path>>(trajectory: &Trajectory, path: P) -> Result<(), Error> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["time", "x", "y", "z"])?;
    for (t, position) in trajectory.iter() {
        w.write_record(&[
            t.to_string(),
            format!("{:.3}", position.x),
            format!("{:.3}", position.y),
            format!("{:.3}", position.z),
        ])?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::csv_path;
    use brdc_orbit::prelude::{Constellation, SV};
    use std::path::{Path, PathBuf};

    #[test]
    fn per_sv_path() {
        let sv = SV::new(Constellation::GPS, 5);
        let path = Path::new("/tmp/orbits.csv");
        assert_eq!(csv_path(path, sv, false), PathBuf::from("/tmp/orbits.csv"));
        assert_eq!(csv_path(path, sv, true), PathBuf::from("/tmp/orbits-G05.csv"));
    }
}
