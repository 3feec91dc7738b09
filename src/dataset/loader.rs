//! CSV dataset loading
//!
//! Reads the fixed launch records resource in full at process start.
//! Any I/O or parse failure is fatal: there is no partial load and no
//! retry, the process simply does not come up without its dataset.

use std::io;
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::model::{Dataset, LaunchRecord, SUCCESS};

/// Load the launch dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> DatasetResult<Dataset> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = load_csv_reader(file)?;

    tracing::info!(
        path = %path.display(),
        records = dataset.len(),
        sites = dataset.sites().len(),
        "Loaded launch dataset"
    );

    Ok(dataset)
}

/// Load the launch dataset from any reader (useful for testing).
///
/// The CSV must carry a header row naming at least `Launch Site`,
/// `Payload Mass (kg)`, `class`, and `Booster Version Category`;
/// other columns are ignored.
pub fn load_csv_reader<R: io::Read>(reader: R) -> DatasetResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();

    for (line_num, result) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
        // Header is line 1, first data row is line 2
        let row = line_num + 2;
        let record = result?;

        if record.class > SUCCESS {
            return Err(DatasetError::InvalidClass {
                row,
                value: record.class,
            });
        }
        if record.payload_mass_kg < 0.0 {
            return Err(DatasetError::NegativePayload {
                row,
                value: record.payload_mass_kg,
            });
        }

        records.push(record);
    }

    Dataset::new(records)
}
