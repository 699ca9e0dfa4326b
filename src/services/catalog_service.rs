//! Imports game names from a CSV catalog into the store.
//!
//! Loading is idempotent: names already present keep their selection count.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use crate::{
    dao::{game_store::GameStore, models::InsertOutcome},
    error::CatalogError,
};

/// Header of the column holding game names.
pub const NAME_COLUMN: &str = "name";

/// Summary of a catalog import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Names inserted for the first time.
    pub created: usize,
    /// Names that were already in the store.
    pub existing: usize,
    /// Rows skipped because they could not be read or stored.
    pub failed: usize,
}

/// Load the catalog at `path` into `store`.
pub async fn load_catalog(
    store: &dyn GameStore,
    path: &Path,
) -> Result<CatalogReport, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    let report = load_catalog_from_reader(store, file).await?;
    info!(
        path = %path.display(),
        created = report.created,
        existing = report.existing,
        failed = report.failed,
        "games loaded from catalog"
    );
    Ok(report)
}

/// Load a CSV catalog from any reader. The first row must be a header row
/// containing a `name` column; rows with a blank name are ignored.
pub async fn load_catalog_from_reader<R: Read>(
    store: &dyn GameStore,
    reader: R,
) -> Result<CatalogReport, CatalogError> {
    let names = read_names(reader)?;
    let mut report = CatalogReport {
        failed: names.failed,
        ..CatalogReport::default()
    };

    for name in names.names {
        match store.insert_if_absent(name.clone()).await {
            Ok(InsertOutcome::Created) => {
                debug!(game = %name, "added game to catalog");
                report.created += 1;
            }
            Ok(InsertOutcome::AlreadyPresent) => report.existing += 1,
            Err(err) => {
                warn!(game = %name, error = %err, "failed to insert game; skipping");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

struct CatalogNames {
    names: Vec<String>,
    failed: usize,
}

fn read_names<R: Read>(reader: R) -> Result<CatalogNames, CatalogError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let column = reader
        .headers()
        .map_err(|source| CatalogError::Headers { source })?
        .iter()
        .position(|header| header == NAME_COLUMN)
        .ok_or(CatalogError::MissingNameColumn {
            column: NAME_COLUMN,
        })?;

    let mut names = Vec::new();
    let mut failed = 0;
    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => match record.get(column).map(str::trim) {
                Some(name) if !name.is_empty() => names.push(name.to_owned()),
                _ => continue,
            },
            Err(err) => {
                warn!(row = row + 1, error = %err, "unreadable catalog row; skipping");
                failed += 1;
            }
        }
    }

    Ok(CatalogNames { names, failed })
}
