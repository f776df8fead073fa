use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use crate::core::error::{Error, Result};
use crate::model::{Collection, Organization, Ticket, User};
use crate::schema::schema::Record;
use crate::storage::layout::DataLayout;

/// Read one JSON array of records.
///
/// Records keep file order. A repeated `_id` replaces the earlier record
/// in place and is logged.
pub fn load_collection<R>(path: &Path) -> Result<Collection<R>>
where
    R: Record + DeserializeOwned,
{
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        IoErrorKind::NotFound => Error::MissingFile { path: path.to_path_buf() },
        _ => Error::Io(err),
    })?;

    let parsed: Vec<R> = serde_json::from_str(&text).map_err(|source| Error::Parse {
        kind: R::KIND,
        path: path.to_path_buf(),
        source,
    })?;

    let mut collection = Collection::new();
    for record in parsed {
        let id = record.id().clone();
        if collection.insert(record).is_some() {
            warn!(kind = %R::KIND, %id, path = %path.display(), "duplicate record id, keeping the later one");
        }
    }

    info!(kind = %R::KIND, records = collection.len(), path = %path.display(), "loaded collection");
    Ok(collection)
}

/// The three collections read from one data directory.
#[derive(Debug, Clone)]
pub struct Collections {
    pub organizations: Collection<Organization>,
    pub users: Collection<User>,
    pub tickets: Collection<Ticket>,
}

pub fn load_all(layout: &DataLayout) -> Result<Collections> {
    Ok(Collections {
        organizations: load_collection(layout.path_for(Organization::KIND))?,
        users: load_collection(layout.path_for(User::KIND))?,
        tickets: load_collection(layout.path_for(Ticket::KIND))?,
    })
}
