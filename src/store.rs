use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::path::Path;

/// A single record: an arbitrary JSON object identified by its `id` field
pub type Record = Map<String, JsonValue>;

/// A named collection of records plus the fields a PATCH may touch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub route: String,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub data: Vec<Record>,
    /// Any other route-level keys, written back unchanged on save
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Errors raised by store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Route not found")]
    RouteNotFound { route: String },
    #[error("ID not found")]
    IdNotFound { route: String, id: String },
    #[error("Search query is required")]
    EmptyQuery,
    #[error("No results found")]
    NoResults { query: String },
    #[error("Invalid fields: {}", .0.join(", "))]
    InvalidFields(Vec<String>),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// In-memory route store, loaded once at startup and saved on shutdown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteStore {
    routes: Vec<RouteEntry>,
}

impl RouteStore {
    pub fn new(routes: Vec<RouteEntry>) -> Self {
        Self { routes }
    }

    /// Read and parse the data file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let routes: Vec<RouteEntry> = serde_json::from_slice(&bytes)?;
        Ok(Self::new(routes))
    }

    /// Load the data file, falling back to an empty store on any failure.
    ///
    /// The returned flag tells whether the file may be overwritten at
    /// shutdown. It is false when the file exists but could not be read or
    /// parsed, so the empty store never replaces it.
    pub fn load_or_empty(path: &Path) -> (Self, bool) {
        match Self::load(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    routes = store.routes.len(),
                    records = store.record_count(),
                    "Database loaded"
                );
                (store, true)
            }
            Err(StoreError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Data file not found, starting with an empty store"
                );
                (Self::default(), true)
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    "Failed to read data file, starting with an empty store that will not be saved: {}",
                    e
                );
                (Self::default(), false)
            }
        }
    }

    /// Serialize the whole store, pretty-printed, to `path`.
    ///
    /// Bytes are written to `<path>.tmp` first and renamed over the target,
    /// so a failed write leaves the previous file intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&self.routes)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let tmp = path.with_extension(format!("{ext}.tmp"));
        std::fs::write(&tmp, bytes)?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn record_count(&self) -> usize {
        self.routes.iter().map(|entry| entry.data.len()).sum()
    }

    /// First entry whose name matches `route` exactly
    pub fn find_route(&self, route: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|entry| entry.route == route)
    }

    fn find_route_mut(&mut self, route: &str) -> Result<&mut RouteEntry> {
        self.routes
            .iter_mut()
            .find(|entry| entry.route == route)
            .ok_or_else(|| StoreError::RouteNotFound {
                route: route.to_string(),
            })
    }

    /// All records of a route, in stored order
    pub fn get_all(&self, route: &str) -> Result<&[Record]> {
        self.find_route(route)
            .map(|entry| entry.data.as_slice())
            .ok_or_else(|| StoreError::RouteNotFound {
                route: route.to_string(),
            })
    }

    /// Case-insensitive substring search over the string values of every
    /// record in every route.
    ///
    /// Field names and non-string values never match. Results keep route
    /// order, then record order.
    pub fn search(&self, query: &str) -> Result<Vec<Record>> {
        if query.is_empty() {
            return Err(StoreError::EmptyQuery);
        }
        let needle = query.to_lowercase();

        let results: Vec<Record> = self
            .routes
            .iter()
            .flat_map(|entry| entry.data.iter())
            .filter(|record| {
                record.values().any(|value| match value {
                    JsonValue::String(s) => s.to_lowercase().contains(&needle),
                    _ => false,
                })
            })
            .cloned()
            .collect();

        if results.is_empty() {
            return Err(StoreError::NoResults {
                query: query.to_string(),
            });
        }
        Ok(results)
    }

    /// Remove the first record of `route` whose id loosely equals `id`
    pub fn delete_by_id(&mut self, route: &str, id: &str) -> Result<Record> {
        let entry = self.find_route_mut(route)?;
        let index = position_by_id(&entry.data, id).ok_or_else(|| StoreError::IdNotFound {
            route: route.to_string(),
            id: id.to_string(),
        })?;
        Ok(entry.data.remove(index))
    }

    /// Apply `updates` to the record of `route` whose id loosely equals `id`.
    ///
    /// Every key must be listed in the route's `properties`; if any is not,
    /// nothing is changed and all offending keys are reported.
    pub fn patch_by_id(&mut self, route: &str, id: &str, updates: Record) -> Result<Record> {
        let entry = self.find_route_mut(route)?;
        let index = position_by_id(&entry.data, id).ok_or_else(|| StoreError::IdNotFound {
            route: route.to_string(),
            id: id.to_string(),
        })?;

        let invalid: Vec<String> = updates
            .keys()
            .filter(|key| !entry.properties.contains(*key))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(StoreError::InvalidFields(invalid));
        }

        let record = &mut entry.data[index];
        for (field, value) in updates {
            record.insert(field, value);
        }
        Ok(record.clone())
    }
}

fn position_by_id(records: &[Record], id: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| record.get("id").and_then(id_text).as_deref() == Some(id))
}

/// Textual form of a stored id, used so that a numeric id matches the
/// string path parameter carrying the same digits.
fn id_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| f.to_string())
            }
        }
        _ => None,
    }
}
