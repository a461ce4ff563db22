use std::fmt;

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// Parameter error for the `distinct` command document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A required parameter was absent.
    Missing(&'static str),
    /// A parameter had the wrong BSON type.
    InvalidType {
        field: String,
        expected: &'static str,
    },
    /// `key` was present but empty.
    EmptyKey,
    /// The parameter is recognized but not supported.
    NotImplemented(&'static str),
    /// The parameter is not part of the `distinct` command.
    UnknownField(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing(field) => write!(f, "required parameter '{field}' is missing"),
            ParamError::InvalidType { field, expected } => {
                write!(f, "parameter '{field}' must be a {expected}")
            }
            ParamError::EmptyKey => write!(f, "distinct key must not be empty"),
            ParamError::NotImplemented(field) => {
                write!(f, "parameter '{field}' is not implemented")
            }
            ParamError::UnknownField(field) => write!(f, "unknown parameter '{field}'"),
        }
    }
}

impl std::error::Error for ParamError {}

/// Parameters of the `distinct` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistinctParams {
    pub db: Option<String>,
    pub collection: String,
    pub key: String,
    pub filter: Option<Document>,
    pub comment: Option<String>,
}

/// Extract `distinct` command parameters from a command document.
///
/// Command shape: `{ distinct: <collection>, key: <field path>,
/// query: <filter>, comment: <string>, $db: <db> }`. The filter is carried
/// as data for the caller; document selection happens before evaluation.
/// `collation` is recognized but unsupported; driver session fields are
/// ignored.
pub fn parse_distinct_params(doc: &Document) -> Result<DistinctParams, ParamError> {
    let mut db = None;
    let mut collection = None;
    let mut key = None;
    let mut filter = None;
    let mut comment = None;

    for (name, value) in doc.iter() {
        match name.as_str() {
            "distinct" => collection = Some(expect_string(name, value)?),
            "key" => key = Some(expect_string(name, value)?),
            "$db" => db = Some(expect_string(name, value)?),
            "query" => match value {
                Bson::Document(d) => filter = Some(d.clone()),
                Bson::Null => {}
                _ => return Err(invalid_type(name, "document")),
            },
            "comment" => match value {
                Bson::String(s) => comment = Some(s.clone()),
                Bson::Null => {}
                _ => return Err(invalid_type(name, "string")),
            },
            "collation" => return Err(ParamError::NotImplemented("collation")),
            "readConcern" | "lsid" | "$clusterTime" | "$readPreference" | "maxTimeMS" => {
                tracing::debug!(parameter = name.as_str(), "ignoring distinct parameter");
            }
            _ => return Err(ParamError::UnknownField(name.clone())),
        }
    }

    let collection = collection.ok_or(ParamError::Missing("distinct"))?;
    let key = key.ok_or(ParamError::Missing("key"))?;
    if key.is_empty() {
        return Err(ParamError::EmptyKey);
    }

    Ok(DistinctParams {
        db,
        collection,
        key,
        filter,
        comment,
    })
}

fn expect_string(field: &str, value: &Bson) -> Result<String, ParamError> {
    match value {
        Bson::String(s) => Ok(s.clone()),
        _ => Err(invalid_type(field, "string")),
    }
}

fn invalid_type(field: &str, expected: &'static str) -> ParamError {
    ParamError::InvalidType {
        field: field.to_string(),
        expected,
    }
}
