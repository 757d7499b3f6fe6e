use std::fmt;

use crate::endpoint::endpoints;
use crate::error::{ProtocolError, ProtocolResult};

/// A parsed request path.
///
/// Path segments are percent-decoded but otherwise untouched; the
/// positional encodings inside them are decoded by the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// `/get_all_drug/`
    ListDrugs,
    /// `/get_drug/:id`
    GetDrug { id: String },
    /// `/add_drug/:drug`
    AddDrug { encoded: String },
    /// `/change_holder/:holder`
    ChangeHolder { encoded: String },
}

impl Request {
    /// Parse a request path such as `/get_drug/D1`.
    ///
    /// Any query string is ignored. The list path is accepted with or
    /// without its trailing slash.
    pub fn parse(path: &str) -> ProtocolResult<Self> {
        let path = path.split_once('?').map_or(path, |(path, _)| path).trim();

        if path.trim_end_matches('/') == endpoints::GET_ALL_DRUG.trim_end_matches('/') {
            return Ok(Self::ListDrugs);
        }
        if let Some(id) = route_argument(path, endpoints::GET_DRUG, "drug id") {
            return Ok(Self::GetDrug { id: id? });
        }
        if let Some(encoded) = route_argument(path, endpoints::ADD_DRUG, "drug encoding") {
            return Ok(Self::AddDrug { encoded: encoded? });
        }
        if let Some(encoded) =
            route_argument(path, endpoints::CHANGE_HOLDER, "holder change encoding")
        {
            return Ok(Self::ChangeHolder { encoded: encoded? });
        }

        Err(ProtocolError::UnknownRoute(path.to_string()))
    }

    /// The canonical, percent-encoded path for this request.
    pub fn path(&self) -> String {
        match self {
            Self::ListDrugs => endpoints::GET_ALL_DRUG.to_string(),
            Self::GetDrug { id } => format!("{}{}", endpoints::GET_DRUG, urlencoding::encode(id)),
            Self::AddDrug { encoded } => {
                format!("{}{}", endpoints::ADD_DRUG, urlencoding::encode(encoded))
            }
            Self::ChangeHolder { encoded } => {
                format!("{}{}", endpoints::CHANGE_HOLDER, urlencoding::encode(encoded))
            }
        }
    }

    /// Short operation name for logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ListDrugs => "list",
            Self::GetDrug { .. } => "get",
            Self::AddDrug { .. } => "create",
            Self::ChangeHolder { .. } => "transfer",
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The argument of `path` under `prefix`, or `None` if the path is not on
/// that route. The bare prefix without its trailing slash counts as the
/// route with its argument missing.
fn route_argument(
    path: &str,
    prefix: &str,
    what: &'static str,
) -> Option<ProtocolResult<String>> {
    if path == prefix.trim_end_matches('/') {
        return Some(Err(ProtocolError::MissingArgument(what)));
    }
    path.strip_prefix(prefix)
        .map(|segment| decode_segment(path, segment, what))
}

/// A route parameter is exactly one non-empty path segment.
fn decode_segment(path: &str, segment: &str, what: &'static str) -> ProtocolResult<String> {
    if segment.is_empty() {
        return Err(ProtocolError::MissingArgument(what));
    }
    if segment.contains('/') {
        return Err(ProtocolError::UnknownRoute(path.to_string()));
    }
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ProtocolError::InvalidEncoding(segment.to_string()))
}
