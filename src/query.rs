//! Query parameter encoding.
//!
//! Parameter structs serialize through `serde_qs` in field declaration order;
//! absent (`None`) fields are skipped, never sent as empty values.

use serde::Serialize;

use crate::error::Result;
use crate::validate::{validate, Validate};

/// Separator the API expects between ids in list-valued parameters.
pub const ID_SEPARATOR: &str = "-";

/// Sentinel for "every live fixture".
pub const LIVE_ALL: &str = "all";

/// Encode `params` as a query string (without the leading `?`).
///
/// An object whose fields are all absent encodes to the empty string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a query string.
pub fn encode<P: Serialize>(params: &P) -> Result<String> {
    Ok(serde_qs::to_string(params)?)
}

/// Encode `params` as ordered, decoded key/value pairs.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a query string.
pub fn encode_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>> {
    let query = encode(params)?;
    Ok(url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect())
}

/// Validate then encode optional parameters.
///
/// `None` short-circuits: nothing is validated and no query string is
/// produced. An all-absent object also yields `None` so that no bare `?` is
/// appended to the URL.
///
/// # Errors
///
/// Returns a validation error listing every violated constraint, or an
/// encoding error.
pub fn prepare<P>(params: Option<&P>) -> Result<Option<String>>
where
    P: Serialize + Validate,
{
    let Some(params) = params else {
        return Ok(None);
    };

    validate(params)?;
    let query = encode(params)?;
    Ok(Some(query).filter(|q| !q.is_empty()))
}

/// Render an id list the way the API expects it.
///
/// Empty lists are omitted, a single id is sent bare and longer lists are
/// joined with `-` in input order.
pub fn join_ids(ids: &[i64]) -> Option<String> {
    match ids {
        [] => None,
        [single] => Some(single.to_string()),
        many => Some(
            many.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(ID_SEPARATOR),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Constraint, FieldCheck};

    #[derive(Default, Serialize)]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        current: Option<bool>,
    }

    impl Validate for Params {
        fn checks(&self) -> Vec<FieldCheck<'_>> {
            vec![FieldCheck::int("id", self.id, Constraint::NonNegative)]
        }
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[]), None);
        assert_eq!(join_ids(&[33]).as_deref(), Some("33"));
        assert_eq!(join_ids(&[33, 34]).as_deref(), Some("33-34"));
        assert_eq!(join_ids(&[39, 61, 2]).as_deref(), Some("39-61-2"));
    }

    #[test]
    fn test_all_absent_encodes_empty() {
        assert_eq!(encode(&Params::default()).unwrap(), "");
        assert!(encode_pairs(&Params::default()).unwrap().is_empty());
    }

    #[test]
    fn test_single_field_single_pair() {
        let params = Params {
            current: Some(false),
            ..Default::default()
        };
        let pairs = encode_pairs(&params).unwrap();
        assert_eq!(pairs, vec![("current".to_string(), "false".to_string())]);
    }

    #[test]
    fn test_pairs_keep_declaration_order() {
        let params = Params {
            id: Some(0),
            name: Some("Premier League".to_string()),
            current: Some(true),
        };
        let pairs = encode_pairs(&params).unwrap();
        let keys: Vec<_> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["id", "name", "current"]);
        assert_eq!(pairs[1].1, "Premier League");
    }

    #[test]
    fn test_prepare_none_short_circuits() {
        assert_eq!(prepare::<Params>(None).unwrap(), None);
    }

    #[test]
    fn test_prepare_empty_object_has_no_query() {
        assert_eq!(prepare(Some(&Params::default())).unwrap(), None);
    }

    #[test]
    fn test_prepare_encodes_borrowed_params() {
        let params = Params {
            id: Some(39),
            ..Default::default()
        };
        let borrowed = &params;
        assert_eq!(prepare(Some(&borrowed)).unwrap().as_deref(), Some("id=39"));
    }

    #[test]
    fn test_prepare_validates_first() {
        let params = Params {
            id: Some(-1),
            ..Default::default()
        };
        let err = prepare(Some(&params)).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Validation);
    }
}
