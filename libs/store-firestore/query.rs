use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use crate::wire::WireValue;

/// Body of a `:runQuery` call, in firestore's structured query format.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    structured_query: StructuredQuery,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    filter: Where,
    limit: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Where {
    composite_filter: CompositeFilter,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CompositeFilter {
    op: String,
    filters: Vec<Filter>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Filter {
    field_filter: FieldFilter,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FieldFilter {
    field: FieldReference,
    op: String,
    value: WireValue,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

impl QueryRequest {
    /// Single-workday lookup: exact match on display date and owner, one
    /// result at most. The store only supports equality here, no range or
    /// partial matching.
    pub fn workday_by_date(collection_id: &str, display_date: &str, user_id: &str) -> Self {
        let equals = |path: &str, value: &str| Filter {
            field_filter: FieldFilter {
                field: FieldReference {
                    field_path: path.to_string(),
                },
                op: "EQUAL".to_string(),
                value: WireValue::string(value),
            },
        };

        QueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection_id.to_string(),
                }],
                filter: Where {
                    composite_filter: CompositeFilter {
                        op: "AND".to_string(),
                        filters: vec![
                            equals("displayDate", display_date),
                            equals("userId", user_id),
                        ],
                    },
                },
                limit: 1,
            },
        }
    }
}

/// One element of a `:runQuery` response. The store signals "no match"
/// with a row carrying no document rather than an empty array.
#[derive(Deserialize, Debug, Default)]
pub struct QueryResultRow {
    #[serde(default)]
    pub document: Option<WireDocument>,
}

#[derive(Deserialize, Debug)]
pub struct WireDocument {
    /// Full resource name, e.g.
    /// `projects/{p}/databases/{db}/documents/workdays/{id}`
    pub name: String,
    pub fields: BTreeMap<String, WireValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_matches_the_wire_shape() {
        let query = QueryRequest::workday_by_date("workdays", "2024-01-01", "u1");

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "structuredQuery": {
                    "from": [{ "collectionId": "workdays" }],
                    "where": {
                        "compositeFilter": {
                            "op": "AND",
                            "filters": [
                                {
                                    "fieldFilter": {
                                        "field": { "fieldPath": "displayDate" },
                                        "op": "EQUAL",
                                        "value": { "stringValue": "2024-01-01" }
                                    }
                                },
                                {
                                    "fieldFilter": {
                                        "field": { "fieldPath": "userId" },
                                        "op": "EQUAL",
                                        "value": { "stringValue": "u1" }
                                    }
                                }
                            ]
                        }
                    },
                    "limit": 1
                }
            })
        );
    }

    #[test]
    fn empty_result_rows_deserialize_without_a_document() {
        let rows: Vec<QueryResultRow> = serde_json::from_value(json!([{}])).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].document.is_none());
    }

    #[test]
    fn result_rows_ignore_read_time_metadata() {
        let rows: Vec<QueryResultRow> =
            serde_json::from_value(json!([{ "readTime": "2024-01-01T00:00:00Z" }])).unwrap();
        assert!(rows[0].document.is_none());
    }
}
