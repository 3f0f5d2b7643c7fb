/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed return-authorization resources and binary downloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A return authorization (RMA)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnOrder {
    pub id: i64,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_updated_date: Option<DateTime<FixedOffset>>,
    /// Fields without a typed counterpart (routing, events, options, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hold placed on a return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnHold {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub external_order_id: Option<String>,
    #[serde(default, rename = "type")]
    pub hold_type: Option<String>,
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub applied_date: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub cleared_date: Option<DateTime<FixedOffset>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub expected: Option<i64>,
    #[serde(default)]
    pub received: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnTracking {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub tracking: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub summary_date: Option<DateTime<FixedOffset>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLabel {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub carrier: Option<String>,
    #[serde(default)]
    pub tracking: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Asynchronous job created by bulk label generation.
///
/// Once finished, the job exposes a download URL for the combined PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelJob {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Binary document fetched with `Accept: application/pdf`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Download {
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("application/pdf"))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_order_keeps_unknown_fields() {
        let order: ReturnOrder = serde_json::from_str(
            r#"{
                "id": 1200,
                "externalId": "RMA-7",
                "transactionId": "1401308400-946121-1",
                "status": "processed",
                "lastUpdatedDate": "2014-05-30T13:08:29-07:00",
                "routing": {"warehouseId": 10}
            }"#,
        )
        .unwrap();

        assert_eq!(order.id, 1200);
        assert_eq!(order.external_id.as_deref(), Some("RMA-7"));
        assert_eq!(order.status.as_deref(), Some("processed"));
        assert_eq!(
            order.last_updated_date.map(|date| date.to_rfc3339()),
            Some("2014-05-30T13:08:29-07:00".to_string())
        );
        assert_eq!(order.extra["routing"]["warehouseId"], 10);
    }

    #[test]
    fn test_hold_type_rename() {
        let hold: ReturnHold = serde_json::from_str(
            r#"{"id": 3, "type": "order", "subType": "manual", "clearedDate": null}"#,
        )
        .unwrap();
        assert_eq!(hold.hold_type.as_deref(), Some("order"));
        assert_eq!(hold.sub_type.as_deref(), Some("manual"));
        assert!(hold.cleared_date.is_none());
    }

    #[test]
    fn test_download_pdf_detection() {
        let download = Download {
            content_type: Some("application/pdf; charset=binary".to_string()),
            body: Bytes::from_static(b"%PDF-1.4"),
        };
        assert!(download.is_pdf());
        assert_eq!(download.len(), 8);
        assert!(!download.is_empty());
    }
}
