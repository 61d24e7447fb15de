//! Substitution board retrieval.

use serde::Deserialize;
use subboard_core::monitor::{
    filter_rows, MonitorPayload, MonitorRequest, QueryOptions, SchoolIdentity,
};

use super::MonitorClient;
use crate::error::{ClientError, Result};

/// Raw response envelope: the service reports domain errors inside
/// success-status bodies, so both branches have to be decoded.
#[derive(Debug, Deserialize)]
struct ResultEnvelope {
    error: Option<ApiErrorBody>,
    payload: Option<MonitorPayload>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    message: String,
}

impl MonitorClient {
    /// Retrieves the substitution board for one school and query.
    ///
    /// One call issues exactly one POST; there is no retry, caching,
    /// or client-imposed timeout. Rows are narrowed to the requested
    /// filter groups; absent elements pass through unfiltered.
    pub async fn retrieve_timetable(
        &self,
        identity: &SchoolIdentity,
        options: &QueryOptions,
    ) -> Result<MonitorPayload> {
        let request = MonitorRequest::build(identity, options)?;

        tracing::debug!(
            school = %request.school_name,
            date = request.date,
            days = request.number_of_days,
            "requesting substitution data"
        );

        let response = self
            .client
            .post(self.url("/monitor/substitution/data"))
            .query(&[("school", &request.school_name)])
            .header("X-Requested-With", "XMLHttpRequest")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let mut payload = decode_envelope(&body)?;

        tracing::debug!(
            rows = payload.rows.len(),
            absent = payload.absent_elements.len(),
            "received substitution data"
        );

        payload.rows = filter_rows(payload.rows, options.filter_groups.as_deref());
        Ok(payload)
    }
}

/// Decodes a success-status body into a payload, surfacing embedded
/// domain errors.
fn decode_envelope(body: &str) -> Result<MonitorPayload> {
    let envelope: ResultEnvelope = serde_json::from_str(body)?;

    if let Some(error) = envelope.error {
        return Err(ClientError::Api {
            code: error.code,
            message: error.message,
        });
    }

    envelope.payload.ok_or_else(|| {
        ClientError::InvalidResponse("body contains neither payload nor error".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope_returns_payload() {
        let body = r#"{
            "payload": {
                "rows": [{"group": "11a", "data": ["1", "Math"], "cellClasses": {}}],
                "absentElements": [{"elementName": "Smith", "absences": [{"type": "TEACHER"}]}],
                "lastUpdate": "21.05.2025 07:45"
            }
        }"#;

        let payload = decode_envelope(body).unwrap();
        assert_eq!(payload.rows.len(), 1);
        assert_eq!(payload.rows[0].group, "11a");
        assert_eq!(payload.absent_elements.len(), 1);
        assert_eq!(payload.last_update, "21.05.2025 07:45");
    }

    #[test]
    fn test_decode_envelope_surfaces_embedded_error() {
        let body = r#"{"error":{"code":-1,"message":"not found"}}"#;

        match decode_envelope(body) {
            Err(ClientError::Api { code, message }) => {
                assert_eq!(code, -1);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_decode_envelope_prefers_error_over_payload() {
        let body = r#"{
            "error": {"code": 500, "message": "boom"},
            "payload": {"rows": [], "absentElements": [], "lastUpdate": ""}
        }"#;

        assert!(matches!(
            decode_envelope(body),
            Err(ClientError::Api { code: 500, .. })
        ));
    }

    #[test]
    fn test_decode_envelope_rejects_non_json() {
        assert!(matches!(
            decode_envelope("<html>maintenance</html>"),
            Err(ClientError::Json(_))
        ));
    }

    #[test]
    fn test_decode_envelope_rejects_empty_envelope() {
        assert!(matches!(
            decode_envelope("{}"),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_decode_envelope_tolerates_unknown_payload_fields() {
        let body = r#"{
            "payload": {
                "rows": [],
                "absentElements": [],
                "lastUpdate": "",
                "affectedElements": {"1": ["11a"]},
                "importInProgress": false
            }
        }"#;

        assert!(decode_envelope(body).is_ok());
    }
}
