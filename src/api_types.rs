use serde::{Deserialize, Serialize};

// Request body for POST /delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id_aws: String,
    pub queue_name: String,
    pub sqs_endpoint: String,
    pub receipt_handle: String,
}

impl DeleteRequest {
    /// Parse a raw JSON body, collecting one `FieldError` per missing or
    /// empty field instead of stopping at the first problem.
    pub fn from_json(body: &str) -> Result<Self, Vec<FieldError>> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| vec![FieldError::body(format!("Invalid JSON: {}", e))])?;

        let mut errors = Vec::new();
        let id_aws = required_field(&value, "id_aws", &mut errors);
        let queue_name = required_field(&value, "queue_name", &mut errors);
        let sqs_endpoint = required_field(&value, "sqs_endpoint", &mut errors);
        let receipt_handle = required_field(&value, "receipt_handle", &mut errors);

        if errors.is_empty() {
            Ok(Self {
                id_aws: id_aws.unwrap_or_default(),
                queue_name: queue_name.unwrap_or_default(),
                sqs_endpoint: sqs_endpoint.unwrap_or_default(),
                receipt_handle: receipt_handle.unwrap_or_default(),
            })
        } else {
            Err(errors)
        }
    }
}

fn required_field(
    value: &serde_json::Value,
    name: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value.get(name) {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(serde_json::Value::String(_)) => {
            errors.push(FieldError::field(name, "Field cannot be empty", "string_empty"));
            None
        }
        Some(_) => {
            errors.push(FieldError::field(name, "Field must be a string", "string_type"));
            None
        }
        None => {
            errors.push(FieldError::field(name, "Field required", "missing"));
            None
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub queue_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ConnectionResponse {
    pub success: bool,
    pub message: String,
    pub region: String,
}

// Error body for 401/500 responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// Structured 422 payload identifying the offending field(s)
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl FieldError {
    pub fn field(name: &str, msg: &str, error_type: &str) -> Self {
        Self {
            loc: vec!["body".to_string(), name.to_string()],
            msg: msg.to_string(),
            error_type: error_type.to_string(),
        }
    }

    pub fn body(msg: String) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg,
            error_type: "json_invalid".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_parses() {
        let body = r#"{
            "id_aws": "123456789012",
            "queue_name": "my-queue.fifo",
            "sqs_endpoint": "sqs.us-east-1.amazonaws.com",
            "receipt_handle": "AQEBzbVv..."
        }"#;
        let request = DeleteRequest::from_json(body).expect("should parse");
        assert_eq!(request.id_aws, "123456789012");
        assert_eq!(request.queue_name, "my-queue.fifo");
        assert_eq!(request.sqs_endpoint, "sqs.us-east-1.amazonaws.com");
        assert_eq!(request.receipt_handle, "AQEBzbVv...");
    }

    #[test]
    fn test_missing_field_reported_by_name() {
        let body = r#"{
            "id_aws": "123456789012",
            "queue_name": "my-queue",
            "sqs_endpoint": "sqs.us-east-1.amazonaws.com"
        }"#;
        let errors = DeleteRequest::from_json(body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body", "receipt_handle"]);
        assert_eq!(errors[0].msg, "Field required");
        assert_eq!(errors[0].error_type, "missing");
    }

    #[test]
    fn test_all_fields_missing_reports_all_four() {
        let errors = DeleteRequest::from_json("{}").unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_empty_string_rejected() {
        let body = r#"{
            "id_aws": "",
            "queue_name": "my-queue",
            "sqs_endpoint": "sqs.us-east-1.amazonaws.com",
            "receipt_handle": "AQEB"
        }"#;
        let errors = DeleteRequest::from_json(body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body", "id_aws"]);
        assert_eq!(errors[0].error_type, "string_empty");
    }

    #[test]
    fn test_non_string_field_rejected() {
        let body = r#"{
            "id_aws": 123456789012,
            "queue_name": "my-queue",
            "sqs_endpoint": "sqs.us-east-1.amazonaws.com",
            "receipt_handle": "AQEB"
        }"#;
        let errors = DeleteRequest::from_json(body).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, "string_type");
    }

    #[test]
    fn test_invalid_json_reported_at_body() {
        let errors = DeleteRequest::from_json("not json").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["body"]);
        assert_eq!(errors[0].error_type, "json_invalid");
    }
}
