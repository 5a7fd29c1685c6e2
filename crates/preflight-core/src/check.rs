//! Check primitive: severity plus a single rule outcome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finding severity.
///
/// Only `Error` and (under strict mode) `Warning` count toward blocking.
/// `Info` is reserved; no rule emits it today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one rule against one resource.
///
/// Every key is serialized even when its value is empty, so downstream
/// parsers can rely on a fixed shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Dotted, namespaced rule outcome, e.g. `build.invalid.expired`.
    pub id: String,
    pub severity: Severity,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: String,
    pub message: String,
    #[serde(default)]
    pub remediation: String,
}

impl CheckResult {
    fn new(id: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            severity,
            field: String::new(),
            resource_type: String::new(),
            resource_id: String::new(),
            message: message.into(),
            remediation: String::new(),
        }
    }

    /// Error-severity finding.
    pub fn error(id: &str, message: impl Into<String>) -> Self {
        Self::new(id, Severity::Error, message)
    }

    /// Warning-severity finding.
    pub fn warning(id: &str, message: impl Into<String>) -> Self {
        Self::new(id, Severity::Warning, message)
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.field = field.to_string();
        self
    }

    /// Attach the platform resource kind and (trimmed) identifier.
    pub fn with_resource(mut self, resource_type: &str, resource_id: &str) -> Self {
        self.resource_type = resource_type.to_string();
        self.resource_id = resource_id.trim().to_string();
        self
    }

    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = remediation.into();
        self
    }

    /// `type:id`, falling back to whichever half is present.
    pub fn resource_label(&self) -> String {
        let resource_type = self.resource_type.trim();
        let resource_id = self.resource_id.trim();
        match (resource_type.is_empty(), resource_id.is_empty()) {
            (true, true) => String::new(),
            (false, true) => resource_type.to_string(),
            (true, false) => resource_id.to_string(),
            (false, false) => format!("{}:{}", resource_type, resource_id),
        }
    }
}

/// True when any check in `checks` carries `id`.
pub fn has_check_id(checks: &[CheckResult], id: &str) -> bool {
    checks.iter().any(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_builder_trims_resource_id() {
        let check = CheckResult::error("build.invalid.expired", "build is expired")
            .with_resource("build", "  build-1 ")
            .with_remediation("Select a non-expired build");

        assert_eq!(check.resource_id, "build-1");
        assert_eq!(check.severity, Severity::Error);
        assert!(check.field.is_empty());
    }

    #[test]
    fn test_resource_label_variants() {
        let base = CheckResult::error("x", "m");
        assert_eq!(base.resource_label(), "");
        assert_eq!(
            base.clone().with_resource("build", "").resource_label(),
            "build"
        );
        assert_eq!(base.clone().with_resource("", "b-1").resource_label(), "b-1");
        assert_eq!(
            base.with_resource("build", "b-1").resource_label(),
            "build:b-1"
        );
    }

    #[test]
    fn test_empty_fields_keep_their_keys() {
        let value = serde_json::to_value(CheckResult::error("a.b", "msg")).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "id",
            "severity",
            "field",
            "resourceType",
            "resourceId",
            "message",
            "remediation",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 7);
    }
}
