use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One stage of an onboarding funnel and the number of users who reached it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FunnelStep {
    #[schema(example = "Verify Email")]
    pub step: String,
    #[schema(example = 62)]
    pub users: u64,
    /// Any other caller-supplied keys, such as `dropoffRate`, echoed back unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FunnelStep {
    pub fn new(step: impl Into<String>, users: u64) -> Self {
        Self {
            step: step.into(),
            users,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_funnel_step_wire_shape() {
        let step = FunnelStep::new("Create Account", 100);
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json, json!({"step": "Create Account", "users": 100}));
    }

    #[test]
    fn test_funnel_step_keeps_extra_keys() {
        let input = json!({
            "step": "Verify Email",
            "users": 62,
            "dropoffRate": 38.0,
            "notes": {"source": "csv"}
        });
        let step: FunnelStep = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(step.step, "Verify Email");
        assert_eq!(step.users, 62);
        assert_eq!(step.extra["dropoffRate"], json!(38.0));
        assert_eq!(serde_json::to_value(&step).unwrap(), input);
    }

    #[test]
    fn test_funnel_step_rejects_negative_users() {
        let result = serde_json::from_str::<FunnelStep>(r#"{"step": "x", "users": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_funnel_step_requires_step_and_users() {
        assert!(serde_json::from_value::<FunnelStep>(json!({"step": "x"})).is_err());
        assert!(serde_json::from_value::<FunnelStep>(json!({"users": 1})).is_err());
    }
}
