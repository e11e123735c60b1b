use dropoff_core::FunnelStep;

/// Funnel summary plus the findings derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub funnel: Vec<FunnelStep>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Funnel reported when the caller sends none
pub fn default_funnel() -> Vec<FunnelStep> {
    vec![
        FunnelStep::new("Create Account", 100),
        FunnelStep::new("Verify Email", 62),
        FunnelStep::new("Finish Profile", 28),
    ]
}

const INSIGHTS: [&str; 2] = [
    "High drop-off at 'Verify Email'—users may find OTP confusing.",
    "Many sessions show rage-clicking on 'Resend OTP' button.",
];

const RECOMMENDATIONS: [&str; 2] = [
    "Add animated guide for email verification",
    "Make 'Resend OTP' button more visible and add loading feedback",
];

/// Produces funnel insights for an analysis request.
///
/// Insights and recommendations are fixed placeholders; they do not yet look
/// at the sessions.
#[derive(Debug, Default, Clone)]
pub struct InsightService;

impl InsightService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, funnel: Option<Vec<FunnelStep>>, _sessions: &[String]) -> Insights {
        let funnel = funnel
            .filter(|steps| !steps.is_empty())
            .unwrap_or_else(default_funnel);

        Insights {
            funnel,
            insights: INSIGHTS.iter().map(|s| s.to_string()).collect(),
            recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
