use chrono::NaiveDate;
use minbar::widgets::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            Severity::Low => BadgeVariant::Neutral,
            Severity::Medium => BadgeVariant::Info,
            Severity::High => BadgeVariant::Warning,
            Severity::Critical => BadgeVariant::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FraudAlert {
    pub id: String,
    pub pattern: String,
    pub account: String,
    pub severity: Severity,
    pub score: f64,
    pub flagged_on: NaiveDate,
    pub open: bool,
}

impl FraudAlert {
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] {} on {} (score {:.2})",
            self.id,
            self.severity.label(),
            self.pattern,
            self.account,
            self.score
        )
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap_or_default()
}

pub fn sample() -> Vec<FraudAlert> {
    let rows = [
        ("FR-2201", "Duplicate visa application", "acct-5521", Severity::High, 0.91, 20, true),
        ("FR-2202", "Unlicensed operator listing", "op-0934", Severity::Critical, 0.97, 20, true),
        ("FR-2198", "Card testing burst", "acct-7812", Severity::Medium, 0.74, 19, true),
        ("FR-2190", "Refund loop", "acct-3307", Severity::High, 0.88, 18, false),
        ("FR-2185", "Identity mismatch at check-in", "acct-1160", Severity::Medium, 0.69, 17, false),
        ("FR-2179", "Phantom package resale", "op-0221", Severity::Critical, 0.95, 15, true),
        ("FR-2171", "Velocity anomaly", "acct-9902", Severity::Low, 0.41, 13, false),
    ];

    rows.into_iter()
        .map(
            |(id, pattern, account, severity, score, d, open)| FraudAlert {
                id: id.into(),
                pattern: pattern.into(),
                account: account.into(),
                severity,
                score,
                flagged_on: date(d),
                open,
            },
        )
        .collect()
}
