use chrono::NaiveDate;
use minbar::widgets::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Settled,
    Pending,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Settled => "Settled",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            PaymentStatus::Settled => BadgeVariant::Success,
            PaymentStatus::Pending => BadgeVariant::Warning,
            PaymentStatus::Refunded => BadgeVariant::Info,
            PaymentStatus::Failed => BadgeVariant::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub reference: String,
    pub pilgrim: String,
    pub description: String,
    pub amount_sar: f64,
    pub status: PaymentStatus,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} SAR {:.2} ({})",
            self.reference,
            self.description,
            self.amount_sar,
            self.status.label()
        )
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, d).unwrap_or_default()
}

pub fn sample() -> Vec<Transaction> {
    let rows = [
        ("TXN-88412", "Amina Khalid", "Package balance", 12_400.0, PaymentStatus::Settled, 3),
        ("TXN-88437", "Bilal Rahman", "Qurbani voucher", 720.0, PaymentStatus::Settled, 5),
        ("TXN-88461", "Cahya Putri", "Tent upgrade", 1_850.0, PaymentStatus::Pending, 9),
        ("TXN-88470", "Dawud Sow", "Package deposit", 4_000.0, PaymentStatus::Pending, 11),
        ("TXN-88493", "Elif Yilmaz", "Transport pass", 310.0, PaymentStatus::Failed, 12),
        ("TXN-88502", "Farid Qureshi", "Package balance", 9_950.0, PaymentStatus::Settled, 14),
        ("TXN-88519", "Ghada Amin", "Cancellation", 2_100.0, PaymentStatus::Refunded, 15),
        ("TXN-88533", "Hamid Noor", "Zamzam shipment", 145.0, PaymentStatus::Settled, 17),
    ];

    rows.into_iter()
        .map(
            |(reference, pilgrim, description, amount_sar, status, d)| Transaction {
                reference: reference.into(),
                pilgrim: pilgrim.into(),
                description: description.into(),
                amount_sar,
                status,
                date: date(d),
            },
        )
        .collect()
}
