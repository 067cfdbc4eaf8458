use chrono::NaiveDate;
use minbar::widgets::BadgeVariant;

/// Where a pilgrim currently is along the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStage {
    Registered,
    VisaIssued,
    InTransit,
    Makkah,
    Mina,
    Arafat,
    Madinah,
    Departed,
}

impl JourneyStage {
    pub fn label(self) -> &'static str {
        match self {
            JourneyStage::Registered => "Registered",
            JourneyStage::VisaIssued => "Visa issued",
            JourneyStage::InTransit => "In transit",
            JourneyStage::Makkah => "Makkah",
            JourneyStage::Mina => "Mina",
            JourneyStage::Arafat => "Arafat",
            JourneyStage::Madinah => "Madinah",
            JourneyStage::Departed => "Departed",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            JourneyStage::Registered => BadgeVariant::Neutral,
            JourneyStage::VisaIssued => BadgeVariant::Info,
            JourneyStage::InTransit => BadgeVariant::Warning,
            JourneyStage::Makkah | JourneyStage::Mina | JourneyStage::Arafat => {
                BadgeVariant::Success
            }
            JourneyStage::Madinah => BadgeVariant::Info,
            JourneyStage::Departed => BadgeVariant::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pilgrim {
    pub id: u32,
    pub name: String,
    pub nationality: String,
    pub group: String,
    pub stage: JourneyStage,
    pub arrival: Option<NaiveDate>,
    pub visa_ok: bool,
}

impl Pilgrim {
    pub fn summary(&self) -> String {
        format!(
            "{} ({}) group {} is at stage: {}",
            self.name,
            self.nationality,
            self.group,
            self.stage.label()
        )
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn sample() -> Vec<Pilgrim> {
    let rows = [
        (1001, "Amina Khalid", "Egypt", "EG-12", JourneyStage::Makkah, date(2026, 5, 18), true),
        (1002, "Bilal Rahman", "Bangladesh", "BD-07", JourneyStage::Mina, date(2026, 5, 19), true),
        (1003, "Cahya Putri", "Indonesia", "ID-44", JourneyStage::Arafat, date(2026, 5, 17), true),
        (1004, "Dawud Sow", "Senegal", "SN-03", JourneyStage::InTransit, None, true),
        (1005, "Elif Yilmaz", "Turkiye", "TR-21", JourneyStage::VisaIssued, None, true),
        (1006, "Farid Qureshi", "Pakistan", "PK-18", JourneyStage::Madinah, date(2026, 5, 12), true),
        (1007, "Ghada Amin", "Jordan", "JO-05", JourneyStage::Registered, None, false),
        (1008, "Hamid Noor", "Malaysia", "MY-29", JourneyStage::Makkah, date(2026, 5, 20), true),
        (1009, "Idris Keita", "Mali", "ML-02", JourneyStage::Departed, date(2026, 5, 2), true),
    ];

    rows.into_iter()
        .map(
            |(id, name, nationality, group, stage, arrival, visa_ok)| Pilgrim {
                id,
                name: name.into(),
                nationality: nationality.into(),
                group: group.into(),
                stage,
                arrival,
                visa_ok,
            },
        )
        .collect()
}
