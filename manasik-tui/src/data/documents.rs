use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Passport,
    Visa,
    Vaccination,
    Ticket,
}

impl DocKind {
    pub fn label(self) -> &'static str {
        match self {
            DocKind::Passport => "Passport",
            DocKind::Visa => "Visa",
            DocKind::Vaccination => "Vaccination",
            DocKind::Ticket => "Ticket",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TravelDocument {
    pub pilgrim: String,
    pub kind: DocKind,
    pub number: String,
    pub expires: Option<NaiveDate>,
    pub verified: bool,
}

impl TravelDocument {
    pub fn summary(&self) -> String {
        let state = if self.verified { "verified" } else { "unverified" };
        format!("{} {} {} ({state})", self.pilgrim, self.kind.label(), self.number)
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

pub fn sample() -> Vec<TravelDocument> {
    let rows = [
        ("Amina Khalid", DocKind::Passport, "A0482917", date(2031, 3, 14), true),
        ("Amina Khalid", DocKind::Visa, "HV-26-88120", date(2026, 7, 10), true),
        ("Bilal Rahman", DocKind::Passport, "BD7720014", date(2027, 1, 2), true),
        ("Bilal Rahman", DocKind::Vaccination, "VAX-99120", None, true),
        ("Cahya Putri", DocKind::Ticket, "GA-980/24MAY", date(2026, 5, 24), false),
        ("Dawud Sow", DocKind::Visa, "HV-26-90411", date(2026, 7, 10), false),
        ("Elif Yilmaz", DocKind::Passport, "U21449823", date(2026, 6, 30), true),
        ("Ghada Amin", DocKind::Vaccination, "VAX-10441", None, false),
    ];

    rows.into_iter()
        .map(|(pilgrim, kind, number, expires, verified)| TravelDocument {
            pilgrim: pilgrim.into(),
            kind,
            number: number.into(),
            expires,
            verified,
        })
        .collect()
}
