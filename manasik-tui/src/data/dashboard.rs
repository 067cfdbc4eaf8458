use minbar::widgets::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalStatus {
    Landed,
    OnTime,
    Delayed,
    Boarding,
}

impl ArrivalStatus {
    pub fn label(self) -> &'static str {
        match self {
            ArrivalStatus::Landed => "Landed",
            ArrivalStatus::OnTime => "On time",
            ArrivalStatus::Delayed => "Delayed",
            ArrivalStatus::Boarding => "Boarding",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            ArrivalStatus::Landed => BadgeVariant::Success,
            ArrivalStatus::OnTime => BadgeVariant::Info,
            ArrivalStatus::Delayed => BadgeVariant::Danger,
            ArrivalStatus::Boarding => BadgeVariant::Neutral,
        }
    }
}

/// An inbound pilgrim flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub flight: String,
    pub origin: String,
    pub eta: String,
    pub pilgrims: i64,
    pub status: ArrivalStatus,
}

impl Arrival {
    pub fn summary(&self) -> String {
        format!(
            "{} from {} ({} pilgrims) is {}",
            self.flight,
            self.origin,
            self.pilgrims,
            self.status.label()
        )
    }
}

/// Headline numbers plus today's arrivals board.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub pilgrims_total: i64,
    pub arrivals_today: i64,
    pub open_alerts: i64,
    pub camp_occupancy: f64,
    pub arrivals: Vec<Arrival>,
}

pub fn sample() -> DashboardData {
    let arrivals = [
        ("SV-5204", "Jakarta", "08:40", 414, ArrivalStatus::Landed),
        ("GA-980", "Surabaya", "09:15", 389, ArrivalStatus::Landed),
        ("PK-741", "Karachi", "10:05", 302, ArrivalStatus::OnTime),
        ("TK-108", "Istanbul", "10:50", 276, ArrivalStatus::Delayed),
        ("MS-645", "Cairo", "11:30", 330, ArrivalStatus::OnTime),
        ("BG-3021", "Dhaka", "12:10", 398, ArrivalStatus::Boarding),
        ("ET-404", "Addis Ababa", "13:25", 241, ArrivalStatus::OnTime),
    ];

    DashboardData {
        pilgrims_total: 1_245_300,
        arrivals_today: 18_420,
        open_alerts: 4,
        camp_occupancy: 0.87,
        arrivals: arrivals
            .into_iter()
            .map(|(flight, origin, eta, pilgrims, status)| Arrival {
                flight: flight.into(),
                origin: origin.into(),
                eta: eta.into(),
                pilgrims,
                status,
            })
            .collect(),
    }
}
