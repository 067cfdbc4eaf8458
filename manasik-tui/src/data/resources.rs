#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Water,
    Meals,
    Tents,
    Medical,
    Transport,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Water => "Water",
            ResourceKind::Meals => "Meals",
            ResourceKind::Tents => "Tents",
            ResourceKind::Medical => "Medical",
            ResourceKind::Transport => "Transport",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub site: String,
    pub kind: ResourceKind,
    pub capacity: i64,
    pub in_use: i64,
}

impl Resource {
    /// Share of capacity currently in use, 0..=1.
    pub fn utilization(&self) -> f64 {
        if self.capacity <= 0 {
            return 0.0;
        }
        (self.in_use as f64 / self.capacity as f64).clamp(0.0, 1.0)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} {} at {:.0}% ({} of {})",
            self.site,
            self.kind.label(),
            self.utilization() * 100.0,
            self.in_use,
            self.capacity
        )
    }
}

pub fn sample() -> Vec<Resource> {
    let rows = [
        ("Mina camp A", ResourceKind::Tents, 48_000, 45_300),
        ("Mina camp B", ResourceKind::Tents, 52_000, 39_800),
        ("Arafat plain", ResourceKind::Water, 900_000, 612_000),
        ("Muzdalifah", ResourceKind::Transport, 3_200, 2_950),
        ("Haram north gate", ResourceKind::Medical, 420, 118),
        ("Mina kitchens", ResourceKind::Meals, 250_000, 241_000),
        ("Jamarat route", ResourceKind::Water, 150_000, 88_500),
    ];

    rows.into_iter()
        .map(|(site, kind, capacity, in_use)| Resource {
            site: site.into(),
            kind,
            capacity,
            in_use,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_handles_zero_capacity() {
        let r = Resource {
            site: "empty".into(),
            kind: ResourceKind::Water,
            capacity: 0,
            in_use: 10,
        };
        assert_eq!(r.utilization(), 0.0);
    }
}
