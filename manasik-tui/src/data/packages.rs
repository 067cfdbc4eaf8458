use minbar::widgets::BadgeVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageTier {
    Economy,
    Standard,
    Premium,
}

impl PackageTier {
    pub fn label(self) -> &'static str {
        match self {
            PackageTier::Economy => "Economy",
            PackageTier::Standard => "Standard",
            PackageTier::Premium => "Premium",
        }
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            PackageTier::Economy => BadgeVariant::Neutral,
            PackageTier::Standard => BadgeVariant::Info,
            PackageTier::Premium => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HajjPackage {
    pub name: String,
    pub operator: String,
    pub tier: PackageTier,
    pub price_sar: f64,
    pub seats_left: i64,
    pub rating: f64,
}

impl HajjPackage {
    pub fn summary(&self) -> String {
        format!(
            "{} by {} ({}) SAR {:.0}, {} seats left",
            self.name,
            self.operator,
            self.tier.label(),
            self.price_sar,
            self.seats_left
        )
    }
}

pub fn sample() -> Vec<HajjPackage> {
    let rows = [
        ("Safa Essentials", "Al-Safa Travel", PackageTier::Economy, 14_900.0, 112, 4.1),
        ("Marwa Classic", "Al-Safa Travel", PackageTier::Standard, 21_500.0, 64, 4.4),
        ("Haramain Select", "Baraka Tours", PackageTier::Premium, 38_200.0, 9, 4.8),
        ("Zamzam Saver", "Rihla Group", PackageTier::Economy, 13_750.0, 203, 3.9),
        ("Noor Deluxe", "Baraka Tours", PackageTier::Premium, 41_000.0, 0, 4.7),
        ("Qibla Comfort", "Rihla Group", PackageTier::Standard, 24_300.0, 38, 4.3),
        ("Mashair Direct", "Mashair Lines", PackageTier::Standard, 19_800.0, 87, 4.0),
    ];

    rows.into_iter()
        .map(
            |(name, operator, tier, price_sar, seats_left, rating)| HajjPackage {
                name: name.into(),
                operator: operator.into(),
                tier,
                price_sar,
                seats_left,
                rating,
            },
        )
        .collect()
}
