#[derive(Debug, Clone, PartialEq)]
pub struct TopicSentiment {
    pub topic: String,
    pub mentions: i64,
    /// Share of positive mentions, 0..=1.
    pub positive: f64,
    /// Week-over-week change in positive share.
    pub delta: f64,
}

impl TopicSentiment {
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.0}% positive over {} mentions",
            self.topic,
            self.positive * 100.0,
            self.mentions
        )
    }
}

pub fn sample() -> Vec<TopicSentiment> {
    let rows = [
        ("Tawaf crowd flow", 18_240, 0.62, 0.04),
        ("Shuttle waiting times", 9_410, 0.38, -0.07),
        ("Tent city cooling", 7_880, 0.55, 0.02),
        ("Visa processing", 6_120, 0.71, 0.09),
        ("Food quality", 5_760, 0.66, -0.01),
        ("Mobile app guidance", 4_390, 0.79, 0.11),
        ("Medical response", 2_150, 0.83, 0.03),
    ];

    rows.into_iter()
        .map(|(topic, mentions, positive, delta)| TopicSentiment {
            topic: topic.into(),
            mentions,
            positive,
            delta,
        })
        .collect()
}
