//! Messages delivered to the event loop from input, timers and fetches.

use crate::data::dashboard::DashboardData;
use crate::data::documents::TravelDocument;
use crate::data::finance::Transaction;
use crate::data::fraud::FraudAlert;
use crate::data::packages::HajjPackage;
use crate::data::pilgrims::Pilgrim;
use crate::data::resources::Resource;
use crate::data::sentiment::TopicSentiment;
use crate::nav::Route;

#[derive(Debug)]
pub enum Msg {
    Navigate(Route),
    /// A row or entry was activated; the summary goes to the status bar.
    Inspect(String),
    /// A fraud alert row was activated; opens its detail panel.
    AlertSelected(FraudAlert),
    /// A package row was activated; opens its detail panel.
    PackageSelected(HajjPackage),
    DashboardLoaded(DashboardData),
    PilgrimsLoaded(Vec<Pilgrim>),
    TransactionsLoaded(Vec<Transaction>),
    FraudAlertsLoaded(Vec<FraudAlert>),
    DocumentsLoaded(Vec<TravelDocument>),
    ResourcesLoaded(Vec<Resource>),
    SentimentLoaded(Vec<TopicSentiment>),
    PackagesLoaded(Vec<HajjPackage>),
}
