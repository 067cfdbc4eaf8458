//! Domain records and their mock feeds.
//!
//! Every view gets its rows through [`spawn_fetch`], which simulates the
//! latency of the upstream services so loading states are exercised the
//! same way they would be in production.

pub mod dashboard;
pub mod documents;
pub mod finance;
pub mod fraud;
pub mod packages;
pub mod pilgrims;
pub mod resources;
pub mod sentiment;

use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc::UnboundedSender;

use crate::msg::Msg;

/// Produce a dataset on a background task after a short randomized delay
/// and deliver it to the event loop as a message.
pub fn spawn_fetch<T, F>(tx: UnboundedSender<Msg>, make: F, wrap: fn(T) -> Msg)
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::spawn(async move {
        let delay = rand::thread_rng().gen_range(350..=900);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if tx.send(wrap(make())).is_err() {
            log::debug!("fetch result dropped, event loop already gone");
        }
    });
}
