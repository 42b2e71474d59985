use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event open for sign-up. Seeded administratively; read-only to the
/// service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: i32,
    name: String,
    description: String,
    image_url: String,
    event_date: NaiveDate,
}

impl Event {
    pub fn new(
        id: i32,
        name: String,
        description: String,
        image_url: String,
        event_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            description,
            image_url,
            event_date,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
    pub fn event_date(&self) -> NaiveDate {
        self.event_date
    }
}

/// An event together with its live registration count, as returned by the
/// listing query. A snapshot, not a live feed.
#[derive(Debug, Clone)]
pub struct EventSummary {
    pub event: Event,
    pub registration_count: i64,
}
