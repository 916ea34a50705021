use chrono::{DurationRound, NaiveDateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `products` table. `id` is `None` until the gateway stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Current UTC time at the microsecond precision of a Postgres `TIMESTAMP`.
pub fn timestamp_now() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
}

impl Product {
    /// Refreshes `updated_at`, keeping it strictly after its previous value
    /// even when the clock has not moved since the last write.
    pub fn touch(&mut self, now: NaiveDateTime) {
        let floor = self.updated_at + TimeDelta::microseconds(1);
        self.updated_at = now.max(floor);
    }
}
