use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::dto::SpeechRequest;

/// Audio objects are marked to expire 30 days after creation. The marker is
/// informational only; nothing deletes objects when it passes.
pub const TTL_SECONDS: i64 = 30 * 24 * 3600;

/// Source of the current time, injectable so key layout can be tested
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Give the request a fresh random identifier and its expiry marker.
pub fn assign_identity(request: &mut SpeechRequest, now: DateTime<Utc>) {
    request.id = Uuid::new_v4().to_string();
    request.ttl_epoch_seconds = (now + Duration::seconds(TTL_SECONDS)).timestamp();
}

/// Date-partitioned object key: `<year>/<MonthName>/<day>/<id>`
pub fn storage_key(id: &str, now: DateTime<Utc>) -> String {
    format!("{}/{}", now.format("%Y/%B/%-d"), id)
}
