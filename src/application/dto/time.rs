use crate::domain::time::TimeSnapshot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeSnapshotDto {
    /// Server-local calendar date, `YYYY-MM-DD`.
    #[schema(example = "2024-03-01")]
    pub current_date: String,
    /// Server-local wall-clock time, `HH:MM:SS` (24-hour).
    #[schema(example = "23:59:59")]
    pub current_time: String,
}

impl From<TimeSnapshot> for TimeSnapshotDto {
    fn from(snapshot: TimeSnapshot) -> Self {
        let (current_date, current_time) = snapshot.into_parts();
        Self {
            current_date,
            current_time,
        }
    }
}
