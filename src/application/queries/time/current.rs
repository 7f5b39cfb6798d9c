use super::TimeQueryService;
use crate::{
    application::{dto::TimeSnapshotDto, error::ApplicationResult},
    domain::time::TimeSnapshot,
};

impl TimeQueryService {
    /// Read the clock once and render the reading as date and time.
    pub fn current_time(&self) -> ApplicationResult<TimeSnapshotDto> {
        let instant = self.clock.now()?;
        Ok(TimeSnapshot::from_instant(&instant).into())
    }
}
