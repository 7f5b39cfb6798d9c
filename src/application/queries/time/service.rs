use std::sync::Arc;

use crate::application::ports::time::Clock;

pub struct TimeQueryService {
    pub(super) clock: Arc<dyn Clock>,
}

impl TimeQueryService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}
