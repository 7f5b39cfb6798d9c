// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::{ports::ClockPort, queries::time::TimeQueryService};

pub struct ApplicationServices {
    pub time_queries: Arc<TimeQueryService>,
}

impl ApplicationServices {
    pub fn new(clock: Arc<ClockPort>) -> Self {
        let time_queries = Arc::new(TimeQueryService::new(Arc::clone(&clock)));

        Self { time_queries }
    }
}
