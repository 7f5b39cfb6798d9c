mod current;
mod service;

pub use service::TimeQueryService;
