pub mod client;
pub mod service;

pub use crate::domain::model::{ListParams, Paginated, PreparedRequest};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
pub use client::{Client, DEFAULT_BASE_URL};
pub use service::{BaseService, Service};
