pub mod subscription_service;

pub use subscription_service::SubscriptionService;

use crate::domain::SubscriptionId;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Subscription not found: {0}")]
    NotFound(SubscriptionId),
    #[error("{0}")]
    Invalid(String),
}
