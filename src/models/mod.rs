pub mod engagement;
pub mod engagement_input;
pub mod opinion;
pub mod opinion_input;
pub mod response;
pub mod service;
pub mod tracking_input;
pub mod user;
pub mod user_input;
pub mod validation;
pub mod worker;
pub mod worker_input;

pub use engagement::Engagement;
pub use engagement_input::CreateEngagementInput;
pub use opinion::Opinion;
pub use opinion_input::CreateOpinionInput;
pub use response::{CreatedResponse, MessageResponse};
pub use service::{SeedResponse, Service, ServiceList};
pub use tracking_input::{TrackingAck, TrackingPingInput};
pub use user::{User, UserEngagement};
pub use user_input::{CreateUserInput, LinkEngagementInput};
pub use worker::{Worker, WorkerSummary, WorkersByService};
pub use worker_input::CreateWorkerInput;
