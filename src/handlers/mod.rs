pub mod admin_handler;
pub mod debug;
pub mod engagements_handler;
pub mod health;
pub mod metrics;
pub mod opinions_handler;
pub mod services_handler;
pub mod tracking_handler;
pub mod users_handler;
pub mod workers_handler;

pub use debug::debug_handler;
pub use health::health_check;
pub use self::metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
