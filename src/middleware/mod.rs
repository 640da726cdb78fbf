pub mod admin_key;
pub mod metrics;
pub mod request_id;

pub use admin_key::{require_admin_key, ADMIN_KEY_HEADER};
pub use self::metrics::metrics_middleware;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
