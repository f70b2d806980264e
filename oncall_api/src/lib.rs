//! Typed async client for the Grafana OnCall REST API.
//!
//! Every resource service is a thin wrapper over one shared pipeline in
//! [`Client`]: base URL resolution, header injection, query/JSON encoding,
//! client-side rate limiting, retry with backoff and error normalization.
//!
//! ```no_run
//! # async fn run() -> oncall_api::Result<()> {
//! use oncall_api::{Client, ListAlertGroupOptions, Query};
//!
//! let client = Client::new("https://oncall.example.com", "token")?;
//! let page = client
//!     .alert_groups()
//!     .list(&ListAlertGroupOptions::default().with_label("env:prod").with_page(2))
//!     .await?;
//! for group in &page.results {
//!     println!("{} {:?}", group.id, group.state);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod nullable;
mod query;
pub mod rate_limiter;
pub mod retry;
pub mod services;
pub mod types;
pub mod validation;

pub use self::client::{
    Client, ClientConfig, Request, RequestOptions, API_VERSION_PATH, DEFAULT_USER_AGENT,
    GRAFANA_URL_HEADER,
};
pub use self::errors::{
    normalize_error_body, ApiError, Error, ErrorShape, Result, UNKNOWN_ERROR_FORMAT,
};
pub use self::nullable::Nullable;
pub use self::query::{
    ListAlertGroupOptions, ListAlertOptions, ListCustomActionOptions, ListEscalationChainOptions,
    ListEscalationOptions, ListIntegrationOptions, ListOnCallShiftOptions, ListOptions,
    ListResolutionNoteOptions, ListRouteOptions, ListScheduleOptions, ListSlackChannelOptions,
    ListTeamOptions, ListUserGroupOptions, ListUserNotificationRuleOptions, ListUserOptions,
    ListWebhookOptions, Query, QueryPairs,
};
pub use self::rate_limiter::{RateLimit, RateLimiter};
pub use self::retry::RetryPolicy;
pub use self::validation::ValidationError;
