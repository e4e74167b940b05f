pub mod fetch;
pub mod http_client;
pub mod provider;
pub mod queries;
pub mod urls;
mod web_client;

pub use fetch::{fetch_json, take_field};
pub use http_client::create_http_client_with_timeout;
pub use provider::NhlClient;
pub use queries::{GoalieStatsQuery, SkaterStatsQuery, TeamSummaryQuery, season_range_cayenne_exp};
pub use urls::*;
pub use web_client::HttpNhlClient;
