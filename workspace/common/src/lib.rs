//! Common transport-layer types shared between the CivicView frontend and its
//! backend REST API. These structs mirror the backend's response payloads so
//! the frontend can deserialize API responses without duplicating shapes, and
//! carry the client-enforced invariants (metric/status enums, comparison
//! selection bounds, period math) that the view layer builds on.

mod comparison;
mod district;
mod health;
mod history;
mod metric;
mod performance;
mod period;
mod selection;
mod status;

pub use comparison::{ComparisonResult, RankedDistrict};
pub use district::{District, DistrictDetail, DistrictRef};
pub use health::HealthStatus;
pub use history::{HistoricalSeries, PerformancePoint, RangePeriod};
pub use metric::Metric;
pub use performance::{ChangeSet, MetricValues, PerformanceSummary, Period, StatusSet};
pub use period::{format_period, history_window};
pub use selection::{ComparisonSelection, MAX_COMPARE_DISTRICTS, MIN_COMPARE_DISTRICTS};
pub use status::Status;
