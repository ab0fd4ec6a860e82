//! Normalization, benchmarking and coaching analysis of Counter-Strike 2
//! player statistics.
//!
//! Everything here is a pure function of its inputs. Benchmark tiers and the
//! resource catalog are loaded once by the caller and passed by reference.

pub mod analyzer;
pub mod area;
pub mod benchmark;
pub mod compare;
pub mod cross;
pub mod deep_dive;
pub mod matches;
pub mod metric;
pub mod normalize;
pub mod profile;
pub mod report;
pub mod resource;
pub mod side;
pub mod tag;

pub use area::{Category, ImprovementArea, Issue, IssueKind, Standing};
pub use benchmark::{BenchmarkTable, BenchmarkTier};
pub use metric::{Endpoint, MetricKey};
pub use profile::{RawProfile, RawRatings, RawStats, Ratings};
pub use report::{build_report, ImprovementReport};
pub use resource::{ResourceCatalog, SelectedResource};
pub use side::Side;
