//! Omzetting van analyse-data naar render-toestand voor scène en grafiek.

pub mod plan;
pub mod projector;
pub mod scene;
pub mod severity;
pub mod timeline;
pub mod view_state;

pub use plan::{TreatmentItem, TreatmentPlanSummary};
pub use projector::{ProjectionError, ProjectionMap, RegionProjection, project};
pub use scene::{RegionPlacement, placements};
pub use severity::{HslColor, severity_color};
pub use timeline::{SeriesError, TimelineSeries, build_series};
pub use view_state::{ViewState, project_view, timeline_for};
