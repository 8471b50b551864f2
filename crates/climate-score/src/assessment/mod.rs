//! Location/decade assessments: data lookup, scoring, and the HTTP surface over both.

pub mod router;
pub mod service;

pub use router::{assessment_router, ScoreRequest};
pub use service::{AssessmentError, ClimateAssessmentService, LocationAssessment};
