//! Gesimuleerd analyse-resultaat voor ontwikkeling en tests.

use crate::model::AnalysisResult;
use crate::parse::{ParseResult, parse_str};

/// Voorbeeldpayload met twee scenario's van 16 jaarlijkse tijdpunten.
pub const SIMULATED_ANALYSIS_JSON: &str = include_str!("../data/simulated_analysis.json");

pub fn simulated_analysis() -> ParseResult<AnalysisResult> {
    parse_str(SIMULATED_ANALYSIS_JSON)
}
