//! Projected financial impact time series.

use serde::Serialize;

/// The fixed projection horizon, in display order.
pub const PROJECTION_YEARS: [u16; 6] = [2025, 2030, 2035, 2040, 2045, 2050];

/// One point on the projection chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactPoint {
    pub year: u16,
    /// Profit impact, rounded to one decimal place.
    pub impact: f64,
}

/// An immutable projection: one point per projection year plus a label.
///
/// Built only by the calculator (or [`ImpactSeries::zeroed`] for an empty
/// chart); callers replace the whole series rather than editing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactSeries {
    points: Vec<ImpactPoint>,
    label: String,
}

impl ImpactSeries {
    pub(crate) fn new(points: Vec<ImpactPoint>, label: String) -> Self {
        Self { points, label }
    }

    /// All-zero series shown before the first simulation run.
    pub fn zeroed(label: impl Into<String>) -> Self {
        let points = PROJECTION_YEARS
            .iter()
            .map(|&year| ImpactPoint { year, impact: 0.0 })
            .collect();
        Self::new(points, label.into())
    }

    pub fn points(&self) -> &[ImpactPoint] {
        &self.points
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn years(&self) -> Vec<u16> {
        self.points.iter().map(|p| p.year).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.impact).collect()
    }

    /// Impact for a given year, if it is on the horizon.
    pub fn impact_for(&self, year: u16) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.impact)
    }

    /// The last point on the horizon.
    pub fn final_point(&self) -> Option<&ImpactPoint> {
        self.points.last()
    }
}
