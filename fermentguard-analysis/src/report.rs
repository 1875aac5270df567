//! Display Report
//!
//! Everything the dashboard shows after an analysis, already formatted:
//! headline, colored status and phase badges, the metric tiles and the
//! reason list. Readings use two decimals (`4.00`, `6.50 mS/cm`) and
//! confidence is a one-decimal percentage.
//!
//! [`StandardsReference`] is the reference table shown under the results,
//! plus the EC minimums as chart bars.

use fermentguard_core::{ChemistryInput, Classification, Severity, StandardsTable, Verdict};
use serde::Serialize;

/// Text with a display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Label
    pub text: String,
    /// Color name understood by the presentation layer
    pub color: &'static str,
}

/// Metric tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    /// Fruit detected by the classifier
    pub fruit: String,
    /// Measured pH, two decimals
    pub ph: String,
    /// Measured EC with unit, two decimals
    pub ec: String,
    /// Classifier confidence as a percentage
    pub confidence: String,
}

/// Formatted result of one successful analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// "Detected: <fruit>"
    pub headline: String,
    /// Ready / Partially Ready / Not Ready
    pub status: Badge,
    /// Severity behind the status color
    pub severity: Severity,
    /// Fermentation phase, when the strategy computes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Badge>,
    /// Metric tiles
    pub metrics: MetricsSummary,
    /// One line per failing criterion
    pub reasons: Vec<String>,
}

impl Report {
    /// Format a verdict for display
    pub fn new(classification: &Classification, chemistry: &ChemistryInput, verdict: &Verdict) -> Self {
        let fruit = verdict.fruit.as_deref().unwrap_or(&classification.label);
        let severity = verdict.status.severity();

        Self {
            headline: format!("Detected: {fruit}"),
            status: Badge {
                text: verdict.status.name().to_string(),
                color: severity.color(),
            },
            severity,
            phase: verdict.phase.map(|phase| Badge {
                text: phase.name().to_string(),
                color: phase.color(),
            }),
            metrics: MetricsSummary {
                fruit: classification.label.clone(),
                ph: format!("{:.2}", chemistry.ph()),
                ec: format!("{:.2} mS/cm", chemistry.ec()),
                confidence: format!("{:.1}%", classification.confidence_percent()),
            },
            reasons: verdict.messages().map(str::to_string).collect(),
        }
    }

    /// JSON for the presentation layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One formatted row of the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardsRow {
    /// Fruit name
    pub fruit: String,
    /// pH minimum
    pub ph_min: String,
    /// pH maximum
    pub ph_max: String,
    /// EC minimum in mS/cm
    pub ec_min: String,
    /// EC maximum in mS/cm, if capped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec_max: Option<String>,
}

/// One bar of the EC chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcBar {
    /// Fruit name
    pub fruit: String,
    /// Minimum EC in mS/cm
    pub ec_min: f32,
}

/// Reference table view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardsReference {
    /// Column headings
    pub columns: Vec<&'static str>,
    /// Rows in table order
    pub rows: Vec<StandardsRow>,
    /// EC minimum per fruit
    pub ec_bars: Vec<EcBar>,
}

impl StandardsReference {
    /// Format every standard in `table`
    pub fn from_table(table: &StandardsTable) -> Self {
        let mut columns = vec!["Fruit", "pH Min", "pH Max", "EC Min (mS/cm)"];
        if table.iter().any(|s| s.ec_max().is_some()) {
            columns.push("EC Max (mS/cm)");
        }

        let rows = table
            .iter()
            .map(|s| StandardsRow {
                fruit: s.fruit().to_string(),
                ph_min: format!("{:.2}", s.ph_min()),
                ph_max: format!("{:.2}", s.ph_max()),
                ec_min: format!("{:.2}", s.ec_min()),
                ec_max: s.ec_max().map(|max| format!("{max:.2}")),
            })
            .collect();

        let ec_bars = table
            .iter()
            .map(|s| EcBar {
                fruit: s.fruit().to_string(),
                ec_min: s.ec_min(),
            })
            .collect();

        Self { columns, rows, ec_bars }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fermentguard_core::{Evaluator, OdorScore};

    #[test]
    fn formats_metrics_and_badges() {
        let evaluator = Evaluator::sample();
        let classification = Classification::new("Banana", 0, 0.8734);
        let chemistry = ChemistryInput::new(4.0, 6.5).unwrap().with_odor(OdorScore::new(5).unwrap());
        let verdict = evaluator.evaluate(&classification, &chemistry).unwrap();

        let report = Report::new(&classification, &chemistry, &verdict);
        assert_eq!(report.headline, "Detected: Banana");
        assert_eq!(report.status, Badge { text: "Ready".into(), color: "green" });
        assert_eq!(report.metrics.ph, "4.00");
        assert_eq!(report.metrics.ec, "6.50 mS/cm");
        assert_eq!(report.metrics.confidence, "87.3%");
        assert_eq!(report.phase, Some(Badge { text: "Active Phase".into(), color: "orange" }));
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn failing_reasons_are_listed() {
        let evaluator = Evaluator::sample();
        let classification = Classification::new("Papaya", 1, 0.6);
        let chemistry = ChemistryInput::new(4.4, 1.0).unwrap().with_odor(OdorScore::new(2).unwrap());
        let verdict = evaluator.evaluate(&classification, &chemistry).unwrap();

        let report = Report::new(&classification, &chemistry, &verdict);
        assert_eq!(report.status.color, "red");
        assert_eq!(report.reasons.len(), 3);
        assert!(report.reasons[0].starts_with("pH 4.40"));
    }

    #[test]
    fn reference_table_uses_two_decimals() {
        let reference = StandardsReference::from_table(&StandardsTable::sample());
        assert_eq!(reference.columns.len(), 4);
        assert_eq!(
            reference.rows[3],
            StandardsRow {
                fruit: "Pineapple".into(),
                ph_min: "3.00".into(),
                ph_max: "3.50".into(),
                ec_min: "3.50".into(),
                ec_max: None,
            }
        );
        assert_eq!(reference.ec_bars.len(), 5);
        assert_eq!(reference.ec_bars[4].ec_min, 2.5);
    }
}
