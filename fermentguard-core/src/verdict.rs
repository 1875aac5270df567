//! Readiness verdicts
//!
//! A verdict carries the tri-state outcome, the pass flag of every criterion
//! that was checked (gating or not), and one reason per failing gate.

use crate::phase::FermentationPhase;

/// Tri-state readiness outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReadinessStatus {
    /// Every gating criterion passed
    Ready,
    /// Some gating criteria passed
    PartiallyReady,
    /// No gating criterion passed
    NotReady,
}

impl ReadinessStatus {
    /// Status from the number of passing gates out of `total`
    pub fn from_counts(passed: usize, total: usize) -> Self {
        if passed == total {
            ReadinessStatus::Ready
        } else if passed == 0 {
            ReadinessStatus::NotReady
        } else {
            ReadinessStatus::PartiallyReady
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ReadinessStatus::Ready => "Ready",
            ReadinessStatus::PartiallyReady => "Partially Ready",
            ReadinessStatus::NotReady => "Not Ready",
        }
    }

    /// Severity used for colored display
    pub const fn severity(&self) -> Severity {
        match self {
            ReadinessStatus::Ready => Severity::Success,
            ReadinessStatus::PartiallyReady => Severity::Warning,
            ReadinessStatus::NotReady => Severity::Error,
        }
    }

    /// Convenience check
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadinessStatus::Ready)
    }
}

impl core::fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Display severity of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Green
    Success,
    /// Amber
    Warning,
    /// Red
    Error,
}

impl Severity {
    /// Display color
    pub const fn color(&self) -> &'static str {
        match self {
            Severity::Success => "green",
            Severity::Warning => "orange",
            Severity::Error => "red",
        }
    }
}

/// Individual readiness criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// pH inside the standard window
    Ph,
    /// EC at or above the standard minimum
    Conductivity,
    /// Smell rating at or above the threshold
    Odor,
    /// Classifier label is a ready-looking class
    Visual,
}

/// Pass flags for every checked criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriteriaFlags {
    /// pH window check
    pub ph: bool,
    /// EC threshold check
    pub ec: bool,
    /// Odor threshold check; `None` when the strategy does not use odor
    pub odor: Option<bool>,
    /// Visual readiness check, always computed
    pub visual: bool,
}

impl CriteriaFlags {
    /// Flag for one criterion (`None` if it was not checked)
    pub fn get(&self, criterion: Criterion) -> Option<bool> {
        match criterion {
            Criterion::Ph => Some(self.ph),
            Criterion::Conductivity => Some(self.ec),
            Criterion::Odor => self.odor,
            Criterion::Visual => Some(self.visual),
        }
    }
}

/// Why a gating criterion failed
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reason {
    /// Failed criterion
    pub criterion: Criterion,
    /// Message for the operator
    pub message: String,
}

impl Reason {
    pub(crate) fn new(criterion: Criterion, message: String) -> Self {
        Self { criterion, message }
    }
}

/// Result of one readiness evaluation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verdict {
    /// Tri-state outcome
    pub status: ReadinessStatus,
    /// Fruit the sample was judged as (detected or selected)
    pub fruit: Option<String>,
    /// Informational phase (table-lookup strategy only)
    pub phase: Option<FermentationPhase>,
    /// Every checked criterion
    pub flags: CriteriaFlags,
    /// Criteria that took part in the Ready gate
    pub gates: Vec<Criterion>,
    /// One reason per failing gate, in gate order
    pub reasons: Vec<Reason>,
}

impl Verdict {
    /// Shortcut for `status.is_ready()`
    pub fn is_ready(&self) -> bool {
        self.status.is_ready()
    }

    /// Reason messages in order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.reasons.iter().map(|reason| reason.message.as_str())
    }

    /// Whether `criterion` gated this verdict
    pub fn is_gated_on(&self, criterion: Criterion) -> bool {
        self.gates.contains(&criterion)
    }
}
