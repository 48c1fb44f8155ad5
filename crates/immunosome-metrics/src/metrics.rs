use immunosome_core::error::SelectionError;
use immunosome_core::lookup::synergy_score;
use immunosome_core::selection::{SelectionOption, SelectionState};
use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};

pub const ALL_MODULES_LABEL: &str = "all";

/// Collectors for resolution passes, registered on a private registry so
/// several instances can coexist in one process.
pub struct ResolutionMetrics {
    registry: Registry,
    pub resolutions_total: IntCounterVec,
    pub invalid_selections_total: IntCounterVec,
    pub synergy_score: IntGaugeVec,
}

impl ResolutionMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let resolutions_total = IntCounterVec::new(
            Opts::new(
                "immunosome_resolutions_total",
                "Resolution passes per framework module",
            ),
            &["module"],
        )?;
        registry.register(Box::new(resolutions_total.clone()))?;

        let invalid_selections_total = IntCounterVec::new(
            Opts::new(
                "immunosome_invalid_selections_total",
                "Rejected raw selections per field",
            ),
            &["field"],
        )?;
        registry.register(Box::new(invalid_selections_total.clone()))?;

        let synergy_score = IntGaugeVec::new(
            Opts::new(
                "immunosome_synergy_score",
                "Synergy score reported for the last resolved knockout target",
            ),
            &["knockout_target"],
        )?;
        registry.register(Box::new(synergy_score.clone()))?;

        Ok(Self {
            registry,
            resolutions_total,
            invalid_selections_total,
            synergy_score,
        })
    }

    pub fn observe_resolution(&self, selection: &SelectionState, module: &str) {
        self.resolutions_total.with_label_values(&[module]).inc();
        let target = selection.knockout_target();
        self.synergy_score
            .with_label_values(&[target.slug()])
            .set(synergy_score(target).into());
    }

    pub fn observe_invalid(&self, error: &SelectionError) {
        self.invalid_selections_total
            .with_label_values(&[error.field().as_str()])
            .inc();
    }

    /// Prometheus text exposition of every collector in this registry.
    pub fn encode_text(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
