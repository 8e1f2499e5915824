//! Reactive Callbacks
//!
//! Explicit mapping from page input components to the pure handlers that
//! redraw each chart. The page reports which inputs changed together with
//! the current value of every input; [`CallbackRegistry::dispatch`] runs
//! each callback that listens on a changed input and returns its figure.
//!
//! ```text
//! site-dropdown ──────┬──> success-pie-chart
//!                     └──> success-payload-scatter-chart
//! payload-slider ─────────> success-payload-scatter-chart
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::data::{LaunchDataset, PayloadRange};
use crate::figure::{Figure, PieChart, ScatterChart};
use crate::filter::SiteSelection;
use crate::layout::{PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN};

/// Callback dispatch errors
#[derive(Error, Debug, PartialEq)]
pub enum CallbackError {
    /// `changed` named a component no callback listens on
    #[error("Unknown input component: {0}")]
    UnknownInput(String),

    /// A triggered callback needs an input value the request did not carry
    #[error("Missing value for input '{input}' required by '{output}'")]
    MissingInput {
        input: &'static str,
        output: &'static str,
    },
}

/// Current values of the page inputs
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CallbackInputs {
    #[serde(rename = "site-dropdown", default)]
    pub site: Option<SiteSelection>,
    #[serde(rename = "payload-slider", default)]
    pub payload_range: Option<PayloadRange>,
}

impl CallbackInputs {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site: Some(site),
            payload_range: Some(payload_range),
        }
    }

    fn site(&self, output: &'static str) -> Result<&SiteSelection, CallbackError> {
        self.site.as_ref().ok_or(CallbackError::MissingInput {
            input: SITE_DROPDOWN,
            output,
        })
    }

    fn payload_range(&self, output: &'static str) -> Result<PayloadRange, CallbackError> {
        self.payload_range.ok_or(CallbackError::MissingInput {
            input: PAYLOAD_SLIDER,
            output,
        })
    }
}

/// Handler signature: stateless function of the dataset and current inputs
pub type Handler = fn(&LaunchDataset, &CallbackInputs) -> Result<Figure, CallbackError>;

/// One output component and the inputs that redraw it
#[derive(Clone)]
pub struct Callback {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
    pub handler: Handler,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

impl Callback {
    pub fn listens_on(&self, input: &str) -> bool {
        self.inputs.contains(&input)
    }
}

/// Registry of all callbacks on the page
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two chart callbacks of the launch dashboard
    pub fn dashboard() -> Self {
        Self::new()
            .register(Callback {
                output: PIE_CHART,
                inputs: &[SITE_DROPDOWN],
                handler: pie_chart,
            })
            .register(Callback {
                output: SCATTER_CHART,
                inputs: &[SITE_DROPDOWN, PAYLOAD_SLIDER],
                handler: scatter_chart,
            })
    }

    pub fn register(mut self, callback: Callback) -> Self {
        self.callbacks.push(callback);
        self
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Callbacks triggered by a change to any of `changed`
    ///
    /// An empty `changed` list triggers every callback (initial page load).
    pub fn triggered_by<S: AsRef<str>>(
        &self,
        changed: &[S],
    ) -> Result<Vec<&Callback>, CallbackError> {
        for input in changed {
            let input = input.as_ref();
            if !self.callbacks.iter().any(|c| c.listens_on(input)) {
                return Err(CallbackError::UnknownInput(input.to_string()));
            }
        }

        Ok(self
            .callbacks
            .iter()
            .filter(|c| changed.is_empty() || changed.iter().any(|i| c.listens_on(i.as_ref())))
            .collect())
    }

    /// Run every triggered callback and collect figures by output id
    pub fn dispatch<S: AsRef<str>>(
        &self,
        dataset: &LaunchDataset,
        changed: &[S],
        inputs: &CallbackInputs,
    ) -> Result<BTreeMap<&'static str, Figure>, CallbackError> {
        let mut outputs = BTreeMap::new();

        for callback in self.triggered_by(changed)? {
            let figure = (callback.handler)(dataset, inputs)?;
            tracing::debug!(
                output = callback.output,
                traces = figure.data.len(),
                "Callback evaluated"
            );
            outputs.insert(callback.output, figure);
        }

        Ok(outputs)
    }
}

/// Pie chart handler: outcome counts for the selected site
pub fn pie_chart(dataset: &LaunchDataset, inputs: &CallbackInputs) -> Result<Figure, CallbackError> {
    let site = inputs.site(PIE_CHART)?;
    Ok(PieChart::build(dataset, site).to_figure())
}

/// Scatter chart handler: payload vs outcome for the site and payload range
pub fn scatter_chart(
    dataset: &LaunchDataset,
    inputs: &CallbackInputs,
) -> Result<Figure, CallbackError> {
    let site = inputs.site(SCATTER_CHART)?;
    let range = inputs.payload_range(SCATTER_CHART)?;
    Ok(ScatterChart::build(dataset, site, range).to_figure())
}
