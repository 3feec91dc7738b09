//! Reactive callback bindings
//!
//! The declarative wiring between input widgets and chart regions. Each
//! [`Binding`] subscribes a handler to one or more inputs and targets one
//! output; the [`CallbackRegistry`] dispatches an input-change event to
//! every binding subscribed to the changed input and collects the
//! recomputed figures.
//!
//! Handlers are pure functions of the shared dataset and the full
//! [`InputValues`] snapshot, so dispatch order carries no state and
//! re-dispatching the same event is idempotent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::charts::{payload_scatter, success_pie, Figure};
use crate::dataset::{Dataset, PayloadRange, SiteSelection};

/// Identifier of an input widget on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl InputId {
    /// The element id used on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            InputId::SiteDropdown => "site-dropdown",
            InputId::PayloadSlider => "payload-slider",
        }
    }
}

/// Identifier of a chart region on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPie,
    #[serde(rename = "success-payload-scatter-chart")]
    PayloadScatter,
}

impl OutputId {
    /// The element id used on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::SuccessPie => "success-pie-chart",
            OutputId::PayloadScatter => "success-payload-scatter-chart",
        }
    }
}

/// Snapshot of every input widget's current value
///
/// The page sends the full snapshot with each change event, so handlers
/// never have to remember prior values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValues {
    /// Current dropdown selection
    pub site: SiteSelection,
    /// Current slider interval, kilograms
    pub payload: PayloadRange,
}

/// Handler signature: full input snapshot in, one figure out
type Handler = Box<dyn Fn(&Dataset, &InputValues) -> Figure + Send + Sync>;

/// One declarative binding: inputs -> handler -> output
struct Binding {
    inputs: Vec<InputId>,
    output: OutputId,
    handler: Handler,
}

impl Binding {
    fn subscribes_to(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

/// Registry of callback bindings over a shared dataset
///
/// Bindings fire in registration order. Dispatch borrows the dataset
/// read-only; there is no interior mutability anywhere in the chain.
pub struct CallbackRegistry {
    dataset: Arc<Dataset>,
    bindings: Vec<Binding>,
}

impl CallbackRegistry {
    /// Create an empty registry over a dataset
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            bindings: Vec::new(),
        }
    }

    /// Create a registry with the dashboard's two standard bindings:
    /// the success pie on the dropdown, and the payload scatter on the
    /// dropdown plus the slider.
    pub fn with_default_bindings(dataset: Arc<Dataset>) -> Self {
        let mut registry = Self::new(dataset);

        registry.bind(
            vec![InputId::SiteDropdown],
            OutputId::SuccessPie,
            |dataset, values| Figure::Pie(success_pie(dataset, &values.site)),
        );

        registry.bind(
            vec![InputId::SiteDropdown, InputId::PayloadSlider],
            OutputId::PayloadScatter,
            |dataset, values| {
                Figure::Scatter(payload_scatter(dataset, &values.site, &values.payload))
            },
        );

        registry
    }

    /// Register a binding from `inputs` to `output`
    pub fn bind<F>(&mut self, inputs: Vec<InputId>, output: OutputId, handler: F)
    where
        F: Fn(&Dataset, &InputValues) -> Figure + Send + Sync + 'static,
    {
        self.bindings.push(Binding {
            inputs,
            output,
            handler: Box::new(handler),
        });
    }

    /// Dispatch one input-change event.
    ///
    /// Runs every binding subscribed to `changed` against the current
    /// snapshot and returns the recomputed figures in registration order.
    pub fn dispatch(&self, changed: InputId, values: &InputValues) -> Vec<(OutputId, Figure)> {
        self.bindings
            .iter()
            .filter(|b| b.subscribes_to(changed))
            .map(|b| (b.output, (b.handler)(&self.dataset, values)))
            .collect()
    }

    /// Run every binding regardless of subscription, for the initial
    /// page render.
    pub fn render_all(&self, values: &InputValues) -> Vec<(OutputId, Figure)> {
        self.bindings
            .iter()
            .map(|b| (b.output, (b.handler)(&self.dataset, values)))
            .collect()
    }

    /// Outputs that would be recomputed for a change to `input`
    pub fn outputs_for(&self, input: InputId) -> Vec<OutputId> {
        self.bindings
            .iter()
            .filter(|b| b.subscribes_to(input))
            .map(|b| b.output)
            .collect()
    }

    /// Number of registered bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The dataset this registry dispatches over
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::model::tests::sample_dataset;

    fn registry() -> CallbackRegistry {
        CallbackRegistry::with_default_bindings(Arc::new(sample_dataset()))
    }

    fn values(site: SiteSelection) -> InputValues {
        InputValues {
            site,
            payload: PayloadRange::new(0.0, 10_000.0),
        }
    }

    #[test]
    fn test_dropdown_change_updates_both_charts() {
        let registry = registry();
        let updated = registry.dispatch(InputId::SiteDropdown, &values(SiteSelection::All));

        let outputs: Vec<_> = updated.iter().map(|(id, _)| *id).collect();
        assert_eq!(outputs, vec![OutputId::SuccessPie, OutputId::PayloadScatter]);
    }

    #[test]
    fn test_slider_change_updates_scatter_only() {
        let registry = registry();
        let updated = registry.dispatch(InputId::PayloadSlider, &values(SiteSelection::All));

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, OutputId::PayloadScatter);
        assert!(matches!(updated[0].1, Figure::Scatter(_)));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let registry = registry();
        let snapshot = values(SiteSelection::Site("KSC LC-39A".to_string()));

        let first = registry.dispatch(InputId::SiteDropdown, &snapshot);
        let second = registry.dispatch(InputId::SiteDropdown, &snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_all_covers_every_output() {
        let registry = registry();
        let rendered = registry.render_all(&values(SiteSelection::All));

        assert_eq!(rendered.len(), 2);
        assert!(matches!(rendered[0].1, Figure::Pie(_)));
        assert!(matches!(rendered[1].1, Figure::Scatter(_)));
    }

    #[test]
    fn test_outputs_for_subscriptions() {
        let registry = registry();

        assert_eq!(
            registry.outputs_for(InputId::SiteDropdown),
            vec![OutputId::SuccessPie, OutputId::PayloadScatter]
        );
        assert_eq!(
            registry.outputs_for(InputId::PayloadSlider),
            vec![OutputId::PayloadScatter]
        );
    }

    #[test]
    fn test_input_output_wire_names() {
        assert_eq!(InputId::SiteDropdown.as_str(), "site-dropdown");
        assert_eq!(
            serde_json::to_string(&OutputId::PayloadScatter).unwrap(),
            "\"success-payload-scatter-chart\""
        );
    }
}
