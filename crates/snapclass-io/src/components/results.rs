//! Results panel: predicted class, confidence, and the ranked
//! probability chart.

use std::rc::Rc;

use dioxus::prelude::*;
use snapclass_core::Prediction;

use crate::dom;

/// Props for the [`ResultsPanel`] component.
#[derive(Props, Clone)]
pub struct ResultsPanelProps {
    /// The prediction to render. Wrapped in `Rc` so re-renders compare
    /// by pointer instead of cloning the ranked list.
    prediction: Rc<Prediction>,
    /// Called when the user wants to classify another image.
    on_reset: EventHandler<()>,
}

impl PartialEq for ResultsPanelProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.prediction, &other.prediction)
    }
}

/// Renders a prediction: winning class, confidence to one decimal
/// place, and a bar chart of the top five class probabilities in
/// server-ranked order.
///
/// The panel scrolls itself into view when it appears.
#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    use_effect(|| {
        dom::scroll_into_view(dom::RESULTS_SECTION_ID);
    });

    let on_reset = props.on_reset;
    let prediction = &props.prediction;

    rsx! {
        section { id: dom::RESULTS_SECTION_ID, class: "panel results-panel",
            h2 { class: "results-heading", "Prediction" }

            p { class: "predicted-class", "{prediction.class}" }
            p { class: "confidence",
                "Confidence: "
                span { class: "confidence-value", "{prediction.confidence_text()}" }
            }

            div { class: "probability-bars",
                for row in prediction.top() {
                    div { key: "{row.class}", class: "probability-row",
                        div { class: "probability-header",
                            span { class: "probability-class", "{row.class}" }
                            span { class: "probability-value", "{row.probability_text()}" }
                        }
                        div { class: "probability-track",
                            // Raw unrounded percentage so the bar length
                            // is exact while the label stays rounded.
                            div {
                                class: "probability-fill",
                                style: "width: {row.bar_width()}",
                            }
                        }
                    }
                }
            }

            div { class: "panel-actions",
                button {
                    class: "button button-secondary",
                    onclick: move |_| on_reset.call(()),
                    "Try Another Image"
                }
            }
        }
    }
}
