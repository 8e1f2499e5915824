//! Dashboard Layout
//!
//! Declarative description of the page: an ordered list of components the
//! browser script renders top to bottom. Component ids here are the same ids
//! the callback registry listens on.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::data::{LaunchDataset, PayloadRange};
use crate::filter::{SiteSelection, ALL_SITES};

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const PIE_CHART: &str = "success-pie-chart";
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

/// A single page element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
        style: HeadingStyle,
    },
    LineBreak,
    Paragraph {
        text: String,
    },
    Dropdown {
        id: &'static str,
        options: Vec<DropdownOption>,
        value: SiteSelection,
        placeholder: String,
        searchable: bool,
    },
    RangeSlider {
        id: &'static str,
        min: f64,
        max: f64,
        step: f64,
        marks: BTreeMap<u32, String>,
        value: PayloadRange,
    },
    Graph {
        id: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// The full page description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub children: Vec<Component>,
}

impl DashboardLayout {
    /// Build the page for a loaded dataset
    ///
    /// The slider starts at the dataset's observed payload bounds even though
    /// its marks only label 0 and 10000. An empty dataset starts at the full
    /// slider span.
    pub fn build(dataset: &LaunchDataset) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(dataset.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let marks = BTreeMap::from([
            (SLIDER_MIN as u32, format!("{}", SLIDER_MIN as u32)),
            (SLIDER_MAX as u32, format!("{}", SLIDER_MAX as u32)),
        ]);

        let children = vec![
            Component::Heading {
                text: DASHBOARD_TITLE.to_string(),
                style: HeadingStyle {
                    text_align: "center".to_string(),
                    color: "#503D36".to_string(),
                    font_size: 40,
                },
            },
            Component::LineBreak,
            Component::Dropdown {
                id: SITE_DROPDOWN,
                options,
                value: SiteSelection::All,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Component::Graph { id: PIE_CHART },
            Component::LineBreak,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks,
                value: default_payload_range(dataset),
            },
            Component::Graph { id: SCATTER_CHART },
        ];

        Self {
            title: DASHBOARD_TITLE.to_string(),
            children,
        }
    }

    /// Find a component by id
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.children.iter().find(|c| c.id() == Some(id))
    }
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::RangeSlider { id, .. }
            | Component::Graph { id } => Some(*id),
            _ => None,
        }
    }
}

/// Initial slider selection
pub fn default_payload_range(dataset: &LaunchDataset) -> PayloadRange {
    dataset
        .payload_bounds()
        .unwrap_or_else(|| PayloadRange::new(SLIDER_MIN, SLIDER_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LaunchRecord;

    fn scenario() -> LaunchDataset {
        LaunchDataset::new(vec![
            LaunchRecord::new("A", 500.0, 1, "FT"),
            LaunchRecord::new("A", 9000.0, 0, "Block 5"),
            LaunchRecord::new("B", 3000.0, 1, "FT"),
        ])
    }

    #[test]
    fn test_slider_defaults_to_payload_bounds() {
        let layout = DashboardLayout::build(&scenario());

        match layout.component(PAYLOAD_SLIDER) {
            Some(Component::RangeSlider {
                min,
                max,
                step,
                marks,
                value,
                ..
            }) => {
                assert_eq!(*min, 0.0);
                assert_eq!(*max, 10000.0);
                assert_eq!(*step, 1000.0);
                assert_eq!(marks.len(), 2);
                assert_eq!(marks[&0], "0");
                assert_eq!(marks[&10000], "10000");
                assert_eq!(*value, PayloadRange::new(500.0, 9000.0));
            }
            other => panic!("expected range slider, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_slider_spans_full_range() {
        let layout = DashboardLayout::build(&LaunchDataset::default());

        match layout.component(PAYLOAD_SLIDER) {
            Some(Component::RangeSlider { value, .. }) => {
                assert_eq!(*value, PayloadRange::new(0.0, 10000.0));
            }
            other => panic!("expected range slider, got {:?}", other),
        }
    }

    #[test]
    fn test_dropdown_options() {
        let layout = DashboardLayout::build(&scenario());

        match layout.component(SITE_DROPDOWN) {
            Some(Component::Dropdown {
                options,
                value,
                searchable,
                ..
            }) => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, ["ALL", "A", "B"]);
                assert_eq!(options[0].label, "All Sites");
                assert_eq!(*value, SiteSelection::All);
                assert!(*searchable);
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_component_order() {
        let layout = DashboardLayout::build(&scenario());
        let ids: Vec<&str> = layout.children.iter().filter_map(|c| c.id()).collect();

        assert_eq!(ids, [SITE_DROPDOWN, PIE_CHART, PAYLOAD_SLIDER, SCATTER_CHART]);
    }

    #[test]
    fn test_layout_json_shape() {
        let value = serde_json::to_value(DashboardLayout::build(&scenario())).unwrap();

        assert_eq!(value["children"][0]["type"], "heading");
        assert_eq!(value["children"][0]["style"]["fontSize"], 40);
        assert_eq!(value["children"][2]["value"], "ALL");
        assert_eq!(value["children"][6]["marks"]["10000"], "10000");
        assert_eq!(value["children"][6]["value"][1], 9000.0);
    }
}
