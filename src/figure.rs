//! Chart Figures
//!
//! Turns filtered launch records into chart descriptions. Rendering, axis
//! scaling and default colors belong to Plotly.js on the page; this module
//! only fixes titles, grouping and the two color maps.
//!
//! [`PieChart`] and [`ScatterChart`] are the typed chart data.
//! [`Figure`] is the Plotly `{data, layout}` JSON shape sent to the browser.

use serde::Serialize;

use crate::data::{LaunchDataset, LaunchRecord, PayloadRange};
use crate::filter::{filter_by_site, filter_by_site_and_payload, outcome_counts, SiteSelection};

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";
pub const BOOSTER_LEGEND_LABEL: &str = "Booster Version Category";

/// Pie slice color for an outcome class
pub fn outcome_color(class: u8) -> Option<&'static str> {
    match class {
        0 => Some("red"),
        1 => Some("green"),
        _ => None,
    }
}

/// Scatter marker color for a booster category
///
/// Unmapped categories return `None` and get the chart library's palette.
pub fn booster_color(category: &str) -> Option<&'static str> {
    match category {
        "FT" => Some("blue"),
        "Block 5" => Some("orange"),
        _ => None,
    }
}

pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Success vs Failure for All Launch Sites".to_string(),
        SiteSelection::Site(name) => format!("Success vs Failure Launches at {}", name),
    }
}

pub fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Payload vs Success for All Launch Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs Success for {}", name),
    }
}

// ============================================
// PIE CHART
// ============================================

/// One outcome class and how many launches had it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub class: u8,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

/// Success/failure breakdown for a site selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Ordered by class value
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn build(dataset: &LaunchDataset, site: &SiteSelection) -> Self {
        let counts = outcome_counts(filter_by_site(dataset, site));

        Self {
            title: pie_title(site),
            slices: counts
                .into_iter()
                .map(|(class, count)| PieSlice {
                    class,
                    count,
                    color: outcome_color(class),
                })
                .collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn to_figure(&self) -> Figure {
        let trace = PieTrace {
            labels: self.slices.iter().map(|s| s.class).collect(),
            values: self.slices.iter().map(|s| s.count).collect(),
            marker: PieMarker {
                colors: self
                    .slices
                    .iter()
                    .map(|s| s.color.map(str::to_string))
                    .collect(),
            },
        };

        Figure {
            data: vec![Trace::Pie(trace)],
            layout: FigureLayout {
                title: Title::new(&self.title),
                xaxis: None,
                yaxis: None,
                legend: Some(Legend {
                    title: Title::new("class"),
                }),
            },
        }
    }
}

// ============================================
// SCATTER CHART
// ============================================

/// A launch placed on the payload/outcome plane
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            class: record.class,
            booster_version_category: record.booster_version_category.clone(),
        }
    }
}

/// Points sharing a booster category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    pub points: Vec<ScatterPoint>,
}

/// Payload vs outcome, colored by booster category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    /// One series per booster category, in first-appearance order
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn build(dataset: &LaunchDataset, site: &SiteSelection, range: PayloadRange) -> Self {
        let mut series: Vec<ScatterSeries> = Vec::new();

        for record in filter_by_site_and_payload(dataset, site, range) {
            let category = &record.booster_version_category;
            match series.iter().position(|s| s.category == *category) {
                Some(idx) => series[idx].points.push(record.into()),
                None => series.push(ScatterSeries {
                    category: category.clone(),
                    color: booster_color(category),
                    points: vec![record.into()],
                }),
            }
        }

        Self {
            title: scatter_title(site),
            series,
        }
    }

    /// Number of points across all series
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn to_figure(&self) -> Figure {
        let data = self
            .series
            .iter()
            .map(|s| {
                Trace::Scatter(ScatterTrace {
                    name: s.category.clone(),
                    mode: "markers",
                    x: s.points.iter().map(|p| p.payload_mass_kg).collect(),
                    y: s.points.iter().map(|p| p.class).collect(),
                    marker: s.color.map(|c| ScatterMarker {
                        color: c.to_string(),
                    }),
                })
            })
            .collect();

        Figure {
            data,
            layout: FigureLayout {
                title: Title::new(&self.title),
                xaxis: Some(Axis {
                    title: Title::new(PAYLOAD_AXIS_LABEL),
                }),
                yaxis: Some(Axis {
                    title: Title::new(OUTCOME_AXIS_LABEL),
                }),
                legend: Some(Legend {
                    title: Title::new(BOOSTER_LEGEND_LABEL),
                }),
            },
        }
    }
}

// ============================================
// PLOTLY FIGURE JSON
// ============================================

/// Plotly figure: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<u8>,
    pub values: Vec<usize>,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    /// `null` entries fall back to the default colorway
    pub colors: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<ScatterMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario() -> LaunchDataset {
        LaunchDataset::new(vec![
            LaunchRecord::new("A", 500.0, 1, "FT"),
            LaunchRecord::new("A", 9000.0, 0, "Block 5"),
            LaunchRecord::new("B", 3000.0, 1, "FT"),
            LaunchRecord::new("B", 4000.0, 0, "v1.1"),
        ])
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            pie_title(&SiteSelection::All),
            "Success vs Failure for All Launch Sites"
        );
        assert_eq!(
            pie_title(&SiteSelection::parse("KSC LC-39A")),
            "Success vs Failure Launches at KSC LC-39A"
        );
        assert_eq!(
            scatter_title(&SiteSelection::All),
            "Payload vs Success for All Launch Sites"
        );
        assert_eq!(
            scatter_title(&SiteSelection::parse("KSC LC-39A")),
            "Payload vs Success for KSC LC-39A"
        );
    }

    #[test]
    fn test_pie_chart_for_site() {
        let chart = PieChart::build(&scenario(), &SiteSelection::parse("A"));

        assert_eq!(chart.title, "Success vs Failure Launches at A");
        assert_eq!(
            chart.slices,
            vec![
                PieSlice { class: 0, count: 1, color: Some("red") },
                PieSlice { class: 1, count: 1, color: Some("green") },
            ]
        );
        assert_eq!(chart.total(), 2);
    }

    #[test]
    fn test_pie_chart_unknown_site_is_empty() {
        let chart = PieChart::build(&scenario(), &SiteSelection::parse("C"));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0);
    }

    #[test]
    fn test_pie_figure_json() {
        let chart = PieChart::build(&scenario(), &SiteSelection::All);
        let value = serde_json::to_value(chart.to_figure()).unwrap();

        assert_eq!(
            value["data"][0],
            json!({
                "type": "pie",
                "labels": [0, 1],
                "values": [2, 2],
                "marker": {"colors": ["red", "green"]}
            })
        );
        assert_eq!(
            value["layout"]["title"]["text"],
            "Success vs Failure for All Launch Sites"
        );
    }

    #[test]
    fn test_scatter_groups_by_category() {
        let chart = ScatterChart::build(
            &scenario(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );

        assert_eq!(chart.len(), 4);
        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, ["FT", "Block 5", "v1.1"]);

        assert_eq!(chart.series[0].color, Some("blue"));
        assert_eq!(chart.series[1].color, Some("orange"));
        assert_eq!(chart.series[2].color, None);

        let ft: Vec<f64> = chart.series[0].points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(ft, [500.0, 3000.0]);
    }

    #[test]
    fn test_scatter_empty_range() {
        let chart = ScatterChart::build(
            &scenario(),
            &SiteSelection::parse("B"),
            PayloadRange::new(0.0, 2000.0),
        );

        assert!(chart.is_empty());
        assert_eq!(chart.title, "Payload vs Success for B");
        assert!(chart.to_figure().data.is_empty());
    }

    #[test]
    fn test_scatter_figure_json() {
        let chart = ScatterChart::build(
            &scenario(),
            &SiteSelection::parse("B"),
            PayloadRange::new(0.0, 10000.0),
        );
        let value = serde_json::to_value(chart.to_figure()).unwrap();

        assert_eq!(
            value["data"][0],
            json!({
                "type": "scatter",
                "name": "FT",
                "mode": "markers",
                "x": [3000.0],
                "y": [1],
                "marker": {"color": "blue"}
            })
        );
        // unmapped category carries no color
        assert!(value["data"][1].get("marker").is_none());
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
        assert_eq!(value["layout"]["yaxis"]["title"]["text"], "Launch Outcome");
        assert_eq!(
            value["layout"]["legend"]["title"]["text"],
            "Booster Version Category"
        );
    }
}
