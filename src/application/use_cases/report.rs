// ============================================================
// REPORT USE CASE
// ============================================================
// Reload the dataset and derive the selected chart projection

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::domain::chart::ChartKind;
use crate::domain::error::Result;
use crate::domain::export::ExportRecord;
use crate::domain::figure::{Figure, Layout, Marker, Trace};
use crate::infrastructure::dataset::DatasetLoader;

/// Largest bubble diameter in pixels on the scatter projection
const BUBBLE_SIZE_MAX: f64 = 20.0;

const BAR_TITLE: &str = "Coffee Export Values by Country (USD)";
const SCATTER_TITLE: &str = "Coffee Exports: Volume vs Value";
const BOX_TITLE: &str = "Regional Coffee Export Value Distribution";

/// Finished report for one request: the figure plus the kind that produced it.
#[derive(Debug)]
pub struct ChartReport {
    pub kind: ChartKind,
    pub figure: Figure,
}

/// Report use case
pub struct ReportUseCase {
    loader: DatasetLoader,
}

impl ReportUseCase {
    pub fn new(loader: DatasetLoader) -> Self {
        Self { loader }
    }

    /// Build the report for one request.
    ///
    /// The dataset is read fresh on every call, so file edits show up on the
    /// next request. Read or parse failures abort the whole request.
    pub fn execute(&self, kind: ChartKind) -> Result<ChartReport> {
        let records = self.loader.load()?;
        let figure = build_figure(kind, &records);

        Ok(ChartReport { kind, figure })
    }
}

/// Derive the figure for the selected projection.
pub(crate) fn build_figure(kind: ChartKind, records: &[ExportRecord]) -> Figure {
    match kind {
        ChartKind::Bar => bar_figure(records),
        ChartKind::Scatter => scatter_figure(records),
        ChartKind::Box => box_figure(records),
    }
}

/// Bar chart: summed export value per country, one trace per region.
fn bar_figure(records: &[ExportRecord]) -> Figure {
    let totals = sum_value_by_country_region(records);

    // Regions keep their first-appearance order in the country-sorted totals
    let mut regions: IndexMap<String, (Vec<String>, Vec<f64>)> = IndexMap::new();
    for ((country, region), value) in totals {
        let series = regions.entry(region).or_default();
        series.0.push(country);
        series.1.push(value);
    }

    let data = regions
        .into_iter()
        .map(|(region, (x, y))| Trace::Bar { name: region, x, y })
        .collect();

    Figure::new(data, Layout::dark_report(BAR_TITLE))
}

/// Sum export value per (Country, Region) pair, ordered by key ascending.
fn sum_value_by_country_region(records: &[ExportRecord]) -> BTreeMap<(String, String), f64> {
    let mut totals = BTreeMap::new();

    for record in records {
        *totals
            .entry((record.country.clone(), record.region.clone()))
            .or_insert(0.0) += record.export_value_usd;
    }

    totals
}

/// Scatter chart: one bubble per dataset row, tons against value, bubble
/// area scaled by tons, one trace per region.
fn scatter_figure(records: &[ExportRecord]) -> Figure {
    let sizeref = bubble_sizeref(records);

    let mut regions: IndexMap<String, ScatterSeries> = IndexMap::new();
    for record in records {
        let series = regions.entry(record.region.clone()).or_default();
        series.x.push(record.export_tons);
        series.y.push(record.export_value_usd);
        series.hovertext.push(record.country.clone());
        series.size.push(record.export_tons);
    }

    let data = regions
        .into_iter()
        .map(|(region, series)| Trace::Scatter {
            name: region,
            mode: "markers".to_string(),
            x: series.x,
            y: series.y,
            hovertext: series.hovertext,
            marker: Marker {
                size: series.size,
                sizemode: "area".to_string(),
                sizeref,
            },
        })
        .collect();

    Figure::new(data, Layout::dark_report(SCATTER_TITLE))
}

#[derive(Debug, Default)]
struct ScatterSeries {
    x: Vec<f64>,
    y: Vec<f64>,
    hovertext: Vec<String>,
    size: Vec<f64>,
}

/// Area-mode size reference that puts the largest bubble at the pixel cap.
fn bubble_sizeref(records: &[ExportRecord]) -> f64 {
    let max_tons = records
        .iter()
        .map(|record| record.export_tons)
        .fold(0.0_f64, f64::max);

    if max_tons > 0.0 {
        2.0 * max_tons / (BUBBLE_SIZE_MAX * BUBBLE_SIZE_MAX)
    } else {
        1.0
    }
}

/// Box chart: export value distribution per region, one trace per region in
/// first-appearance order.
fn box_figure(records: &[ExportRecord]) -> Figure {
    let mut regions: IndexMap<String, Vec<f64>> = IndexMap::new();
    for record in records {
        regions
            .entry(record.region.clone())
            .or_default()
            .push(record.export_value_usd);
    }

    let data = regions
        .into_iter()
        .map(|(region, y)| {
            let x = vec![region.clone(); y.len()];
            Trace::Box { name: region, x, y }
        })
        .collect();

    Figure::new(data, Layout::dark_report(BOX_TITLE))
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::process;

    use super::*;

    fn record(country: &str, region: &str, tons: f64, value: f64) -> ExportRecord {
        ExportRecord {
            country: country.to_string(),
            region: region.to_string(),
            export_tons: tons,
            export_value_usd: value,
        }
    }

    fn sample_records() -> Vec<ExportRecord> {
        vec![
            record("Brazil", "South America", 120.0, 300.0),
            record("Vietnam", "Asia", 250.0, 400.0),
            record("Brazil", "South America", 80.0, 200.0),
            record("Colombia", "South America", 90.0, 250.0),
            record("Ethiopia", "Africa", 60.0, 150.0),
        ]
    }

    #[test]
    fn test_bar_sums_value_per_country_region_pair() {
        let figure = build_figure(ChartKind::Bar, &sample_records());

        let mut bars = Vec::new();
        for trace in &figure.data {
            match trace {
                Trace::Bar { x, y, .. } => {
                    bars.extend(x.iter().cloned().zip(y.iter().cloned()));
                }
                other => panic!("expected bar trace, got {:?}", other),
            }
        }

        assert_eq!(bars.len(), 4);
        assert!(bars.contains(&("Brazil".to_string(), 500.0)));
        assert!(bars.contains(&("Vietnam".to_string(), 400.0)));
        assert!(bars.contains(&("Colombia".to_string(), 250.0)));
        assert!(bars.contains(&("Ethiopia".to_string(), 150.0)));
        assert_eq!(figure.layout.title.text, "Coffee Export Values by Country (USD)");
    }

    #[test]
    fn test_bar_groups_countries_by_region() {
        let figure = build_figure(ChartKind::Bar, &sample_records());

        // Totals sort by country, so regions first appear in that order
        let names: Vec<&str> = figure.data.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["South America", "Africa", "Asia"]);

        match &figure.data[0] {
            Trace::Bar { x, y, .. } => {
                assert_eq!(x, &vec!["Brazil".to_string(), "Colombia".to_string()]);
                assert_eq!(y, &vec![500.0, 250.0]);
            }
            other => panic!("expected bar trace, got {:?}", other),
        }
    }

    #[test]
    fn test_scatter_emits_one_point_per_row() {
        let records = sample_records();
        let figure = build_figure(ChartKind::Scatter, &records);

        let total: usize = figure.data.iter().map(|t| t.point_count()).sum();
        assert_eq!(total, records.len());

        let names: Vec<&str> = figure.data.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["South America", "Asia", "Africa"]);
        assert_eq!(figure.layout.title.text, "Coffee Exports: Volume vs Value");
    }

    #[test]
    fn test_scatter_bubbles_scale_by_tons() {
        let figure = build_figure(ChartKind::Scatter, &sample_records());

        // Largest volume is 250 tons, so sizeref = 2 * 250 / 20^2
        let expected_sizeref = 1.25;

        for trace in &figure.data {
            match trace {
                Trace::Scatter {
                    mode,
                    x,
                    hovertext,
                    marker,
                    ..
                } => {
                    assert_eq!(mode, "markers");
                    assert_eq!(&marker.size, x);
                    assert_eq!(marker.sizemode, "area");
                    assert_eq!(marker.sizeref, expected_sizeref);
                    assert_eq!(hovertext.len(), x.len());
                }
                other => panic!("expected scatter trace, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_scatter_hover_labels_are_countries() {
        let figure = build_figure(ChartKind::Scatter, &sample_records());

        match &figure.data[0] {
            Trace::Scatter { hovertext, .. } => {
                assert_eq!(
                    hovertext,
                    &vec![
                        "Brazil".to_string(),
                        "Brazil".to_string(),
                        "Colombia".to_string()
                    ]
                );
            }
            other => panic!("expected scatter trace, got {:?}", other),
        }
    }

    #[test]
    fn test_box_groups_values_by_region() {
        let figure = build_figure(ChartKind::Box, &sample_records());

        let names: Vec<&str> = figure.data.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["South America", "Asia", "Africa"]);

        match &figure.data[0] {
            Trace::Box { x, y, .. } => {
                assert_eq!(y, &vec![300.0, 200.0, 250.0]);
                assert_eq!(x, &vec!["South America".to_string(); 3]);
            }
            other => panic!("expected box trace, got {:?}", other),
        }
        assert_eq!(
            figure.layout.title.text,
            "Regional Coffee Export Value Distribution"
        );
    }

    #[test]
    fn test_empty_dataset_yields_empty_figures() {
        for kind in [ChartKind::Bar, ChartKind::Scatter, ChartKind::Box] {
            let figure = build_figure(kind, &[]);
            assert!(figure.data.is_empty());
            assert!(!figure.layout.title.text.is_empty());
        }
    }

    #[test]
    fn test_round_trip_preserves_kind_and_cardinality() {
        let records = sample_records();

        for kind in [ChartKind::Bar, ChartKind::Scatter, ChartKind::Box] {
            let figure = build_figure(kind, &records);
            let parsed: Figure =
                serde_json::from_str(&figure.to_json().unwrap()).unwrap();

            assert_eq!(parsed.data.len(), figure.data.len());
            for (parsed_trace, trace) in parsed.data.iter().zip(figure.data.iter()) {
                assert_eq!(parsed_trace.point_count(), trace.point_count());
                assert_eq!(
                    std::mem::discriminant(parsed_trace),
                    std::mem::discriminant(trace)
                );
            }
        }
    }

    #[test]
    fn test_execute_reads_dataset_from_disk() {
        let path = env::temp_dir().join(format!("beanboard-execute-{}.csv", process::id()));
        fs::write(
            &path,
            "Country,Region,Export_Tons,Export_Value_USD\n\
             Brazil,South America,120,300\n\
             Vietnam,Asia,250,400",
        )
        .unwrap();

        let use_case = ReportUseCase::new(DatasetLoader::new(path.clone()));
        let report = use_case.execute(ChartKind::Bar).unwrap();

        assert_eq!(report.kind, ChartKind::Bar);
        assert_eq!(report.figure.data.len(), 2);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_execute_fails_when_dataset_is_missing() {
        let loader = DatasetLoader::new(env::temp_dir().join("beanboard-absent.csv"));
        let use_case = ReportUseCase::new(loader);

        assert!(use_case.execute(ChartKind::Box).is_err());
    }
}
