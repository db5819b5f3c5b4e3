use super::*;
use crate::chart::{LineSeries, Series};
use crate::output::svg::{ChartColor, LineStyle};

fn populated(title: &str) -> Chart {
    let mut chart = Chart::new(title);
    chart.add_series(Series::Line(LineSeries {
        label: "dn/dy".to_string(),
        color: ChartColor::hex("#1f77b4"),
        style: LineStyle::Solid,
        points: vec![(0.0, 1.0), (1.0, 2.0)],
    }));
    chart
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn new_document_has_header_and_no_pages() {
    let doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    assert_eq!(doc.page_count(), 0);
    assert!(!doc.is_closed());
    assert_eq!(doc.path(), Path::new("<memory>"));
}

#[test]
fn finalize_increments_page_count_and_resets_chart() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    let mut chart = populated("first");

    let number = doc.finalize_page(&mut chart).unwrap();

    assert_eq!(number, 1);
    assert_eq!(doc.page_count(), 1);
    assert_eq!(chart.state(), PageState::Empty);
    assert!(chart.title.is_empty());
}

#[test]
fn pages_are_numbered_in_order() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    let mut chart = populated("one");
    doc.finalize_page(&mut chart).unwrap();
    let mut chart = populated("two");
    assert_eq!(doc.finalize_page(&mut chart).unwrap(), 2);

    let pages = doc.pages();
    assert_eq!(pages[0].title, "one");
    assert_eq!(pages[1].number, 2);
    assert_eq!(pages[1].series, vec!["dn/dy".to_string()]);
}

#[test]
fn empty_chart_cannot_be_finalized() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    let mut chart = Chart::new("blank");

    let err = doc.finalize_page(&mut chart).unwrap_err();

    assert!(matches!(err, PlotError::EmptyPage));
    assert_eq!(doc.page_count(), 0);
    assert_eq!(chart.title, "blank");
}

#[test]
fn close_writes_trailer_and_returns_writer() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    let mut chart = populated("only");
    doc.finalize_page(&mut chart).unwrap();

    let html = text(&doc.close().unwrap());

    assert!(doc.is_closed());
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches(r#"<section class="page""#).count(), 1);
    assert!(html.contains("<svg"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn closing_twice_fails() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    doc.close().unwrap();

    assert!(matches!(doc.close(), Err(PlotError::DocumentClosed)));
}

#[test]
fn finalize_after_close_fails() {
    let mut doc = ReportDocument::from_writer(Vec::new(), "Report").unwrap();
    doc.close().unwrap();
    let mut chart = populated("late");

    let err = doc.finalize_page(&mut chart).unwrap_err();

    assert!(matches!(err, PlotError::DocumentClosed));
    assert_eq!(chart.state(), PageState::Populated);
}

#[test]
fn drop_without_close_still_writes_trailer() {
    let mut buffer = Vec::new();
    {
        let mut doc = ReportDocument::from_writer(&mut buffer, "Report").unwrap();
        let mut chart = populated("abandoned");
        doc.finalize_page(&mut chart).unwrap();
    }

    let html = text(&buffer);
    assert_eq!(html.matches(r#"<section class="page""#).count(), 1);
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn drop_after_close_writes_trailer_once() {
    let mut buffer = Vec::new();
    {
        let mut doc = ReportDocument::from_writer(&mut buffer, "Report").unwrap();
        doc.close().unwrap();
    }

    assert_eq!(text(&buffer).matches("</html>").count(), 1);
}

#[test]
fn create_writes_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("out03plot.html");

    let mut doc = ReportDocument::create(&path, "Report").unwrap();
    let mut chart = populated("page");
    doc.finalize_page(&mut chart).unwrap();
    doc.close().unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Report</title>"));
    assert!(html.contains(r#"id="page-1""#));
}

#[test]
fn create_in_missing_directory_is_output_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.html");

    let err = ReportDocument::create(&path, "Report").unwrap_err();

    assert!(matches!(err, PlotError::OutputWrite { .. }));
}

#[test]
fn page_info_serializes() {
    let info = PageInfo {
        number: 1,
        title: "t".to_string(),
        series: vec!["a".to_string()],
    };
    let json = serde_json::to_string(&info).unwrap();
    assert_eq!(json, r#"{"number":1,"title":"t","series":["a"]}"#);
}
