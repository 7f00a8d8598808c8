//! End-to-end pipeline tests against a synthetic survey export.

use course_rank::config::{ChartConfig, PipelineConfig};
use course_rank::pipeline;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PREFIX: &str = "Please place each MAcc CORE course into rank order";

fn test_config(dir: &Path, input: &str) -> PipelineConfig {
    PipelineConfig {
        input_path: dir.join(input),
        output_dir: dir.join("outputs"),
        chart: ChartConfig {
            // keep test renders small
            width: 640,
            height: 480,
            ..ChartConfig::default()
        },
        ..PipelineConfig::default()
    }
}

/// Banner row, header row, one metadata row, three respondents. The
/// metadata row carries extreme values that would wreck the means if it
/// leaked through the filter; R_3 left Audit unranked and gave Tax a
/// non-numeric answer.
fn write_survey_export(dir: &Path) -> PipelineConfig {
    let csv = format!(
        "2024 MAcc Exit Survey\n\
         ResponseId,StartDate,{p} - Tax,{p} - Audit,Free text\n\
         R_1,2024-06-01,1,2,great\n\
         \"{{\"\"ImportId\"\":\"\"QID1\"\"}}\",meta,99,99,meta\n\
         R_2,2024-06-02,2,2,ok\n\
         R_3,2024-06-03,not sure,,none\n",
        p = PREFIX
    );
    fs::write(dir.join("survey.csv"), csv).unwrap();
    test_config(dir, "survey.csv")
}

#[test]
fn end_to_end_produces_sorted_table_and_both_files() {
    let dir = TempDir::new().unwrap();
    let config = write_survey_export(dir.path());

    let table = pipeline::run(&config).unwrap();

    // Tax: (1 + 2) / 2, the unparsable cell is excluded
    // Audit: (2 + 2) / 2, the empty cell is excluded
    assert_eq!(table.len(), 2);
    assert_eq!(table[0].course, "Tax");
    assert_eq!(table[0].mean_rank, Some(1.5));
    assert_eq!(table[0].position, 1);
    assert_eq!(table[1].course, "Audit");
    assert_eq!(table[1].mean_rank, Some(2.0));
    assert_eq!(table[1].position, 2);

    let table_csv = fs::read_to_string(config.table_path()).unwrap();
    let lines: Vec<&str> = table_csv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Course name,Mean rank,Final rank position",
            "Tax,1.5,1",
            "Audit,2.0,2",
        ]
    );

    let chart = fs::metadata(config.chart_path()).unwrap();
    assert!(chart.len() > 0);
}

#[test]
fn metadata_row_does_not_affect_any_mean() {
    let dir = TempDir::new().unwrap();
    let config = write_survey_export(dir.path());

    let table = pipeline::run(&config).unwrap();
    // with the 99s included the Tax mean would be 34, Audit 34.333
    assert!(table.iter().all(|row| row.mean_rank.unwrap() < 3.0));
}

#[test]
fn no_matching_columns_fails_before_writing_anything() {
    let dir = TempDir::new().unwrap();
    let csv = "banner\n\
               ResponseId,StartDate,Unrelated question\n\
               R_1,2024-06-01,5\n";
    fs::write(dir.path().join("survey.csv"), csv).unwrap();
    let config = test_config(dir.path(), "survey.csv");

    let result = pipeline::run(&config);
    assert!(result.is_err());
    assert!(!config.table_path().exists());
    assert!(!config.chart_path().exists());
}

#[test]
fn missing_input_fails_before_writing_anything() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path(), "nope.csv");

    let result = pipeline::run(&config);
    assert!(result.is_err());
    assert!(!config.table_path().exists());
    assert!(!config.chart_path().exists());
}

#[test]
fn reruns_overwrite_previous_outputs() {
    let dir = TempDir::new().unwrap();
    let config = write_survey_export(dir.path());

    pipeline::run(&config).unwrap();
    let first = fs::read_to_string(config.table_path()).unwrap();
    pipeline::run(&config).unwrap();
    let second = fs::read_to_string(config.table_path()).unwrap();
    assert_eq!(first, second);
}
