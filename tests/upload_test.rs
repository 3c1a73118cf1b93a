use std::fs;
use std::path::PathBuf;

use msme_analytics::config::DashboardConfig;
use msme_analytics::dataset::loader::load_or_empty;
use msme_analytics::dataset::upload::handle_upload;
use msme_analytics::dataset::Dataset;

/// A fresh data directory under the system temp dir
fn temp_config(tag: &str) -> DashboardConfig {
    let data_dir: PathBuf = std::env::temp_dir().join(format!(
        "msme-analytics-upload-{}-{tag}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&data_dir);
    fs::create_dir_all(&data_dir).expect("temp data dir should be creatable");
    DashboardConfig {
        data_dir,
        show_progress: false,
        ..DashboardConfig::default()
    }
}

const LOCATION_CSV: &str = "\
State,District,Dic_Name,msme_count
KERALA,ERNAKULAM,DIC ERNAKULAM,200
KERALA,THRISSUR,DIC THRISSUR,150
KARNATAKA,MYSURU,DIC MYSURU,300
";

/// Uploading a valid CSV and reloading it preserves shape and content
#[test]
fn upload_round_trip_preserves_rows_and_columns() {
    let config = temp_config("round-trip");

    let report = handle_upload(&config, "location_profile.csv", LOCATION_CSV.as_bytes())
        .expect("upload should be accepted");
    assert_eq!(report.rows, 3);
    assert_eq!(report.columns, 4);
    assert_eq!(report.file_name, "location_profile.csv");

    let reloaded = load_or_empty(&config, Dataset::LocationProfile);
    assert_eq!(reloaded.num_rows(), 3);
    assert_eq!(reloaded.num_columns(), 4);
    assert_eq!(
        fs::read(report.saved_to).expect("saved file should exist"),
        LOCATION_CSV.as_bytes()
    );

    let _ = fs::remove_dir_all(&config.data_dir);
}

/// A second upload of the same name overwrites the previous file
#[test]
fn upload_overwrites_existing_file() {
    let config = temp_config("overwrite");

    handle_upload(&config, "location_profile.csv", LOCATION_CSV.as_bytes())
        .expect("first upload should be accepted");
    let replacement = "State,msme_count\nGOA,9\n";
    let report = handle_upload(&config, "location_profile.csv", replacement.as_bytes())
        .expect("second upload should be accepted");
    assert_eq!(report.rows, 1);
    assert_eq!(report.columns, 2);

    let reloaded = load_or_empty(&config, Dataset::LocationProfile);
    assert_eq!(reloaded.num_rows(), 1);

    let _ = fs::remove_dir_all(&config.data_dir);
}

/// Non-CSV files are rejected and nothing is written
#[test]
fn non_csv_upload_is_rejected() {
    let config = temp_config("non-csv");

    let result = handle_upload(&config, "notes.txt", b"just some text");
    assert!(result.is_err());
    assert!(!config.data_dir.join("notes.txt").exists());

    let _ = fs::remove_dir_all(&config.data_dir);
}

/// Corrupt CSV content is rejected and the directory stays unmodified
#[test]
fn corrupt_csv_upload_leaves_directory_untouched() {
    let config = temp_config("corrupt");

    // Second data row has an extra field
    let corrupt = "State,msme_count\nGOA,9\nDELHI,4,extra\n";
    let result = handle_upload(&config, "location_profile.csv", corrupt.as_bytes());
    assert!(result.is_err());
    assert!(!config.data_dir.join("location_profile.csv").exists());

    let _ = fs::remove_dir_all(&config.data_dir);
}

/// A missing dataset file degrades to an empty table, not an error
#[test]
fn missing_dataset_loads_as_empty_table() {
    let config = temp_config("missing");

    let batch = load_or_empty(&config, Dataset::CompositeScore);
    assert_eq!(batch.num_rows(), 0);

    let _ = fs::remove_dir_all(&config.data_dir);
}
