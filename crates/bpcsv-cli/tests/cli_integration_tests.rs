use assert_cmd::Command;
use bpcsv_testing::{ExportDocument, TestWorld};
use predicates::prelude::*;

fn sample_export() -> ExportDocument {
    ExportDocument::new()
        .blood_pressure("2023-05-10 08:00:00 -0700", "130", "82")
        .quantity("HKQuantityTypeIdentifierHeartRate", "61", "2023-05-10 08:02:00 -0700")
        .systolic_only("2023-06-03 07:45:00 -0700", "141")
        .blood_pressure("2023-06-15 21:10:00 -0700", "118", "77")
}

#[test]
#[allow(deprecated)]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("bpcsv").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bpcsv"));
}

#[test]
#[allow(deprecated)]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("bpcsv").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("XML_FILE"))
        .stdout(predicate::str::contains("MINIMUM_DATE"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_single_reading_without_minimum_date() {
    let world = TestWorld::new();
    let doc = ExportDocument::new().blood_pressure("2023-05-10 08:00:00 -0700", "130", "82");
    let export = world.write_export("export.xml", &doc).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.stdout(),
        "2023-05-10 08:00:00-07:00,82,2023-05-10 08:00:00-07:00,130\n"
    );
    assert!(result.stderr().is_empty(), "stderr: {}", result.stderr());
}

#[test]
fn test_all_complete_readings_in_document_order() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert!(result.success());
    insta::assert_snapshot!(result.stdout(), @r"
    2023-05-10 08:00:00-07:00,82,2023-05-10 08:00:00-07:00,130
    2023-06-15 21:10:00-07:00,77,2023-06-15 21:10:00-07:00,118
    ");
}

#[test]
fn test_minimum_date_filters_on_calendar_date() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world
        .run(&[export.to_str().unwrap(), "2023-06-01"])
        .unwrap();

    assert!(result.success());
    assert_eq!(
        result.rows(),
        ["2023-06-15 21:10:00-07:00,77,2023-06-15 21:10:00-07:00,118"]
    );
}

#[test]
fn test_reading_on_minimum_date_is_excluded() {
    let world = TestWorld::new();
    let doc = ExportDocument::new()
        .blood_pressure("2023-06-01 23:59:00 -0700", "120", "80")
        .blood_pressure("2023-06-02 00:01:00 -0700", "121", "81");
    let export = world.write_export("export.xml", &doc).unwrap();

    let result = world
        .run(&[export.to_str().unwrap(), "2023-06-01"])
        .unwrap();

    assert!(result.success());
    assert_eq!(
        result.rows(),
        ["2023-06-02 00:01:00-07:00,81,2023-06-02 00:01:00-07:00,121"]
    );
}

#[test]
fn test_empty_minimum_date_means_no_filter() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world.run(&[export.to_str().unwrap(), ""]).unwrap();

    assert!(result.success());
    assert_eq!(result.rows().len(), 2);
}

#[test]
fn test_incomplete_reading_emits_nothing() {
    let world = TestWorld::new();
    let doc = ExportDocument::new()
        .systolic_only("2023-05-10 08:00:00 -0700", "130")
        .diastolic_only("2023-05-11 08:00:00 -0700", "85");
    let export = world.write_export("export.xml", &doc).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert!(result.success());
    assert!(result.stdout().is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();
    let path = export.to_str().unwrap();

    let first = world.run(&[path, "2023-01-01"]).unwrap();
    let second = world.run(&[path, "2023-01-01"]).unwrap();

    assert!(first.success() && second.success());
    assert_eq!(first.stdout(), second.stdout());
}

#[test]
fn test_missing_filename_is_usage_error() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stdout().is_empty());
    assert!(result.stderr().contains("Error:  Filename required"));
    assert!(result.stderr().contains("  Cmdline: "));
    assert!(
        result
            .stderr()
            .contains("  Usage:  bpcsv <xml file> [<minimum date>]")
    );
}

#[test]
fn test_nonexistent_file_names_the_path() {
    let world = TestWorld::new();
    let missing = world.path("nowhere/export.xml");
    let missing = missing.to_str().unwrap();

    let result = world.run(&[missing]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(
        result
            .stderr()
            .contains(&format!("Error:  '{}' not found", missing)),
        "stderr: {}",
        result.stderr()
    );
    assert!(result.stderr().contains("  Cmdline: "));
    assert!(result.stderr().contains(missing));
}

#[test]
fn test_unparsable_minimum_date_is_usage_error() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    for bad in ["2023/06/01", "June 1st", "2023-13-01"] {
        let result = world.run(&[export.to_str().unwrap(), bad]).unwrap();

        assert_eq!(result.code(), Some(1), "{} should be rejected", bad);
        assert!(result.stdout().is_empty());
        assert!(
            result
                .stderr()
                .contains(&format!("Error:  Error parsing date '{}'", bad)),
            "stderr: {}",
            result.stderr()
        );
    }
}

#[test]
fn test_tilde_path_is_expanded() {
    let world = TestWorld::new();
    let root = world.root().to_str().unwrap().to_string();
    let world = world.with_env("HOME", root);
    world
        .write_export("export.xml", &sample_export())
        .unwrap();

    let result = world.run(&["~/export.xml"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.rows().len(), 2);
}

#[test]
fn test_malformed_xml_aborts_after_earlier_rows() {
    let world = TestWorld::new();
    let doc = ExportDocument::new()
        .blood_pressure("2023-05-10 08:00:00 -0700", "130", "82")
        .raw(" <Correlation><Record type=\"x\"></Correlation>");
    let export = world.write_export("export.xml", &doc).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error: XML error"), "stderr: {}", result.stderr());
    assert_eq!(result.rows().len(), 1);
}

#[test]
fn test_truncated_export_is_error() {
    let world = TestWorld::new();
    let xml = ExportDocument::new()
        .blood_pressure("2023-05-10 08:00:00 -0700", "130", "82")
        .to_xml()
        .replace("</HealthData>\n", "");
    let export = world.write_file("export.xml", &xml).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("document ended inside <HealthData>"));
}

#[test]
fn test_empty_export_is_error() {
    let world = TestWorld::new();

    for contents in ["", "\n", "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"] {
        let export = world.write_file("export.xml", contents).unwrap();

        let result = world.run(&[export.to_str().unwrap()]).unwrap();

        assert_eq!(result.code(), Some(1), "{:?} should be rejected", contents);
        assert!(result.stdout().is_empty());
        assert!(
            result.stderr().contains("no root element found"),
            "stderr: {}",
            result.stderr()
        );
    }
}

#[test]
fn test_content_after_root_is_error() {
    let world = TestWorld::new();
    let doc = ExportDocument::new().blood_pressure("2023-05-10 08:00:00 -0700", "130", "82");

    for trailer in ["<Other/>\n", "junk\n"] {
        let xml = format!("{}{}", doc.to_xml(), trailer);
        let export = world.write_file("export.xml", &xml).unwrap();

        let result = world.run(&[export.to_str().unwrap()]).unwrap();

        assert_eq!(result.code(), Some(1), "{:?} should be rejected", trailer);
        assert!(
            result.stderr().contains("content outside the root element"),
            "stderr: {}",
            result.stderr()
        );
        assert_eq!(result.rows().len(), 1);
    }
}

#[test]
fn test_output_file_and_header() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();
    let out = world.path("bp.csv");

    let result = world
        .run(&[
            export.to_str().unwrap(),
            "--header",
            "--output",
            out.to_str().unwrap(),
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().is_empty());

    let csv = std::fs::read_to_string(&out).unwrap();
    insta::assert_snapshot!(csv, @r"
    diastolic_date,diastolic,systolic_date,systolic
    2023-05-10 08:00:00-07:00,82,2023-05-10 08:00:00-07:00,130
    2023-06-15 21:10:00-07:00,77,2023-06-15 21:10:00-07:00,118
    ");
}

#[test]
fn test_config_file_overrides_identifiers() {
    let world = TestWorld::new();
    let doc = ExportDocument::new()
        .blood_pressure("2023-05-10 08:00:00 -0700", "130", "82")
        .raw(
            r#" <Correlation type="Custom">
  <Record type="CustomDiastolic" value="70"/>
  <Record type="CustomSystolic" value="110" startDate="2024-01-02 03:04:05 +0100"/>
 </Correlation>"#,
        );
    let export = world.write_export("export.xml", &doc).unwrap();
    let config = world
        .write_file(
            "bpcsv.toml",
            "[identifiers]\nsystolic = \"CustomSystolic\"\ndiastolic = \"CustomDiastolic\"\n\n[output]\nheader = true\n",
        )
        .unwrap();

    let result = world
        .run(&[
            export.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(
        result.rows(),
        [
            "diastolic_date,diastolic,systolic_date,systolic",
            "2024-01-02 03:04:05+01:00,70,2024-01-02 03:04:05+01:00,110",
        ]
    );
}

#[test]
fn test_config_from_environment() {
    let world = TestWorld::new();
    let config = world
        .write_file("bpcsv.toml", "[output]\nheader = true\n")
        .unwrap();
    let world = world.with_env("BPCSV_CONFIG", config.to_str().unwrap());
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world.run(&[export.to_str().unwrap()]).unwrap();

    assert!(result.success());
    assert_eq!(
        result.rows()[0],
        "diastolic_date,diastolic,systolic_date,systolic"
    );
}

#[test]
fn test_summary_goes_to_stderr() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world
        .run(&[export.to_str().unwrap(), "2023-06-01", "--summary"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.rows().len(), 1);
    assert_eq!(
        result.stderr().trim_end(),
        "1 rows written (1 before minimum date, 1 incomplete)"
    );
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let world = TestWorld::new();
    let export = world.write_export("export.xml", &sample_export()).unwrap();

    let result = world
        .run(&[export.to_str().unwrap(), "--log-level", "debug"])
        .unwrap();

    assert!(result.success());
    assert_eq!(result.rows().len(), 2);
    assert!(result.stderr().contains("built filter"));
    assert!(result.stderr().contains("opened export"));
    assert!(result.stderr().contains("export finished"));
}
