//! Command-line tests for the wktkit binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn wktkit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wktkit").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn write_input(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_analyze_is_default() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "line.wkt", "LINESTRING (30 10, 10 30, 40 40)");

    wktkit(&dir)
        .args([input.as_str(), "--epsg", "4326"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Geometry: LINESTRING"))
        .stdout(predicate::str::contains("Coordinates: 3"))
        .stdout(predicate::str::contains("CRS: WGS 84 (EPSG:4326)"));

    assert!(dir.path().join("wktkit.log").exists());
}

#[test]
fn test_convert_wkt_to_geojson() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "point.wkt", "POINT (30 10)");

    wktkit(&dir)
        .args([input.as_str(), "--convert", "--format", "geojson", "--epsg", "4326"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Feature\""))
        .stdout(predicate::str::contains("\"EPSG:4326\""));
}

#[test]
fn test_convert_geojson_to_wkt_file() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "line.geojson",
        r#"{"type": "Feature", "geometry": {"type": "LineString", "coordinates": [[30, 10], [10, 30]]}, "properties": {}}"#,
    );
    let output = dir.path().join("line.wkt");

    wktkit(&dir)
        .args([input.as_str(), "--convert", "--format", "wkt", "--output", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "LINESTRING (30 10, 10 30)\n");
}

#[test]
fn test_convert_collection_to_multipoint() {
    let dir = tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "points.geojson",
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [10, 40]}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [40, 30]}}
        ]}"#,
    );

    wktkit(&dir)
        .args([input.as_str(), "--convert", "--format", "wkt"])
        .assert()
        .success()
        .stdout("MULTIPOINT ((10 40), (40 30))\n");
}

#[test]
fn test_convert_to_graphic_from_stdin() {
    let dir = tempdir().unwrap();

    wktkit(&dir)
        .args(["-", "--convert", "--format", "graphic", "--epsg", "3857"])
        .write_stdin("POLYGON ((0 0, 1 0, 1 1, 0 0))")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"simple-fill\""))
        .stdout(predicate::str::contains("\"wkid\": 3857"));
}

#[test]
fn test_custom_styles_file() {
    let dir = tempdir().unwrap();
    let styles = write_input(
        dir.path(),
        "styles.toml",
        r#"
[marker]
style = "square"
color = [0.0, 0.0, 0.0, 1.0]
size = 12.0

[marker.outline]
color = [255.0, 255.0, 255.0, 1.0]
width = 1.0

[line]
color = [0.0, 0.0, 0.0, 1.0]
width = 2.0

[fill]
style = "solid"
color = [0.0, 0.0, 0.0, 0.25]

[fill.outline]
color = [0.0, 0.0, 0.0, 1.0]
width = 1.0
"#,
    );
    let input = write_input(dir.path(), "point.wkt", "POINT (1 2)");

    wktkit(&dir)
        .args([input.as_str(), "--convert", "--format", "graphic", "--styles", styles.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"square\""));
}

#[test]
fn test_reproject_to_web_mercator() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "ankara.wkt", "POINT (32.8597 39.9334)");

    wktkit(&dir)
        .args([input.as_str(), "--reproject", "--epsg", "4326", "--proj", "3857"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("POINT (36579"));
}

#[test]
fn test_reproject_requires_target() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "point.wkt", "POINT (1 2)");

    wktkit(&dir)
        .args([input.as_str(), "--reproject", "--epsg", "4326"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--proj"));
}

#[test]
fn test_invalid_wkt_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "broken.wkt", "POINT (30 x)");

    wktkit(&dir)
        .args([input.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid coordinate"));
}

#[test]
fn test_unsupported_conversion_fails() {
    let dir = tempdir().unwrap();
    let input = write_input(dir.path(), "shape.wkt", "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)))");

    wktkit(&dir)
        .args([input.as_str(), "--convert", "--format", "geojson"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported geometry type: MULTIPOLYGON"));
}
