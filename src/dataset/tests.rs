use super::{load, load_csv, load_json, DatasetError};

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tempfile::NamedTempFile;

fn create_temporary_file(suffix: &str, content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content.as_bytes())?;

    Ok(file)
}

fn record_json(id: u32, price: &str, sold: bool, date: &str) -> String {
    format!(
        r#"{{"id":{id},"title":"Item {id}","description":"Description {id}","price":{price},"category":"misc","sold":{sold},"dateOfSale":"{date}","image":"https://example.com/{id}.jpg"}}"#
    )
}

#[test]
fn test_json_loader_reads_all_valid_records_in_order() -> Result<()> {
    let content = format!(
        "[{},{},{}]",
        record_json(1, "100", true, "2021-11-27T20:29:54+05:30"),
        record_json(2, "49.99", false, "2022-03-01T00:00:00+00:00"),
        record_json(3, "900", true, "2022-06-15T12:00:00+00:00")
    );
    let file = create_temporary_file(".json", &content)?;

    let records = load_json(file.path())?;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].price.to_string(), "49.99");
    assert_eq!(records[2].id, 3);

    Ok(())
}

#[test]
fn test_json_loader_skips_record_with_invalid_sale_date() -> Result<()> {
    let content = format!(
        "[{},{},{}]",
        record_json(1, "100", true, "2021-11-27T20:29:54+05:30"),
        record_json(2, "50", false, "not-a-date"),
        record_json(3, "900", true, "2022-06-15T12:00:00+00:00")
    );
    let file = create_temporary_file(".json", &content)?;

    let records = load_json(file.path())?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 3);

    Ok(())
}

#[test]
fn test_json_loader_fails_on_malformed_document() -> Result<()> {
    let file = create_temporary_file(".json", "{ not an array")?;
    let result = load_json(file.path());

    assert!(matches!(result, Err(DatasetError::Json(_))));

    Ok(())
}

#[test]
fn test_json_loader_fails_on_missing_file() {
    let result = load_json(Path::new("missing_dataset.json"));

    assert!(matches!(result, Err(DatasetError::Io(_))));
}

#[test]
fn test_csv_loader_reads_valid_rows_and_skips_malformed_ones() -> Result<()> {
    let content = "\
id,title,description,price,category,sold,dateOfSale,image
1,Item 1,First item,100,misc,true,2021-11-27T20:29:54+05:30,https://example.com/1.jpg
2,Item 2,Broken date,50,misc,false,tomorrow,https://example.com/2.jpg
3,Item 3,Third item,900.50,misc,true,2022-06-15T12:00:00+00:00,https://example.com/3.jpg
";
    let file = create_temporary_file(".csv", content)?;

    let records = load_csv(file.path())?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    // CSV prices arrive through the float path, so 900.50 renders as 900.5,
    // the same trailing-zero-free form the dashboard has always shown.
    assert_eq!(records[1].price.to_string(), "900.5");
    assert_eq!(records[1].price, rust_decimal::Decimal::new(9005, 1));

    Ok(())
}

#[test]
fn test_load_dispatches_on_file_extension() -> Result<()> {
    let json_file = create_temporary_file(
        ".json",
        &format!("[{}]", record_json(1, "10", true, "2022-01-01T00:00:00+00:00"))
    )?;

    assert_eq!(load(json_file.path())?.len(), 1);

    let unknown_file = create_temporary_file(".txt", "")?;
    let result = load(unknown_file.path());

    assert!(matches!(result, Err(DatasetError::UnknownFormat(_))));

    Ok(())
}
