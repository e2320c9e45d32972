use std::path::Path;
use std::process::Command;

use anyhow::Result;

fn run_dashboard(arguments: &[&str]) -> Result<String> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-dashboard");
    let sample_path = Path::new("samples").join("products.json");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .args(arguments)
        .output()?;

    assert!(output.status.success());

    Ok(String::from_utf8(output.stdout)?)
}

#[test]
fn test_cli_reports_march_views_from_sample_dataset() -> Result<()> {
    let stdout = run_dashboard(&["--month", "March", "--chart", "bar"])?;

    assert!(stdout.contains("Bar chart - March"));
    assert!(stdout.contains("0-100,2"));
    assert!(stdout.contains("801-900,1"));
    assert!(stdout.contains("901-above,0"));

    assert!(stdout.contains("Statistics - March"));
    assert!(stdout.contains("Total sale: 1100.00"));
    assert!(stdout.contains("Total sold items: 2"));
    assert!(stdout.contains("Total not sold items: 1"));

    assert!(stdout.contains("Page 1 of 1 (3 rows)"));

    Ok(())
}

#[test]
fn test_cli_prints_all_chart_sections_by_default() -> Result<()> {
    let stdout = run_dashboard(&[])?;

    assert!(stdout.contains("Bar chart - All"));
    assert!(stdout.contains("Pie chart - All"));
    assert!(stdout.contains("Line chart - All"));

    Ok(())
}

#[test]
fn test_cli_prints_only_the_selected_chart_section() -> Result<()> {
    let stdout = run_dashboard(&["--chart", "pie"])?;

    assert!(stdout.contains("Pie chart - All"));
    assert!(!stdout.contains("Bar chart"));
    assert!(!stdout.contains("Line chart"));

    Ok(())
}

#[test]
fn test_cli_search_matches_price_rendering() -> Result<()> {
    let stdout = run_dashboard(&["--search", "49.99"])?;

    assert!(stdout.contains("Womens Summer Sandal"));
    assert!(stdout.contains("Page 1 of 1 (1 rows)"));

    Ok(())
}

#[test]
fn test_cli_paginates_the_full_dataset() -> Result<()> {
    let stdout = run_dashboard(&["--page-size", "5", "--page", "3"])?;
    let table_rows = stdout
        .lines()
        .filter(|line| line.split(',').count() == 7)
        .filter(|line| line.split(',').next().is_some_and(|field| field.parse::<u32>().is_ok()))
        .count();

    assert!(stdout.contains("Page 3 of 3 (15 rows)"));
    assert_eq!(table_rows, 5);

    Ok(())
}

#[test]
fn test_cli_fails_cleanly_on_missing_dataset() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-dashboard");
    let output = Command::new(binary_path).arg("missing.json").output()?;

    assert!(!output.status.success());

    Ok(())
}
