use anyhow::Result;
use std::fs;
use std::process::Command;

const PAGE: &str = r#"<html data-font-size="100"><body><div><i v-trigger-area:10*20></i></div></body></html>"#;

fn hit_area() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hit_area"))
}

#[test]
fn prints_the_mounted_document_as_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("page.html");
    fs::write(&input, PAGE)?;

    let output = hit_area().arg(&input).arg("--compact").output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let text = json.to_string();
    assert!(text.contains("padding-top: 10px"), "{text}");
    assert!(text.contains("margin-left: -20px"), "{text}");
    assert!(text.contains(r#""tag":"span""#), "{text}");
    Ok(())
}

#[test]
fn config_file_changes_the_overlay_tag() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("page.html");
    let config = dir.path().join("config.json");
    fs::write(&input, PAGE)?;
    fs::write(&config, r#"{ "overlay_tag": "ins" }"#)?;

    let output = hit_area().arg(&input).arg("--config").arg(&config).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(r#""tag": "ins""#), "{stdout}");
    Ok(())
}

#[test]
fn missing_input_fails() -> Result<()> {
    let output = hit_area().output()?;
    assert!(!output.status.success());
    let output = hit_area().arg("/definitely/not/here.html").output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
    Ok(())
}
