use super::*;

#[test]
fn settings_file_supplies_uci_dir() {
    let ws = Workspace::new();
    let settings = ws.write(
        "settings.toml",
        &format!("uci_dir = {:?}\n", ws.uci_dir().display().to_string()),
    );
    Command::new(assert_cmd::cargo::cargo_bin!("opensync-vif"))
        .arg("--config")
        .arg(&settings)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "wlan0""#));
}

#[test]
fn bad_settings_file_is_reported_with_path() {
    let ws = Workspace::new();
    let settings = ws.write("settings.toml", "uci_dir = [\n");
    ws.command()
        .arg("--config")
        .arg(&settings)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"))
        .stderr(predicate::str::contains("settings.toml"));
}

#[test]
fn missing_package_shows_empty() {
    let ws = Workspace::new();
    ws.command()
        .arg("show")
        .arg("network")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""sections": []"#));
}
