use super::*;

#[test]
fn state_publishes_every_usable_section() {
    let ws = Workspace::new();
    ws.command()
        .arg("state")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""table":"Wifi_VIF_State""#))
        .stdout(predicate::str::contains(r#""if_name":"wlan0""#))
        .stdout(predicate::str::contains(r#""if_name":"wlan1""#))
        .stdout(predicate::str::contains("NoIfname").not())
        .stderr(predicate::str::contains("sections=3 published=2 skipped=1"));
}

#[test]
fn state_decodes_enterprise_and_band() {
    let ws = Workspace::new();
    let output = ws
        .command()
        .arg("state")
        .arg("--section")
        .arg("wlan0")
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let line: serde_json::Value =
        serde_json::from_str(stdout.lines().next().expect("one line")).expect("json");
    let row = &line["row"];
    assert_eq!(line["radio"], "radio0");
    assert_eq!(row["min_hw_mode"], "11ac");
    assert_eq!(row["mac"], "02:11:22:33:44:55");
    assert_eq!(row["state"], "down");
    assert_eq!(row["vlan_id"], 100);
    assert_eq!(row["btm"], 1);
    assert_eq!(row["mac_list_type"], "whitelist");
    assert_eq!(row["security"]["encryption"], "WPA-EAP");
    assert_eq!(row["security"]["mode"], "2");
    assert_eq!(row["security"]["radius_server_ip"], "10.0.0.2");
    assert!(row["security"].get("radius_acct_ip").is_none());
    assert_eq!(row["custom_options"]["rate_limit_en"], "1");
    assert_eq!(row["custom_options"]["ssid_ul_limit"], "2000");
}

#[test]
fn state_with_config_publishes_both_rows() {
    let ws = Workspace::new();
    ws.command()
        .arg("state")
        .arg("--section")
        .arg("wlan1")
        .arg("--with-config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""table":"Wifi_VIF_Config""#))
        .stdout(predicate::str::contains(r#""ssid_broadcast":"disabled""#))
        .stdout(predicate::str::contains(r#""min_hw_mode":"11n""#))
        .stdout(predicate::str::contains(r#""encryption":"WPA-PSK""#));
}

#[test]
fn state_fails_for_unusable_or_unknown_section() {
    let ws = Workspace::new();
    ws.command()
        .arg("state")
        .arg("--section")
        .arg("@wifi-iface[2]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a usable interface"));

    ws.command()
        .arg("state")
        .arg("--section")
        .arg("wlan9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no wifi-iface section named wlan9"));
}

#[test]
fn show_prints_package_json() {
    let ws = Workspace::new();
    ws.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "wireless""#))
        .stdout(predicate::str::contains(r#""kind": "wifi-device""#));
}
