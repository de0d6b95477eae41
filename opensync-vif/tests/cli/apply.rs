use super::*;

#[test]
fn apply_writes_section_and_vlan_device() {
    let ws = Workspace::new();
    ws.command()
        .arg("apply")
        .arg("--vif")
        .arg(fixture("fixtures/vif_wlan2.json"))
        .arg("--radio")
        .arg(fixture("fixtures/radio0.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("apply wlan2: ok"));

    let wireless = ws.package("wireless");
    assert!(wireless.contains("config wifi-iface 'wlan2'"));
    assert!(wireless.contains("\toption device 'radio0'"));
    assert!(wireless.contains("\toption ssid 'Lab'"));
    assert!(wireless.contains("\toption encryption 'psk2'"));
    assert!(wireless.contains("\toption key 'labpassword'"));
    assert!(wireless.contains("\toption ieee80211w '1'"));
    assert!(wireless.contains("\toption mobility_domain '0012'"));
    assert!(wireless.contains("\toption macfilter 'deny'"));
    assert!(wireless.contains("\tlist maclist 'aa:bb:cc:dd:ee:09'"));
    assert!(wireless.contains("\toption vid '100'"));
    assert!(wireless.contains("\toption drate '10000'"));
    assert!(wireless.contains("\toption rts_threshold '0'"));
    // untouched sections survive the rewrite
    assert!(wireless.contains("config wifi-iface 'wlan1'"));
    assert!(wireless.contains("\toption ssid 'NoIfname'"));

    let network = ws.package("network");
    assert!(network.contains("config device 'vlan_wlan2'"));
    assert!(network.contains("\toption type '8021q'"));
    assert!(network.contains("\toption vid '100'"));
}

#[test]
fn apply_only_changed_fields_keeps_existing_options() {
    let ws = Workspace::new();
    let vif = ws.write(
        "vif.json",
        r#"{"if_name":"wlan1","ssid":"Visitors","enabled":false,"vlan_id":100}"#,
    );
    ws.command()
        .arg("apply")
        .arg("--vif")
        .arg(&vif)
        .arg("--radio")
        .arg(fixture("fixtures/radio0.json"))
        .arg("--changed")
        .arg("ssid,enabled")
        .assert()
        .success();

    let wireless = ws.package("wireless");
    assert!(wireless.contains("\toption ssid 'Visitors'"));
    assert!(wireless.contains("\toption disabled '1'"));
    assert!(wireless.contains("\toption hidden '1'"));
    assert!(wireless.contains("\toption encryption 'none'"));
    assert!(!wireless.contains("'guestpass'"));
    assert!(!ws.uci_dir().join("network").exists());
}

#[test]
fn apply_rejects_unknown_changed_field() {
    let ws = Workspace::new();
    ws.command()
        .arg("apply")
        .arg("--vif")
        .arg(fixture("fixtures/vif_wlan2.json"))
        .arg("--radio")
        .arg(fixture("fixtures/radio0.json"))
        .arg("--changed")
        .arg("ssid,security")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown VIF config field"));
}

#[test]
fn apply_requires_interface_name() {
    let ws = Workspace::new();
    let vif = ws.write("vif.json", r#"{"ssid":"Nameless"}"#);
    ws.command()
        .arg("apply")
        .arg("--vif")
        .arg(&vif)
        .arg("--radio")
        .arg(fixture("fixtures/radio0.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("if_name is required"));
}

#[test]
fn delete_removes_section_by_ifname() {
    let ws = Workspace::new();
    let vif = ws.write("vif.json", r#"{"if_name":"wlan1"}"#);
    ws.command()
        .arg("delete")
        .arg("--vif")
        .arg(&vif)
        .assert()
        .success()
        .stderr(predicate::str::contains("delete wlan1: ok"));

    let wireless = ws.package("wireless");
    assert!(!wireless.contains("'wlan1'"));
    assert!(wireless.contains("config wifi-iface 'wlan0'"));
}

#[test]
fn multi_line_ssid_keeps_the_package_readable() {
    let ws = Workspace::new();
    let vif = ws.write(
        "vif.json",
        r#"{"if_name":"wlan1","ssid":"Guest\nNet","enabled":true}"#,
    );
    ws.command()
        .arg("apply")
        .arg("--vif")
        .arg(&vif)
        .arg("--radio")
        .arg(fixture("fixtures/radio0.json"))
        .arg("--changed")
        .arg("ssid")
        .assert()
        .success();

    ws.command()
        .arg("state")
        .arg("--section")
        .arg("wlan1")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ssid":"Guest\nNet""#));
}
