use super::*;

#[test]
fn hs20_profile_lands_on_referenced_vifs() {
    let ws = Workspace::new();
    ws.command()
        .arg("hs20")
        .arg("--profile")
        .arg(fixture("fixtures/hs20_profile.json"))
        .arg("--records")
        .arg(fixture("fixtures/records.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("hs20 1/2 vif(s): ok"));

    let wireless = ws.package("wireless");
    assert!(wireless.contains("\toption interworking '1'"));
    assert!(wireless.contains("\toption hs20 '1'"));
    assert!(wireless.contains("\toption hessid '02:11:22:33:44:55'"));
    assert!(wireless.contains("\toption domain_name 'example.com,example.net'"));
    assert!(wireless.contains("\tlist venue_name 'eng:Example Venue'"));
    assert!(wireless.contains("\toption gas_address3 '0'"));
    assert!(wireless.contains("\toption anqp_domain_id '1234'"));
    assert!(wireless.contains("\toption venue_group '2'"));
    assert!(wireless.contains("\toption venue_type '8'"));
    assert!(wireless.contains("\tlist operator_icon 'logo.png'"));
    assert_eq!(wireless.matches("option hs20 '1'").count(), 1);
}

#[test]
fn hs20_fails_when_no_vif_resolves() {
    let ws = Workspace::new();
    let profile = ws.write("profile.json", r#"{"vif_config":["vif-missing"]}"#);
    ws.command()
        .arg("hs20")
        .arg("--profile")
        .arg(&profile)
        .arg("--records")
        .arg(fixture("fixtures/records.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no referenced VIF could be updated"));
}

#[test]
fn osu_provider_section_is_written() {
    let ws = Workspace::new();
    ws.command()
        .arg("osu")
        .arg("--provider")
        .arg(fixture("fixtures/osu_provider.json"))
        .arg("--records")
        .arg(fixture("fixtures/records.json"))
        .assert()
        .success();

    let wireless = ws.package("wireless");
    assert!(wireless.contains("config osu-provider 'provider1'"));
    assert!(wireless.contains("\toption osu_server_uri 'https://osu.example.com/'"));
    assert!(wireless.contains("\toption osu_method_list '1'"));
    assert!(wireless.contains("\tlist service_description 'eng:Free service'"));
    assert!(wireless.contains("\tlist osu_icon 'logo.png'"));
}

#[test]
fn icon_with_path_in_name_is_refused() {
    let ws = Workspace::new();
    let icon = ws.write(
        "icon.json",
        r#"{"name":"../wireless","url":"https://icons.invalid/logo.png"}"#,
    );
    ws.command()
        .arg("icon")
        .arg("--icon")
        .arg(&icon)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to register icon"));

    assert!(!ws.package("wireless").contains("hs20-icon"));
}
