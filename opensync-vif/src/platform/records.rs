use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RecordError;
use crate::schema::{Hotspot20IconConfig, VifConfig};
use crate::traits::RecordLookup;

/// Rows read from a JSON dump keyed by table name:
///
/// ```json
/// { "Wifi_VIF_Config": [{ "_uuid": "...", "if_name": "wlan0" }],
///   "Hotspot20_Icon_Config": [{ "_uuid": "...", "name": "logo.png" }] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JsonRecords {
    #[serde(rename = "Wifi_VIF_Config", default)]
    pub vif_configs: Vec<VifConfig>,
    #[serde(rename = "Hotspot20_Icon_Config", default)]
    pub icons: Vec<Hotspot20IconConfig>,
}

impl JsonRecords {
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        let raw = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| RecordError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl RecordLookup for JsonRecords {
    fn find_vif_config(&self, uuid: &str) -> Option<VifConfig> {
        self.vif_configs
            .iter()
            .find(|v| v.uuid.as_deref() == Some(uuid))
            .cloned()
    }

    fn find_icon(&self, uuid: &str) -> Option<Hotspot20IconConfig> {
        self.icons
            .iter()
            .find(|i| i.uuid.as_deref() == Some(uuid))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::JsonRecords;
    use crate::error::RecordError;
    use crate::traits::RecordLookup;

    #[test]
    fn finds_rows_by_uuid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("records.json");
        fs::write(
            &path,
            r#"{"Wifi_VIF_Config":[{"_uuid":"vif-1","if_name":"wlan0"}],
                "Hotspot20_Icon_Config":[{"_uuid":"icon-1","name":"logo.png"}]}"#,
        )
        .expect("write");

        let records = JsonRecords::load(&path).expect("load");
        assert_eq!(
            records.find_vif_config("vif-1").map(|v| v.if_name),
            Some("wlan0".to_string())
        );
        assert_eq!(
            records.find_icon("icon-1").map(|i| i.name),
            Some("logo.png".to_string())
        );
        assert!(records.find_vif_config("vif-2").is_none());
    }

    #[test]
    fn reports_bad_json_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("records.json");
        fs::write(&path, "{").expect("write");
        let err = JsonRecords::load(&path).expect_err("bad json");
        assert!(matches!(err, RecordError::Parse { .. }));
        assert!(err.to_string().contains("records.json"));
    }
}
