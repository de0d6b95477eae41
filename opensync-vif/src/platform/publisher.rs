use std::io::Write;

use serde::Serialize;
use tracing::warn;

use crate::schema::{VifConfig, VifState};
use crate::traits::Publisher;

pub const TABLE_VIF_STATE: &str = "Wifi_VIF_State";
pub const TABLE_VIF_CONFIG: &str = "Wifi_VIF_Config";

#[derive(Serialize)]
struct Line<'a, T: Serialize> {
    table: &'static str,
    radio: &'a str,
    row: &'a T,
}

/// Writes one JSON object per published row.
#[derive(Debug)]
pub struct JsonLinesPublisher<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, table: &'static str, radio: &str, row: &T) {
        let line = Line { table, radio, row };
        let result = serde_json::to_string(&line)
            .map_err(std::io::Error::from)
            .and_then(|text| writeln!(self.out, "{text}"));
        if let Err(err) = result {
            warn!("{radio}: failed to publish {table}: {err}");
        }
    }
}

impl<W: Write> Publisher for JsonLinesPublisher<W> {
    fn publish_state(&mut self, state: &VifState, radio: &str) {
        self.emit(TABLE_VIF_STATE, radio, state);
    }

    fn publish_config(&mut self, config: &VifConfig, radio: &str) {
        self.emit(TABLE_VIF_CONFIG, radio, config);
    }
}
