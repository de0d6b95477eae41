use colored::Colorize;

/// Result of reading one `wifi-iface` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub section: String,
    pub radio: Option<String>,
    pub ssid: Option<String>,
    pub published: bool,
}

/// Render one line per section.
pub fn render_outcomes(outcomes: &[SectionOutcome]) -> String {
    let mut out = Vec::new();
    for outcome in outcomes {
        let radio = outcome.radio.as_deref().unwrap_or("-");
        let ssid = outcome.ssid.as_deref().unwrap_or("-");
        let line = if outcome.published {
            format!("OK   {} radio={radio} ssid={ssid}", outcome.section).green()
        } else {
            format!("SKIP {} radio={radio} ssid={ssid}", outcome.section).yellow()
        };
        out.push(line.to_string());
    }
    out.join("\n")
}

/// Render published/skipped counts.
pub fn render_summary(outcomes: &[SectionOutcome]) -> String {
    let published = outcomes.iter().filter(|o| o.published).count();
    let skipped = outcomes.len() - published;
    format!("sections={} published={published} skipped={skipped}", outcomes.len())
        .cyan()
        .to_string()
}

/// Render the outcome of a single write.
pub fn render_result(action: &str, target: &str, ok: bool) -> String {
    if ok {
        format!("{action} {target}: ok").green().to_string()
    } else {
        format!("{action} {target}: failed").red().to_string()
    }
}
