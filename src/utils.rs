use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::types::{Device, DeviceTableRow, Entity};

pub fn encode_client_credential(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{}:{}", client_id, client_secret))
}

pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

pub fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

pub fn device_table_rows(devices: &[Device]) -> Vec<DeviceTableRow> {
    devices
        .iter()
        .map(|device| DeviceTableRow {
            name: device.name.clone(),
            kind: device.kind.clone(),
            active: if device.is_active { "yes" } else { "no" }.to_string(),
            id: device.id.clone().unwrap_or_default(),
        })
        .collect()
}

/// Parses `type:start:end` (offsets in characters) into an entity.
pub fn parse_entity(s: &str) -> Result<Entity, String> {
    let parts: Vec<&str> = s.rsplitn(3, ':').collect();
    if parts.len() != 3 {
        return Err(format!("expected TYPE:START:END, got '{}'", s));
    }

    let end = parts[0]
        .parse::<usize>()
        .map_err(|e| format!("invalid end offset '{}': {}", parts[0], e))?;
    let start = parts[1]
        .parse::<usize>()
        .map_err(|e| format!("invalid start offset '{}': {}", parts[1], e))?;
    if start > end {
        return Err(format!("start offset {} is after end offset {}", start, end));
    }

    Ok(Entity {
        entity: parts[2].to_string(),
        start: Some(start),
        end: Some(end),
        value: None,
    })
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
