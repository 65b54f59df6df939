// src/core/net.rs

// Blocking HTTP GET via reqwest. One client per run, fixed user agent.

use std::{error::Error, time::Duration};

use reqwest::blocking::Client;

use crate::params::USER_AGENT;

pub fn client() -> Result<Client, Box<dyn Error>> {
    let c = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()?;
    Ok(c)
}

pub fn http_get(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    logd!("GET {}", url);
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        loge!("HTTP error: {} {}", status, url);
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
