use std::fmt;

use gloo_net::http::Request;
use serde::Serialize;

use crate::config;
use crate::wizard::state::Lead;

/// Body shape expected by the transactional-email relay: fixed identifiers
/// plus the lead as template parameters.
#[derive(Serialize)]
struct RelayEnvelope<'a> {
    service_id: &'static str,
    template_id: &'static str,
    user_id: &'static str,
    template_params: &'a Lead,
}

/// The one failure mode of the wizard: the outbound dispatch did not go
/// through. Reported to the user as a toast, never propagated further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    Build(String),
    Http(u16),
    Network(String),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Build(msg) => write!(f, "failed to build request: {}", msg),
            SendError::Http(status) => write!(f, "relay answered with status {}", status),
            SendError::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

/// One-shot dispatch of a lead to the relay. No retry here; the popup keeps
/// the form intact so the user can resubmit.
pub async fn send_lead(lead: &Lead) -> Result<(), SendError> {
    let envelope = RelayEnvelope {
        service_id: config::RELAY_SERVICE_ID,
        template_id: config::RELAY_TEMPLATE_ID,
        user_id: config::RELAY_PUBLIC_KEY,
        template_params: lead,
    };
    let response = Request::post(config::relay_endpoint())
        .json(&envelope)
        .map_err(|e| SendError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| SendError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SendError::Http(response.status()))
    }
}
