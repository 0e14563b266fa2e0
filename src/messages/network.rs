//! Network messages - communication between App and Network layers

use crate::models::Country;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Download the full country list
    FetchCountries {
        id: u64,
        url: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Part of the body has arrived
    Progress {
        id: u64,
        bytes_received: usize,
    },
    /// Country list downloaded and decoded
    Countries {
        id: u64,
        countries: Vec<Country>,
        time_ms: u64,
    },
    /// Transport, status or decode failure
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Progress { id, .. } => *id,
            NetworkResponse::Countries { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    /// Check if this is a terminal response (no more messages expected for this id)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            NetworkResponse::Countries { .. } | NetworkResponse::Error { .. }
        )
    }
}
