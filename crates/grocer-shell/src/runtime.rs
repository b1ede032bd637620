//! Executes shell lookup requests against a [`PriceLookup`].

use grocer_lookup::{LookupError, PriceLookup, Shop};

use crate::state::{LookupRequest, LookupTicket};

/// A finished lookup, ready for [`crate::Shell::complete_lookup`].
#[derive(Debug)]
pub struct LookupCompletion {
    pub ticket: LookupTicket,
    pub result: Result<Vec<Shop>, LookupError>,
}

/// Runs `request` and pairs the outcome with its ticket.
///
/// Borrows nothing from the shell, so several of these can be in flight
/// while the shell keeps handling input.
pub async fn run_lookup<L: PriceLookup>(lookup: &L, request: LookupRequest) -> LookupCompletion {
    let result = lookup
        .lookup_shops(&request.item_name, &request.location)
        .await;
    LookupCompletion {
        ticket: request.ticket,
        result,
    }
}
