//! Wire formats exchanged with the search endpoint and the webhook.

pub mod search;
pub mod webhook;
