// Interface adapters: HTTP protocol, handlers and the upstream client.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
