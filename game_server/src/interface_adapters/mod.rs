// Interface adapters: wire protocol, WebSocket handling and outbound clients.

pub mod clients;
pub mod http;
pub mod net;
pub mod protocol;
pub mod state;
