//! Native bridge facade
//!
//! A [`NativeBridge`] runs the provider's own sign-in UI and hands back the
//! raw provider result. Platform hosts implement it over their message
//! transport; [`WebBridge`] implements it on top of a browser-capable backend
//! for contexts without a native layer.

mod errors;
mod events;
mod traits;
mod types;
mod web;

pub use errors::BridgeError;
pub use events::{
    CODE_RECEIVED_EVENT, CODE_SENT_EVENT, CodeReceivedEvent, CodeReceivedListener, CodeSentEvent,
    CodeSentListener, PhoneEvents, PhoneListener,
};
pub use traits::NativeBridge;
pub use types::{BridgeOperation, BridgeResponse, Platform};
pub use web::WebBridge;
