// Domain layer modules
pub mod gateway_response;
pub mod greeting;

// Re-exports
pub use gateway_response::{GatewayResponse, CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
pub use greeting::{GreetingBody, DEFAULT_NAME, DETAILS_TEXT};
