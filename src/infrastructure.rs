// Infrastructure layer modules
pub mod invocation_context;
pub mod logging;

// Re-exports
pub use invocation_context::{ClientContext, CognitoIdentity, InvocationContext, MobileClient};
pub use logging::init_logging;
