/// Greeting response body
///
/// The document returned for every invocation: a greeting message plus
/// a fixed details string. The body crosses the wire in its plain
/// textual form (see the `Display` impl), not as JSON.
use std::fmt;

/// Name used when the caller does not supply one
pub const DEFAULT_NAME: &str = "World";

/// Fixed details string identifying this function
pub const DETAILS_TEXT: &str = "Python Lambda function example";

/// Greeting response body document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingBody {
    /// Greeting message, always `Hello, {name}!`
    pub message: String,
    /// Function description, always `DETAILS_TEXT`
    pub details: String,
}

impl GreetingBody {
    /// Builds the body for the given caller name
    ///
    /// Falls back to `DEFAULT_NAME` when no name is supplied.
    pub fn new(name: Option<&str>) -> Self {
        Self {
            message: format!("Hello, {}!", name.unwrap_or(DEFAULT_NAME)),
            details: DETAILS_TEXT.to_string(),
        }
    }
}

impl fmt::Display for GreetingBody {
    /// Renders the textual form of the body:
    /// `{'message': 'Hello, World!', 'details': 'Python Lambda function example'}`
    ///
    /// Single-quoted map syntax, field order `message` then `details`,
    /// values embedded verbatim without escaping. The output is not
    /// valid JSON.
    // TODO: switch to serde_json serialization once a real HTTP client consumes the body
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'message': '{}', 'details': '{}'}}",
            self.message, self.details
        )
    }
}
