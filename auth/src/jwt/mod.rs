pub mod claims;
pub mod errors;
pub mod extractor;
pub mod issuer;

pub use claims::TokenClaims;
pub use errors::AuthenticationError;
pub use errors::IssueError;
pub use extractor::extract;
pub use extractor::extract_at;
pub use issuer::issue;
pub use issuer::issue_at;
pub use issuer::sign;
