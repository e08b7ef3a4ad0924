//! Chain Subscription Configurator — Common Library
//!
//! UI-independent core shared by the web frontend: the pair-list model,
//! the validation engine, the query serializer and the workflow session.

pub mod api;
pub mod error;
pub mod feedback;
pub mod pairs;
pub mod query;
pub mod session;
pub mod validate;

pub use api::{BackendLog, DetectResponse, ValidateRequest, ValidateResponse};
pub use error::{Error, Result};
pub use feedback::{FeedbackEntry, FeedbackLog, Level, MAX_LOG_ENTRIES};
pub use pairs::{PairList, PairRow, PairValues, MAX_PAIRS};
pub use query::{serialize_pairs, subscription_url, DEFAULT_SERVICE_ROOT};
pub use session::{DetectRequest, GenerateRequest, Session};
pub use validate::{classify, validate_for_submission, validate_remote_source, PairClass};
