//! JSON boundary handlers
//!
//! Thin view layer over the inferencer, the file store and the
//! collection controller. Every handler returns a JSON document with an
//! integer `status`; faults are folded into the document, never raised
//! past the boundary.
//!
//! Status vocabulary: 0 = success, 1 = recoverable user-facing failure
//! (unsupported format, partial import), -1 = internal failure, 2 = bulk
//! import where nothing was imported.

mod handlers;
mod messages;
mod requests;

pub use handlers::CollectionApi;
pub use messages::Messages;
pub use requests::{CollectionSpec, CreateCollectionRequest, ParseFieldsRequest};
