mod request_draft;

pub use request_draft::{Field, RequestDraft, UnknownField};
