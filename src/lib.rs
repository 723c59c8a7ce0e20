//! Client-side core for the profile settings forms: session resolution, snapshot loading and
//! caching, edit buffers, field validation, mutations and transient notices.

pub mod cache;
pub mod dispatch;
pub mod edit_buffer;
pub mod error;
pub mod forms;
pub mod loader;
pub mod logging;
pub mod model;
pub mod notify;
pub mod photo;
pub mod remote;
pub mod session;
pub mod store;
pub mod validate;

pub use self::error::ProfileError;
pub use self::forms::{PersonalInfoForm, SocialLinksForm};
