pub mod codec;
pub mod error;
pub mod mapping;
pub mod record;
pub mod value;

pub use remap_api_derive::Record;
