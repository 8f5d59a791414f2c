// crates/pontepack/src/lib.rs
//! The language-neutral tagged value and its canonical JSON wire codec.

mod decode;
mod encode;
mod types;
mod value;


pub use crate::types::Result;
pub use crate::types::Error;
pub use crate::types::Tag;

pub use crate::value::BridgeValue;

pub use crate::encode::encode_value;
pub use crate::encode::to_json;

pub use crate::decode::decode_value;
pub use crate::decode::from_json;
