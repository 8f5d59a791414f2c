// crates/ponterun/src/lib.rs
//! Function registry, call target proxies, and the bridge context that ties
//! marshalling to the collaborator interfaces.

pub mod bridge;
pub mod error;
pub mod proxy;
pub mod registry;
pub mod target;
pub mod traits;


pub use crate::error::BridgeError;
pub use crate::error::ErrorCode;
pub use crate::error::Result;

pub use crate::registry::FunctionRegistry;

pub use crate::target::TargetDescriptor;
pub use crate::target::TargetKind;

pub use crate::traits::ExternalInvoker;
pub use crate::traits::NativeInvoker;

pub use crate::proxy::ExternalCall;
pub use crate::proxy::ExternalTarget;
pub use crate::proxy::NativeCall;
pub use crate::proxy::NativeTarget;

pub use crate::bridge::Bridge;
pub use crate::bridge::BridgeBuilder;
pub use crate::bridge::bridge;
