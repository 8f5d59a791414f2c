//! Collaborator interfaces the bridge consumes but does not implement.
//!
//! The two invokers are how real transports plug in:
//!
//! - **NativeInvoker**: given a library location and a function name, perform
//!   the in-process native call. (dlopen/FFI, a generated shim, ...)
//! - **ExternalInvoker**: the same contract against an interpreter running
//!   elsewhere. (a subprocess with a pipe protocol, a socket RPC, ...)
//!
//! Both speak marshalled values only; argument conversion happens before an
//! invoker is reached, so implementations never see host values. Failures
//! are arbitrary (`anyhow`) and get wrapped into the bridge taxonomy by the
//! calling proxy.

use pontepack::BridgeValue;

/// In-process native library invocation.
pub trait NativeInvoker: Send + Sync + 'static {
    /// Invokes `function` from the library at `library` with marshalled
    /// arguments, returning the marshalled result.
    fn invoke(
        &self,
        library: &str,
        function: &str,
        args: &[BridgeValue],
    ) -> anyhow::Result<BridgeValue>;
}

/// Out-of-process interpreter invocation.
///
/// Asynchronous: the caller suspends until the interpreter resolves or
/// rejects the call. Completion order across in-flight calls is the
/// collaborator's business and is not guaranteed to match issue order.
#[async_trait::async_trait]
pub trait ExternalInvoker: Send + Sync + 'static {
    /// Invokes `function` from the module at `module` with marshalled
    /// arguments, resolving to the marshalled result.
    async fn invoke(
        &self,
        module: &str,
        function: &str,
        args: &[BridgeValue],
    ) -> anyhow::Result<BridgeValue>;
}
