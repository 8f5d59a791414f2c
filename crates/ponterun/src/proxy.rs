//! # Call Target Proxies
//!
//! Turns "call function X on target T" into marshal, delegate, unmarshal.
//! Nothing is resolved eagerly: which names are callable is known only to
//! the foreign artifact, so any name is accepted and becomes a call
//! descriptor at invocation time.
//!
//! ## Invariants
//!
//! - With no collaborator installed, every call fails `Unsupported`, for any
//!   function name, before arguments are even marshalled.
//! - Collaborator failures come back wrapped as `Runtime`, tagged with the
//!   target location and function name.

use std::sync::Arc;

use tracing::debug;

use pontecast::Converter;
use pontecast::Value;
use pontepack::BridgeValue;

use crate::error::BridgeError;
use crate::error::Result;
use crate::target::TargetDescriptor;
use crate::traits::ExternalInvoker;
use crate::traits::NativeInvoker;

/// Proxy for a native shared library.
#[derive(Clone)]
pub struct NativeTarget {
    descriptor: TargetDescriptor,
    converter: Converter,
    invoker: Option<Arc<dyn NativeInvoker>>,
}

impl NativeTarget {
    pub(crate) fn new(
        descriptor: TargetDescriptor,
        converter: Converter,
        invoker: Option<Arc<dyn NativeInvoker>>,
    ) -> Self {
        Self { descriptor, converter, invoker }
    }

    pub fn descriptor(&self) -> &TargetDescriptor {
        &self.descriptor
    }

    /// Calls a named function with host arguments.
    pub fn call(&self, function: &str, args: &[Value]) -> Result<Value> {
        let invoker = self.invoker.as_ref().ok_or_else(|| {
            BridgeError::Unsupported("native interop not available".into())
        })?;

        let marshalled = marshal_args(&self.converter, args)?;
        debug!(location = %self.descriptor, function, argc = args.len(), "native dispatch");

        let result = invoker
            .invoke(self.descriptor.location(), function, &marshalled)
            .map_err(|e| wrap(&self.descriptor, function, e))?;

        Ok(self.converter.from_bridge(&result))
    }

    /// Starts a fluent call against this target.
    pub fn func(&self, function: impl Into<String>) -> NativeCall<'_> {
        NativeCall {
            target: self,
            function: function.into(),
            args: Vec::new(),
        }
    }
}

/// Proxy for a module behind an external interpreter.
#[derive(Clone)]
pub struct ExternalTarget {
    descriptor: TargetDescriptor,
    converter: Converter,
    invoker: Option<Arc<dyn ExternalInvoker>>,
}

impl ExternalTarget {
    pub(crate) fn new(
        descriptor: TargetDescriptor,
        converter: Converter,
        invoker: Option<Arc<dyn ExternalInvoker>>,
    ) -> Self {
        Self { descriptor, converter, invoker }
    }

    pub fn descriptor(&self) -> &TargetDescriptor {
        &self.descriptor
    }

    /// Calls a named function with host arguments, suspending until the
    /// interpreter resolves or rejects it.
    pub async fn call(&self, function: &str, args: &[Value]) -> Result<Value> {
        let invoker = self.invoker.as_ref().ok_or_else(|| {
            BridgeError::Unsupported("external interop not available".into())
        })?;

        let marshalled = marshal_args(&self.converter, args)?;
        debug!(location = %self.descriptor, function, argc = args.len(), "external dispatch");

        let result = invoker
            .invoke(self.descriptor.location(), function, &marshalled)
            .await
            .map_err(|e| wrap(&self.descriptor, function, e))?;

        Ok(self.converter.from_bridge(&result))
    }

    /// Starts a fluent call against this target.
    pub fn func(&self, function: impl Into<String>) -> ExternalCall<'_> {
        ExternalCall {
            target: self,
            function: function.into(),
            args: Vec::new(),
        }
    }
}

/// Fluent argument collector for a native call:
/// `lib.func("add").arg(10).arg(5).invoke()`.
pub struct NativeCall<'t> {
    target: &'t NativeTarget,
    function: String,
    args: Vec<Value>,
}

impl NativeCall<'_> {
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn invoke(self) -> Result<Value> {
        self.target.call(&self.function, &self.args)
    }
}

/// Fluent argument collector for an external call:
/// `module.func("add").arg(10).arg(5).invoke().await`.
pub struct ExternalCall<'t> {
    target: &'t ExternalTarget,
    function: String,
    args: Vec<Value>,
}

impl ExternalCall<'_> {
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub async fn invoke(self) -> Result<Value> {
        self.target.call(&self.function, &self.args).await
    }
}

fn marshal_args(converter: &Converter, args: &[Value]) -> Result<Vec<BridgeValue>> {
    let mut marshalled = Vec::with_capacity(args.len());
    for arg in args {
        marshalled.push(converter.to_bridge(arg)?);
    }
    Ok(marshalled)
}

fn wrap(descriptor: &TargetDescriptor, function: &str, e: anyhow::Error) -> BridgeError {
    BridgeError::Runtime {
        target: Some(descriptor.location().to_string()),
        function: function.to_string(),
        message: format!("{:#}", e),
    }
}
