//! # Bridge Context
//!
//! The explicitly constructed root object: conversion policy, the function
//! registry, and whichever collaborator invokers this process actually has.
//! Library code takes `&Bridge`; a single process-wide default instance is
//! created lazily on first access for convenience call sites.

use std::sync::Arc;

use once_cell::sync::Lazy;

use pontecast::ConvertOptions;
use pontecast::Converter;
use pontecast::Value;

use crate::error::Result;
use crate::proxy::ExternalTarget;
use crate::proxy::NativeTarget;
use crate::registry::FunctionRegistry;
use crate::target::TargetDescriptor;
use crate::target::TargetKind;
use crate::traits::ExternalInvoker;
use crate::traits::NativeInvoker;

static DEFAULT: Lazy<Bridge> = Lazy::new(Bridge::new);

/// The process-wide default bridge, created on first access. Lives for the
/// rest of the process; there is no teardown.
pub fn bridge() -> &'static Bridge {
    &DEFAULT
}

/// Cross-language call context.
pub struct Bridge {
    converter: Converter,
    registry: FunctionRegistry,
    native: Option<Arc<dyn NativeInvoker>>,
    external: Option<Arc<dyn ExternalInvoker>>,
}

impl Bridge {
    /// A bridge with the default conversion policy and no collaborators.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> BridgeBuilder {
        BridgeBuilder::default()
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Registers a host function for cross-language calling.
    pub fn register_function<F>(&self, name: impl Into<String>, func: F) -> Result<()>
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.registry.register_fn(name, func)
    }

    /// Opens a native-library target at `location`.
    ///
    /// Symbol resolution is deferred; opening never touches the library.
    pub fn native(&self, location: impl Into<String>) -> Result<NativeTarget> {
        let descriptor = TargetDescriptor::new(TargetKind::NativeLibrary, location)?;
        Ok(NativeTarget::new(descriptor, self.converter, self.native.clone()))
    }

    /// Opens an external-interpreter target at `location`.
    pub fn external(&self, location: impl Into<String>) -> Result<ExternalTarget> {
        let descriptor = TargetDescriptor::new(TargetKind::ExternalInterpreter, location)?;
        Ok(ExternalTarget::new(descriptor, self.converter, self.external.clone()))
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

/// Fluent assembly of a bridge.
#[derive(Default)]
pub struct BridgeBuilder {
    options: ConvertOptions,
    native: Option<Arc<dyn NativeInvoker>>,
    external: Option<Arc<dyn ExternalInvoker>>,
}

impl BridgeBuilder {
    pub fn convert_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn native_invoker(mut self, invoker: Arc<dyn NativeInvoker>) -> Self {
        self.native = Some(invoker);
        self
    }

    pub fn external_invoker(mut self, invoker: Arc<dyn ExternalInvoker>) -> Self {
        self.external = Some(invoker);
        self
    }

    pub fn build(self) -> Bridge {
        Bridge {
            converter: Converter::new(self.options),
            registry: FunctionRegistry::new(),
            native: self.native,
            external: self.external,
        }
    }
}
