//! Facts extracted from a package archive by an analysis provider.
//!
//! Providers produce an `ApplicationFacts`. The classification engine
//! consumes an `ApplicationFacts`. This decouples archive unpacking and
//! bytecode disassembly from the risk rules that judge the result.

pub mod json;

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything the classifier needs to know about one application package.
///
/// Permissions are a set (declaring a permission twice is meaningless);
/// method descriptors are an ordered sequence and may repeat, since each
/// occurrence is a distinct usage site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFacts {
    /// Display name of the application.
    pub app_name: String,
    /// Package identifier, e.g. `com.example.app`. Primary key for reports.
    pub package: String,
    /// Permissions declared in the manifest.
    pub permissions: BTreeSet<String>,
    /// Methods discovered in the bytecode, in disassembly order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

/// A callable unit, identified by its defining class and method name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub class_name: String,
    pub method_name: String,
}

impl MethodDescriptor {
    pub fn new(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
        }
    }

    /// The fully-qualified descriptor string the rules match against,
    /// `Class->method`, e.g. `Landroid/webkit/WebView;->addJavascriptInterface`.
    pub fn descriptor(&self) -> String {
        format!("{}->{}", self.class_name, self.method_name)
    }
}

/// An analysis provider turns a package archive path into facts.
///
/// Unpacking and disassembly happen behind this seam; any failure to
/// open or parse the archive surfaces as a single typed error, never as
/// partial facts.
pub trait FactsProvider: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Extract facts for the archive at `path`.
    fn load(&self, path: &Path) -> Result<ApplicationFacts>;
}
