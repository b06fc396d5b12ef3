//! Plugins and the host they start against.
//!
//! A [`SheetHost`] owns the live state and the two hook services. Plugins get
//! the host handed to them when they start and register whatever they need;
//! nothing is looked up through a global registry.

use cellmeta_core::document::apply_mutation;
use cellmeta_core::{
    AutoFillService, CellCustomAutoFillController, CellCustomCopyPasteController,
    CellCustomOptions, ClipboardService, InstanceService, MutationInfo,
};

use crate::error::{CellMetaError, Result};

pub const AUTO_FILL_PLUGIN_NAME: &str = "SHEET_CELL_CUSTOM_AUTO_FILL_PLUGIN";
pub const CLIPBOARD_PLUGIN_NAME: &str = "SHEET_CLIPBOARD_CELL_CUSTOM_PLUGIN";

pub trait Plugin: Send {
    fn name(&self) -> &str;

    /// Called once, right after registration.
    fn on_starting(&mut self, host: &SheetHost);

    /// Undo whatever `on_starting` registered. Must tolerate repeated calls.
    fn dispose(&mut self);
}

/// The services a sheet editor exposes to plugins.
pub struct SheetHost {
    pub instances: InstanceService,
    pub auto_fill: AutoFillService,
    pub clipboard: ClipboardService,
    plugins: Vec<Box<dyn Plugin>>,
}

impl SheetHost {
    pub fn new(instances: InstanceService) -> Self {
        Self {
            instances,
            auto_fill: AutoFillService::new(),
            clipboard: ClipboardService::new(),
            plugins: Vec::new(),
        }
    }

    /// Start `plugin` and keep it until the host is disposed.
    pub fn register_plugin(&mut self, plugin: impl Plugin + 'static) -> Result<()> {
        let name = plugin.name().to_string();
        if self.plugins.iter().any(|p| p.name() == name) {
            return Err(CellMetaError::DuplicatePlugin(name));
        }
        let mut plugin = Box::new(plugin);
        plugin.on_starting(self);
        tracing::debug!(plugin = %name, "plugin started");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Register both custom-metadata plugins with the given options.
    pub fn register_cell_custom_plugins(&mut self, options: CellCustomOptions) -> Result<()> {
        self.register_plugin(CellCustomAutoFillPlugin::new(options))?;
        self.register_plugin(CellCustomPastePlugin::new(options))
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Apply mutations in order, stopping at the first failure.
    pub fn apply_mutations(&self, mutations: &[MutationInfo]) -> Result<()> {
        for mutation in mutations {
            apply_mutation(&self.instances, mutation)?;
        }
        Ok(())
    }

    /// Dispose every plugin, most recently registered first.
    pub fn dispose(&mut self) {
        while let Some(mut plugin) = self.plugins.pop() {
            tracing::debug!(plugin = %plugin.name(), "disposing plugin");
            plugin.dispose();
        }
    }
}

impl Drop for SheetHost {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Copies custom metadata across autofill targets.
pub struct CellCustomAutoFillPlugin {
    options: CellCustomOptions,
    controller: Option<CellCustomAutoFillController>,
}

impl CellCustomAutoFillPlugin {
    pub fn new(options: CellCustomOptions) -> Self {
        Self {
            options,
            controller: None,
        }
    }
}

impl Plugin for CellCustomAutoFillPlugin {
    fn name(&self) -> &str {
        AUTO_FILL_PLUGIN_NAME
    }

    fn on_starting(&mut self, host: &SheetHost) {
        self.controller = Some(CellCustomAutoFillController::new(
            &host.auto_fill,
            host.instances.clone(),
            &self.options,
        ));
    }

    fn dispose(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.dispose();
        }
    }
}

/// Copies custom metadata from pasted cells onto their destinations.
pub struct CellCustomPastePlugin {
    options: CellCustomOptions,
    controller: Option<CellCustomCopyPasteController>,
}

impl CellCustomPastePlugin {
    pub fn new(options: CellCustomOptions) -> Self {
        Self {
            options,
            controller: None,
        }
    }
}

impl Plugin for CellCustomPastePlugin {
    fn name(&self) -> &str {
        CLIPBOARD_PLUGIN_NAME
    }

    fn on_starting(&mut self, host: &SheetHost) {
        self.controller = Some(CellCustomCopyPasteController::new(
            &host.clipboard,
            host.instances.clone(),
            &self.options,
        ));
    }

    fn dispose(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.dispose();
        }
    }
}
