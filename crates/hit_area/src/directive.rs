//! Declarative `v-trigger-area:<arg>` support.
//!
//! [`TriggerAreaDirective`] watches the DOM mutation log for inserted elements and runs
//! its `inserted` hook once for every inserted element carrying the directive attribute.

use crate::arg_spec::ArgSpec;
use crate::config::HitAreaConfig;
use crate::expander::{HitAreaExpander, OverlayHandle};
use crate::scale::RootScale;
use anyhow::Error;
use html::{DOM, DOMSubscriber, DOMUpdate, NodeId};
use log::{debug, warn};

/// The binding object handed to the `inserted` hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectiveBinding {
    /// Raw argument after the colon, e.g. `10*20*30*40`.
    pub arg: String,
}

impl DirectiveBinding {
    /// Extract the binding from an attribute name such as `v-trigger-area:10*20`,
    /// given the `v-trigger-area:` prefix.
    pub fn from_attribute_name(name: &str, prefix: &str) -> Option<Self> {
        let arg = name.strip_prefix(prefix)?;
        Some(Self {
            arg: arg.to_owned(),
        })
    }

    /// First directive binding among the attributes of `node`.
    pub fn find(dom: &DOM, node: NodeId, prefix: &str) -> Option<Self> {
        dom.attributes(node)
            .find_map(|(name, _)| Self::from_attribute_name(name, prefix))
    }
}

pub struct TriggerAreaDirective {
    config: HitAreaConfig,
    prefix: String,
    expander: HitAreaExpander,
    pending: Vec<NodeId>,
}

impl TriggerAreaDirective {
    pub fn new(config: HitAreaConfig) -> Self {
        Self {
            prefix: config.attribute_prefix(),
            expander: HitAreaExpander::from_config(&config),
            config,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &HitAreaConfig {
        &self.config
    }

    /// Hook run once `host` is attached to a parent.
    ///
    /// The root scale is read from the document on every call. Returns `Ok(None)` only in
    /// strict mode, when the argument is rejected.
    ///
    /// # Errors
    /// Only when `host` is not part of `dom`.
    pub fn inserted(
        &self,
        dom: &mut DOM,
        host: NodeId,
        binding: &DirectiveBinding,
    ) -> Result<Option<OverlayHandle<NodeId>>, Error> {
        let scale = RootScale::from_document(
            dom,
            &self.config.root_scale_attribute,
            self.config.scale_divisor,
        );
        let spec = if self.config.strict {
            match ArgSpec::parse_strict(&binding.arg, self.config.delimiter) {
                Ok(spec) => spec,
                Err(err) => {
                    warn!("Skipping hit area on {host:?}: {err}");
                    return Ok(None);
                }
            }
        } else {
            ArgSpec::parse_lenient(&binding.arg, self.config.delimiter)
        };
        self.expander.attach(dom, host, &spec, scale).map(Some)
    }

    /// Run `inserted` for every queued element that still has a parent and carries the
    /// directive. The queue is emptied.
    ///
    /// # Errors
    /// Propagates the first attach error.
    pub fn flush(&mut self, dom: &mut DOM) -> Result<Vec<OverlayHandle<NodeId>>, Error> {
        let mut handles = Vec::new();
        for host in std::mem::take(&mut self.pending) {
            if dom.parent(host).is_none() {
                continue;
            }
            let Some(binding) = DirectiveBinding::find(dom, host, &self.prefix) else {
                continue;
            };
            if let Some(handle) = self.inserted(dom, host, &binding)? {
                handles.push(handle);
            }
        }
        debug!("Directive flush attached {} overlays", handles.len());
        Ok(handles)
    }
}

impl DOMSubscriber for TriggerAreaDirective {
    fn apply_update(&mut self, update: DOMUpdate) -> Result<(), Error> {
        if let DOMUpdate::InsertElement { node, .. } = update
            && !self.pending.contains(&node)
        {
            self.pending.push(node);
        }
        Ok(())
    }
}

/// Replay the pending mutation log of `dom` through a fresh directive and flush it.
///
/// # Errors
/// Propagates attach errors.
pub fn mount_directives(
    dom: &mut DOM,
    config: &HitAreaConfig,
) -> Result<Vec<OverlayHandle<NodeId>>, Error> {
    let mut directive = TriggerAreaDirective::new(config.clone());
    dom.flush_to(&mut directive)?;
    directive.flush(dom)
}
