use crate::arg_spec::ArgSpec;
use crate::config::HitAreaConfig;
use crate::host::OverlayHost;
use crate::scale::RootScale;
use anyhow::Error;
use css_box::Edges;
use css_position::Position;
use css_values_units::format_px;
use log::{debug, warn};

/// What one [`HitAreaExpander::attach`] call produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayHandle<N> {
    host: N,
    overlay: N,
    padding: Option<Edges<f64>>,
    margin_top: f64,
    margin_left: f64,
}

impl<N: Copy> OverlayHandle<N> {
    pub fn host(&self) -> N {
        self.host
    }

    /// The injected overlay element.
    pub fn overlay(&self) -> N {
        self.overlay
    }

    /// Resolved per-side padding in pixels; `None` when the argument count was unsupported.
    pub fn padding(&self) -> Option<Edges<f64>> {
        self.padding
    }

    /// `(margin-top, margin-left)` in pixels, always `-half` of the padding along that axis.
    pub fn margins(&self) -> (f64, f64) {
        (self.margin_top, self.margin_left)
    }
}

/// Injects the padded, centered, transparent overlay into a host element.
#[derive(Clone, Debug)]
pub struct HitAreaExpander {
    overlay_tag: String,
}

impl Default for HitAreaExpander {
    fn default() -> Self {
        Self::new("span")
    }
}

impl HitAreaExpander {
    pub fn new(overlay_tag: impl Into<String>) -> Self {
        Self {
            overlay_tag: overlay_tag.into(),
        }
    }

    pub fn from_config(config: &HitAreaConfig) -> Self {
        Self::new(config.overlay_tag.clone())
    }

    /// Enlarge the hit area of `host`.
    ///
    /// Makes `host` `position: relative` when it is not positioned, appends one overlay
    /// child, pads it per `spec` scaled by `scale`, and centers it with negative margins
    /// of half the total padding on each axis. Every call appends a new overlay.
    ///
    /// Malformed input never fails the call: `NaN` lengths are rejected by the style
    /// layer and simply not applied, and an unsupported count leaves the overlay unpadded.
    ///
    /// # Errors
    /// Only when `host` is not a node of `tree`.
    pub fn attach<H: OverlayHost>(
        &self,
        tree: &mut H,
        host: H::Node,
        spec: &ArgSpec,
        scale: RootScale,
    ) -> Result<OverlayHandle<H::Node>, Error> {
        if tree.computed_position(host)? == Position::Static {
            tree.set_style_property(host, "position", Position::Relative.as_str())?;
        }

        let overlay = tree.create_overlay(&self.overlay_tag);
        tree.append_child(host, overlay)?;

        let padding = spec.insets(scale);
        tree.set_style_property(overlay, "background", "transparent")?;
        match (spec, padding) {
            (ArgSpec::One(_), Some(sides)) => {
                tree.set_style_property(overlay, "padding", &format_px(sides.top))?;
            }
            (_, Some(sides)) => {
                for (edge, value) in sides.iter() {
                    tree.set_style_property(overlay, &edge.longhand("padding"), &format_px(value))?;
                }
            }
            (_, None) => {
                warn!(
                    "Hit area argument has {} values, expected 1 to 4; overlay left unpadded",
                    spec.count()
                );
            }
        }

        let offset_height = padding.map_or(0.0, |sides| sides.vertical_sum());
        let offset_width = padding.map_or(0.0, |sides| sides.horizontal_sum());
        let margin_top = -0.5 * offset_height;
        let margin_left = -0.5 * offset_width;

        tree.set_style_property(overlay, "position", Position::Absolute.as_str())?;
        tree.set_style_property(overlay, "top", "50%")?;
        tree.set_style_property(overlay, "left", "50%")?;
        tree.set_style_property(overlay, "box-sizing", "border-box")?;
        tree.set_style_property(overlay, "margin-top", &format_px(margin_top))?;
        tree.set_style_property(overlay, "margin-left", &format_px(margin_left))?;

        if !scale.is_finite() {
            debug!("Root scale is not a number; overlay lengths were dropped");
        }
        debug!(
            "Attached overlay {overlay:?} to {host:?}: padding {padding:?}, margins ({margin_top}, {margin_left})"
        );

        Ok(OverlayHandle {
            host,
            overlay,
            padding,
            margin_top,
            margin_left,
        })
    }
}
