//! Hit-area expansion for DOM elements.
//!
//! An invisible, absolutely positioned overlay is appended to a host element and padded
//! on each side, so pointer input landing near the host still lands on the host's
//! subtree. The visual size of the host never changes.
//!
//! ```text
//! <div><i v-trigger-area:10*20*30*40></i></div>
//! ```
//!
//! | Argument      | top | right | bottom | left |
//! |---------------|-----|-------|--------|------|
//! | `10`          | 10  | 10    | 10     | 10   |
//! | `10*20`       | 10  | 20    | 10     | 20   |
//! | `10*20*30`    | 10  | 20    | 30     | 20   |
//! | `10*20*30*40` | 10  | 20    | 30     | 40   |
//!
//! Values are unitless and multiplied by a [`RootScale`] to get pixels.

pub mod arg_spec;
pub mod config;
pub mod cssom;
pub mod directive;
pub mod expander;
pub mod host;
pub mod scale;

pub use arg_spec::{ArgSpec, ArgSpecError};
pub use config::HitAreaConfig;
pub use cssom::CssStyleDeclaration;
pub use directive::{DirectiveBinding, TriggerAreaDirective, mount_directives};
pub use expander::{HitAreaExpander, OverlayHandle};
pub use host::OverlayHost;
pub use scale::RootScale;
