//! # jxn-attrs
//!
//! Formatters for the `jxn-*` custom HTML attribute vocabulary consumed by a
//! client-side dispatch runtime.
//!
//! Templates annotate DOM nodes with these attributes to attach registered
//! components and bind event handlers to serialized call expressions. This
//! crate produces those attribute fragments: class resolution goes through a
//! [`ComponentRegistry`], expressions serialize through [`JsExpr`], and the
//! [`AttrFormatter`] turns both into attribute text.
//!
//! Attribute vocabulary: `jxn-show`, `jxn-item`, `jxn-target`, `jxn-on`,
//! `jxn-event`, `jxn-call`, `jxn-select`.
//!
//! Malformed inputs (empty class names, bad event-pair shapes, classes with
//! no markup) degrade to empty strings instead of errors, because the output
//! is embedded directly into HTML templates.
//!
//! ## Examples
//!
//! ```rust
//! use jxn_attrs::{AttrFormatter, Component, ComponentRegistry, JsCall};
//! use std::sync::Arc;
//!
//! struct Counter;
//!
//! impl Component for Counter {
//! 	fn name(&self) -> &str {
//! 		"Counter"
//! 	}
//!
//! 	fn html(&self) -> String {
//! 		"<div>0</div>".to_string()
//! 	}
//! }
//!
//! let registry = Arc::new(ComponentRegistry::new());
//! registry.register_component("App.Counter", Counter).unwrap();
//!
//! let attrs = AttrFormatter::new(registry);
//! let call = JsCall::new("App.Counter");
//!
//! assert_eq!(attrs.html(&call), "<div>0</div>");
//! assert_eq!(attrs.show(&call, ""), r#"jxn-show="App.Counter""#);
//!
//! let fragment = attrs.on((".btn", "click"), &call.method("increment"));
//! assert!(fragment.starts_with(r#"jxn-on="click" jxn-call=""#));
//! assert!(fragment.ends_with(r#"jxn-select=".btn" "#));
//! ```

pub mod attr;
pub mod binding;
pub mod component;
pub mod error;
pub mod registry;
pub mod script;

pub use attr::{
	ATTR_CALL, ATTR_EVENT, ATTR_ITEM, ATTR_ON, ATTR_SELECT, ATTR_SHOW, ATTR_TARGET, AttrFormatter,
};
pub use binding::{BindingInput, EventBinding};
pub use component::Component;
pub use error::{AttrsError, Result};
pub use registry::ComponentRegistry;
pub use script::{CallKind, JsCall, JsExpr};
