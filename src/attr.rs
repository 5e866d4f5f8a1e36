//! Formatters for the `jxn-*` attribute vocabulary.
//!
//! These helpers produce the attribute fragments a template embeds on a DOM
//! node so the client runtime can attach components and event handlers.
//! Output is plain attribute text; anything malformed degrades to an empty
//! string rather than an error, since the result lands directly in markup.

use crate::binding::{BindingInput, EventBinding};
use crate::registry::ComponentRegistry;
use crate::script::{JsCall, JsExpr};
use std::sync::Arc;
use tracing::debug;

/// Attribute attaching a component to a DOM node.
pub const ATTR_SHOW: &str = "jxn-show";
/// Attribute naming the item a component instance is bound to.
pub const ATTR_ITEM: &str = "jxn-item";
/// Attribute marking a node as a target for event handler definitions.
pub const ATTR_TARGET: &str = "jxn-target";
/// Attribute binding a handler with the `on` keyword.
pub const ATTR_ON: &str = "jxn-on";
/// Attribute binding a handler with the `event` keyword.
pub const ATTR_EVENT: &str = "jxn-event";
/// Attribute carrying the serialized call expression.
pub const ATTR_CALL: &str = "jxn-call";
/// Attribute scoping a handler to descendants matched by a selector.
pub const ATTR_SELECT: &str = "jxn-select";

/// Formatter for the `jxn-*` custom HTML attributes.
///
/// Stateless apart from a read-only handle on the class registry; every
/// operation is a pure function of its inputs and the registry contents.
///
/// # Examples
///
/// ```rust
/// use jxn_attrs::{AttrFormatter, ComponentRegistry, JsCall};
/// use std::sync::Arc;
///
/// let registry = Arc::new(ComponentRegistry::new());
/// let attrs = AttrFormatter::new(registry);
///
/// let call = JsCall::new("App.Counter");
/// assert_eq!(attrs.show(&call, ""), r#"jxn-show="App.Counter""#);
///
/// let expr = call.method("increment");
/// let fragment = attrs.click(&expr);
/// assert!(fragment.starts_with(r#"jxn-on="click" jxn-call=""#));
/// ```
pub struct AttrFormatter {
	registry: Arc<ComponentRegistry>,
}

impl AttrFormatter {
	/// Creates a formatter over the given class registry
	pub fn new(registry: Arc<ComponentRegistry>) -> Self {
		Self { registry }
	}

	/// Returns the HTML markup of the component the call refers to
	///
	/// Yields an empty string when the class name is empty, unknown, or
	/// registered without markup.
	pub fn html(&self, call: &JsCall) -> String {
		let class_name = call.class_name();
		if class_name.is_empty() {
			return String::new();
		}

		match self.registry.component(class_name) {
			Some(component) => component.html(),
			None => {
				debug!(class = class_name, "class does not render markup");
				String::new()
			}
		}
	}

	/// Attaches a component to a DOM node
	///
	/// The item is trimmed; when non-empty it is appended as a `jxn-item`
	/// segment. The class name is emitted as-is.
	pub fn show(&self, call: &JsCall, item: &str) -> String {
		let item = item.trim();
		if item.is_empty() {
			format!(r#"{ATTR_SHOW}="{}""#, call.class_name())
		} else {
			format!(r#"{ATTR_SHOW}="{}" {ATTR_ITEM}="{item}""#, call.class_name())
		}
	}

	/// Marks a node as a target for event handler definitions
	pub fn target(&self, name: &str) -> String {
		format!(r#"{ATTR_TARGET}="{}""#, name.trim())
	}

	/// Binds an event handler with the `on` keyword
	///
	/// Accepts a bare event name, a (selector, event) pair, or a loose
	/// slice/JSON shape; malformed shapes yield an empty string.
	pub fn on<'a>(&self, binding: impl Into<BindingInput<'a>>, expr: &JsExpr) -> String {
		match binding.into().resolve() {
			Some(binding) => {
				self.event_attr(binding.selector(), binding.event_name(), ATTR_ON, expr)
			}
			None => {
				debug!("rejected malformed event binding");
				String::new()
			}
		}
	}

	/// Shortcut binding a click event handler
	pub fn click(&self, expr: &JsExpr) -> String {
		self.on("click", expr)
	}

	/// Binds an event handler with the `event` keyword
	///
	/// Requires the selector-scoped (selector, event) form; a bare event name
	/// or a malformed shape yields an empty string.
	pub fn event<'a>(&self, pair: impl Into<BindingInput<'a>>, expr: &JsExpr) -> String {
		match pair.into().resolve() {
			Some(EventBinding::Scoped { selector, event }) => {
				self.event_attr(&selector, &event, ATTR_EVENT, expr)
			}
			_ => {
				debug!("rejected event binding without a selector pair");
				String::new()
			}
		}
	}

	/// Builds the handler attribute fragment shared by `on` and `event`
	///
	/// The expression is JSON-encoded then HTML-escaped for a double-quoted
	/// attribute. A non-empty selector appends a `jxn-select` segment with a
	/// trailing space, directly after the call segment.
	fn event_attr(&self, selector: &str, event: &str, attr: &str, expr: &JsExpr) -> String {
		let Ok(json) = expr.to_json() else {
			debug!(attr, event, "expression did not serialize");
			return String::new();
		};
		let call = html_escape::encode_double_quoted_attribute(&json);

		let mut fragment = format!(r#"{attr}="{event}" {ATTR_CALL}="{call}""#);
		if !selector.is_empty() {
			fragment.push_str(&format!(r#"{ATTR_SELECT}="{selector}" "#));
		}
		fragment
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::Component;

	struct Counter;

	impl Component for Counter {
		fn name(&self) -> &str {
			"Counter"
		}

		fn html(&self) -> String {
			"<div id=\"counter\">0</div>".to_string()
		}
	}

	fn formatter() -> AttrFormatter {
		let registry = Arc::new(ComponentRegistry::new());
		registry.register_component("App.Counter", Counter).unwrap();
		registry.register("App.Search").unwrap();
		AttrFormatter::new(registry)
	}

	#[test]
	fn test_html_renders_registered_component() {
		let attrs = formatter();
		let call = JsCall::new("App.Counter");
		assert_eq!(attrs.html(&call), "<div id=\"counter\">0</div>");
	}

	#[test]
	fn test_html_empty_class_name() {
		let attrs = formatter();
		assert_eq!(attrs.html(&JsCall::new("")), "");
	}

	#[test]
	fn test_html_plain_class_has_no_markup() {
		let attrs = formatter();
		assert_eq!(attrs.html(&JsCall::new("App.Search")), "");
	}

	#[test]
	fn test_html_unknown_class() {
		let attrs = formatter();
		assert_eq!(attrs.html(&JsCall::new("App.Missing")), "");
	}

	#[test]
	fn test_show_without_item() {
		let attrs = formatter();
		let call = JsCall::new("App.Counter");
		assert_eq!(attrs.show(&call, ""), r#"jxn-show="App.Counter""#);
		assert_eq!(attrs.show(&call, "   "), r#"jxn-show="App.Counter""#);
	}

	#[test]
	fn test_show_with_item_trimmed() {
		let attrs = formatter();
		let call = JsCall::new("App.Counter");
		assert_eq!(
			attrs.show(&call, "  first  "),
			r#"jxn-show="App.Counter" jxn-item="first""#
		);
	}

	#[test]
	fn test_target_trims_name() {
		let attrs = formatter();
		assert_eq!(attrs.target("  pane  "), r#"jxn-target="pane""#);
		assert_eq!(attrs.target(""), r#"jxn-target="""#);
	}

	#[test]
	fn test_on_bare_event() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		let fragment = attrs.on("click", &expr);
		assert!(fragment.starts_with(r#"jxn-on="click" jxn-call=""#));
		assert!(!fragment.contains(ATTR_SELECT));
	}

	#[test]
	fn test_on_trims_event_name() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		assert_eq!(attrs.on(" click ", &expr), attrs.on("click", &expr));
	}

	#[test]
	fn test_click_equals_on_click() {
		let attrs = formatter();
		let expr = JsCall::new("App.Counter").method("increment");
		assert_eq!(attrs.click(&expr), attrs.on("click", &expr));
	}

	#[test]
	fn test_on_with_selector_pair() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		let fragment = attrs.on((".row", "click"), &expr);
		assert!(fragment.starts_with(r#"jxn-on="click" jxn-call=""#));
		assert!(fragment.ends_with(r#"jxn-select=".row" "#));
	}

	#[test]
	fn test_on_rejects_three_entry_slice() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		assert_eq!(attrs.on(&["a", "b", "c"], &expr), "");
	}

	#[test]
	fn test_event_requires_selector_pair() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		assert_eq!(attrs.event("click", &expr), "");
		assert_eq!(attrs.event(&["a", "b", "c"], &expr), "");

		let fragment = attrs.event((".row", "click"), &expr);
		assert!(fragment.starts_with(r#"jxn-event="click" jxn-call=""#));
		assert!(fragment.ends_with(r#"jxn-select=".row" "#));
	}

	#[test]
	fn test_event_matches_on_ordering() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		let on = attrs.on((".row", "click"), &expr);
		let event = attrs.event((".row", "click"), &expr);
		assert_eq!(
			on.strip_prefix("jxn-on").unwrap(),
			event.strip_prefix("jxn-event").unwrap()
		);
	}

	#[test]
	fn test_scoped_binding_with_blank_selector_renders_bare() {
		let attrs = formatter();
		let expr = JsExpr::func("refresh");
		assert_eq!(attrs.on(("  ", "click"), &expr), attrs.on("click", &expr));
	}
}
