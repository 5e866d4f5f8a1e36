//! Event binding descriptors and shape validation.
//!
//! A binding is either a bare event name, bound to the annotated node itself,
//! or a (selector, event) pair binding the event to matching descendants.
//! Typed constructors validate at construction; loose inputs (string slices,
//! JSON values coming out of template data) go through fallible constructors
//! that silently reject malformed shapes.

use serde_json::Value;

/// A validated event binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventBinding {
	/// A bare event name bound to the annotated node.
	Event(String),
	/// An event bound to descendants matched by a CSS selector.
	Scoped {
		/// The CSS selector scoping the handler.
		selector: String,
		/// The event name.
		event: String,
	},
}

impl EventBinding {
	/// Creates a bare event binding, trimming the name
	pub fn event(name: impl AsRef<str>) -> Self {
		Self::Event(name.as_ref().trim().to_string())
	}

	/// Creates a selector-scoped binding, trimming both parts
	pub fn scoped(selector: impl AsRef<str>, event: impl AsRef<str>) -> Self {
		Self::Scoped {
			selector: selector.as_ref().trim().to_string(),
			event: event.as_ref().trim().to_string(),
		}
	}

	/// Builds a scoped binding from a (selector, event) slice
	///
	/// Only slices of exactly two entries are accepted; anything else is
	/// rejected with `None`.
	pub fn from_parts<S: AsRef<str>>(parts: &[S]) -> Option<Self> {
		match parts {
			[selector, event] => Some(Self::scoped(selector, event)),
			_ => None,
		}
	}

	/// Builds a binding from a loose JSON value
	///
	/// A JSON string is a bare event name; a JSON array must hold exactly two
	/// strings (selector, event). Any other shape is rejected with `None`.
	pub fn from_json(value: &Value) -> Option<Self> {
		match value {
			Value::String(name) => Some(Self::event(name)),
			Value::Array(items) => match items.as_slice() {
				[Value::String(selector), Value::String(event)] => {
					Some(Self::scoped(selector, event))
				}
				_ => None,
			},
			_ => None,
		}
	}

	/// Returns the selector, empty for bare event bindings
	pub fn selector(&self) -> &str {
		match self {
			Self::Event(_) => "",
			Self::Scoped { selector, .. } => selector,
		}
	}

	/// Returns the event name
	pub fn event_name(&self) -> &str {
		match self {
			Self::Event(event) => event,
			Self::Scoped { event, .. } => event,
		}
	}
}

/// Loose binding input accepted by the formatter entry points.
///
/// Conversions exist for the shapes templates actually hand over: a bare
/// event name, a typed (selector, event) tuple, a string slice, a JSON value,
/// or an already validated [`EventBinding`]. Resolution applies the pair
/// shape policy and yields `None` for anything malformed.
#[derive(Debug, Clone)]
pub enum BindingInput<'a> {
	/// An already validated binding.
	Valid(EventBinding),
	/// A bare event name.
	Event(&'a str),
	/// A loose slice expected to be (selector, event).
	Parts(&'a [&'a str]),
	/// A loose JSON value.
	Json(&'a Value),
}

impl BindingInput<'_> {
	pub(crate) fn resolve(self) -> Option<EventBinding> {
		match self {
			Self::Valid(binding) => Some(binding),
			Self::Event(name) => Some(EventBinding::event(name)),
			Self::Parts(parts) => EventBinding::from_parts(parts),
			Self::Json(value) => EventBinding::from_json(value),
		}
	}
}

impl From<EventBinding> for BindingInput<'_> {
	fn from(binding: EventBinding) -> Self {
		Self::Valid(binding)
	}
}

impl<'a> From<&'a str> for BindingInput<'a> {
	fn from(event: &'a str) -> Self {
		Self::Event(event)
	}
}

impl<'a> From<(&'a str, &'a str)> for BindingInput<'a> {
	fn from((selector, event): (&'a str, &'a str)) -> Self {
		Self::Valid(EventBinding::scoped(selector, event))
	}
}

impl<'a> From<&'a [&'a str]> for BindingInput<'a> {
	fn from(parts: &'a [&'a str]) -> Self {
		Self::Parts(parts)
	}
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for BindingInput<'a> {
	fn from(parts: &'a [&'a str; N]) -> Self {
		Self::Parts(parts)
	}
}

impl<'a> From<&'a Value> for BindingInput<'a> {
	fn from(value: &'a Value) -> Self {
		Self::Json(value)
	}
}
