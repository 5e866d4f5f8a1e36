//! Class registry for client-side dispatch.
//!
//! Maps class names to their registered entries. An entry either carries a
//! [`Component`] able to render its own markup, or marks a plain class that
//! is exported to client-side dispatch without any markup of its own. Lookup
//! returns a tagged optional, so callers never need a runtime type test to
//! ask "can this class render itself".

use crate::component::Component;
use crate::error::{AttrsError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A registered class entry.
#[derive(Clone)]
enum ClassEntry {
	/// A class that renders its own markup.
	Component(Arc<dyn Component>),
	/// A dispatch-only class with no markup.
	Plain,
}

/// Registry of classes exported to client-side dispatch.
///
/// # Examples
///
/// ```rust
/// use jxn_attrs::{Component, ComponentRegistry};
///
/// struct Badge;
///
/// impl Component for Badge {
/// 	fn name(&self) -> &str {
/// 		"Badge"
/// 	}
///
/// 	fn html(&self) -> String {
/// 		"<span class=\"badge\"></span>".to_string()
/// 	}
/// }
///
/// let registry = ComponentRegistry::new();
/// registry.register_component("App.Badge", Badge).unwrap();
/// registry.register("App.Search").unwrap();
///
/// assert!(registry.component("App.Badge").is_some());
/// assert!(registry.component("App.Search").is_none());
/// assert!(registry.contains("App.Search"));
/// ```
pub struct ComponentRegistry {
	classes: RwLock<HashMap<String, ClassEntry>>,
}

impl ComponentRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self {
			classes: RwLock::new(HashMap::new()),
		}
	}

	/// Registers a class that renders its own markup
	///
	/// Returns [`AttrsError::DuplicateClass`] if the name is already taken.
	pub fn register_component(
		&self,
		name: impl Into<String>,
		component: impl Component + 'static,
	) -> Result<()> {
		self.insert(name.into(), ClassEntry::Component(Arc::new(component)))
	}

	/// Registers a dispatch-only class without markup
	///
	/// Returns [`AttrsError::DuplicateClass`] if the name is already taken.
	pub fn register(&self, name: impl Into<String>) -> Result<()> {
		self.insert(name.into(), ClassEntry::Plain)
	}

	fn insert(&self, name: String, entry: ClassEntry) -> Result<()> {
		let mut classes = self.classes.write();
		if classes.contains_key(&name) {
			return Err(AttrsError::DuplicateClass(name));
		}
		classes.insert(name, entry);
		Ok(())
	}

	/// Resolves a class name to its component
	///
	/// Returns `None` when the class is unknown or registered as a plain
	/// dispatch-only class.
	pub fn component(&self, name: &str) -> Option<Arc<dyn Component>> {
		let classes = self.classes.read();
		match classes.get(name) {
			Some(ClassEntry::Component(component)) => Some(Arc::clone(component)),
			_ => None,
		}
	}

	/// Checks whether a class name is registered
	pub fn contains(&self, name: &str) -> bool {
		self.classes.read().contains_key(name)
	}

	/// Returns all registered class names
	pub fn names(&self) -> Vec<String> {
		self.classes.read().keys().cloned().collect()
	}

	/// Removes all registered classes
	pub fn clear(&self) {
		self.classes.write().clear();
	}
}

impl Default for ComponentRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Panel;

	impl Component for Panel {
		fn name(&self) -> &str {
			"Panel"
		}

		fn html(&self) -> String {
			"<div class=\"panel\"></div>".to_string()
		}
	}

	#[test]
	fn test_register_and_resolve_component() {
		let registry = ComponentRegistry::new();
		registry.register_component("App.Panel", Panel).unwrap();

		let component = registry.component("App.Panel").unwrap();
		assert_eq!(component.html(), "<div class=\"panel\"></div>");
	}

	#[test]
	fn test_plain_class_has_no_component() {
		let registry = ComponentRegistry::new();
		registry.register("App.Search").unwrap();

		assert!(registry.contains("App.Search"));
		assert!(registry.component("App.Search").is_none());
	}

	#[test]
	fn test_unknown_class() {
		let registry = ComponentRegistry::new();
		assert!(!registry.contains("App.Missing"));
		assert!(registry.component("App.Missing").is_none());
	}

	#[test]
	fn test_duplicate_registration_rejected() {
		let registry = ComponentRegistry::new();
		registry.register("App.Panel").unwrap();

		let err = registry.register_component("App.Panel", Panel).unwrap_err();
		assert!(matches!(err, AttrsError::DuplicateClass(name) if name == "App.Panel"));
	}

	#[test]
	fn test_names_and_clear() {
		let registry = ComponentRegistry::new();
		registry.register("App.A").unwrap();
		registry.register("App.B").unwrap();

		let mut names = registry.names();
		names.sort();
		assert_eq!(names, vec!["App.A", "App.B"]);

		registry.clear();
		assert!(registry.names().is_empty());
	}
}
