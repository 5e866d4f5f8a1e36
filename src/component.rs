//! Renderable component capability.

/// A registered class that renders its own HTML markup.
///
/// Implementors are registered in a [`ComponentRegistry`] and resolved by
/// class name when a template asks for their markup. Classes that only expose
/// methods to client-side dispatch do not implement this trait; they are
/// registered as plain classes instead.
///
/// [`ComponentRegistry`]: crate::ComponentRegistry
///
/// # Examples
///
/// ```rust
/// use jxn_attrs::Component;
///
/// struct Counter {
/// 	count: u32,
/// }
///
/// impl Component for Counter {
/// 	fn name(&self) -> &str {
/// 		"Counter"
/// 	}
///
/// 	fn html(&self) -> String {
/// 		format!("<span>{}</span>", self.count)
/// 	}
/// }
///
/// let counter = Counter { count: 3 };
/// assert_eq!(counter.html(), "<span>3</span>");
/// ```
pub trait Component: Send + Sync {
	/// Returns the component's name (for diagnostics)
	fn name(&self) -> &str;

	/// Renders the component to an HTML string
	fn html(&self) -> String;
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Greeting;

	impl Component for Greeting {
		fn name(&self) -> &str {
			"Greeting"
		}

		fn html(&self) -> String {
			"<p>hello</p>".to_string()
		}
	}

	#[test]
	fn test_component_renders_markup() {
		let greeting = Greeting;
		assert_eq!(greeting.name(), "Greeting");
		assert_eq!(greeting.html(), "<p>hello</p>");
	}

	#[test]
	fn test_component_is_object_safe() {
		let boxed: Box<dyn Component> = Box::new(Greeting);
		assert_eq!(boxed.html(), "<p>hello</p>");
	}
}
