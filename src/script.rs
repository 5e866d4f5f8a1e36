//! Call descriptors and client-side call expressions.
//!
//! A [`JsCall`] identifies a registered class; a [`JsExpr`] is the
//! serializable expression the client runtime executes when an event fires.
//! Expressions serialize to the dispatch wire form
//! `{"calls":[{"_type":...,"_name":...,"args":[...]}]}`, which is what ends
//! up (HTML-escaped) inside a `jxn-call` attribute.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Reference to a registered class, used to build client-side dispatch calls.
///
/// # Examples
///
/// ```rust
/// use jxn_attrs::JsCall;
///
/// let call = JsCall::new("App.Counter");
/// assert_eq!(call.class_name(), "App.Counter");
///
/// let expr = call.method("increment").arg(1);
/// assert!(expr.to_json().unwrap().contains("App.Counter.increment"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct JsCall {
	#[serde(rename = "_class")]
	class_name: String,
}

impl JsCall {
	/// Creates a descriptor for the given class name
	pub fn new(class_name: impl Into<String>) -> Self {
		Self {
			class_name: class_name.into(),
		}
	}

	/// Returns the class name (may be empty)
	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	/// Starts an expression invoking a method of this class
	pub fn method(&self, name: &str) -> JsExpr {
		JsExpr::call(
			CallKind::Method,
			format!("{}.{}", self.class_name, name),
		)
	}
}

/// Kind tag for a single call in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
	/// A free function call
	Func,
	/// A method call on a registered class
	Method,
}

/// A single call in an expression.
#[derive(Debug, Clone, Serialize)]
struct Call {
	#[serde(rename = "_type")]
	kind: CallKind,
	#[serde(rename = "_name")]
	name: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	args: Vec<Value>,
}

/// A serializable client-side call expression.
///
/// # Examples
///
/// ```rust
/// use jxn_attrs::JsExpr;
/// use serde_json::json;
///
/// let expr = JsExpr::func("notify").arg("saved").arg(json!({"level": "info"}));
/// let json = expr.to_json().unwrap();
/// assert!(json.starts_with(r#"{"calls":[{"_type":"func","_name":"notify""#));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct JsExpr {
	calls: Vec<Call>,
}

impl JsExpr {
	fn call(kind: CallKind, name: String) -> Self {
		Self {
			calls: vec![Call {
				kind,
				name,
				args: Vec::new(),
			}],
		}
	}

	/// Starts an expression calling a free function
	pub fn func(name: impl Into<String>) -> Self {
		Self::call(CallKind::Func, name.into())
	}

	/// Appends an argument to the last call of the expression
	pub fn arg(mut self, value: impl Into<Value>) -> Self {
		if let Some(last) = self.calls.last_mut() {
			last.args.push(value.into());
		}
		self
	}

	/// Chains a method call onto the result of the expression so far
	pub fn then(mut self, name: impl Into<String>) -> Self {
		self.calls.push(Call {
			kind: CallKind::Method,
			name: name.into(),
			args: Vec::new(),
		});
		self
	}

	/// Serializes the expression to its canonical JSON form
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}
