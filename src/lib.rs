//! # sovran-drawable
//!
//! Value-semantic, type-erased objects and checked owning downcasts.
//!
//! `sovran-drawable` lets unrelated types live side by side in one collection
//! without making them share a trait object type. Each value is wrapped in an
//! [`Object`], which owns a private adapter that knows how to clone and draw
//! that one concrete type. Objects behave like plain values: cloning one
//! deep-copies what it holds.
//!
//! ## Key Features
//!
//! - **Value semantics**: `Object` and `Document` are `Clone`, and copies never alias
//! - **Open set of types**: anything implementing [`Draw`] + `Clone` can be wrapped
//! - **Nesting**: a [`Document`] is drawable too, so documents contain documents
//! - **Checked downcasts**: the [`cast`] module converts owning base pointers
//!   to concrete types without ever losing or duplicating ownership
//!
//! ## Usage Examples
//!
//! ### Building a Document
//!
//! ```rust
//! use sovran_drawable::{draw_display, render_to_string, Document, Draw, DrawError};
//! use std::io::Write;
//!
//! #[derive(Clone)]
//! struct MyClass;
//!
//! impl Draw for MyClass {
//!     fn draw(&self, out: &mut dyn Write, position: usize) -> Result<(), DrawError> {
//!         draw_display("my_class_t", out, position)
//!     }
//! }
//!
//! fn main() -> Result<(), DrawError> {
//!     let mut document = Document::with_capacity(5);
//!     document.push(0);
//!     document.push(String::from("Hello!"));
//!     document.push(2);
//!     document.push(MyClass);
//!
//!     let text = render_to_string(&document, 0)?;
//!     assert_eq!(
//!         text,
//!         "<document>\n  0\n  Hello!\n  2\n  my_class_t\n</document>\n"
//!     );
//!
//!     // Drawing straight to a stream works the same way
//!     document.draw(&mut std::io::stdout(), 0)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Copying and Moving Objects
//!
//! ```rust
//! use sovran_drawable::{render_to_string, DrawError, Object};
//!
//! let mut a = Object::new(String::from("first"));
//! let mut b = Object::new(7);
//!
//! // Copy-assign: b gets its own copy of a's string
//! b.clone_from(&a);
//! a.downcast_mut::<String>().unwrap().push_str("!");
//! assert_eq!(render_to_string(&b, 0).unwrap(), "first\n");
//!
//! // Move-assign: a's value moves into b and a is left empty
//! b.take_from(&mut a);
//! assert!(a.is_empty());
//! assert!(matches!(render_to_string(&a, 0), Err(DrawError::Empty)));
//! assert_eq!(render_to_string(&b, 0).unwrap(), "first!\n");
//! ```
//!
//! ## Logging
//!
//! Object lifecycle events (`ctor`, `copy`, `asgn`, `move`) are reported at
//! `trace` level through the [`log`](https://docs.rs/log) facade.

pub mod cast;
mod document;
mod draw;
mod error;
mod object;

pub use document::Document;
pub use draw::{draw_display, render_to_string, Draw};
pub use error::{DrawError, Result};
pub use object::Object;
