//! Record store adapters.
//!
//! The catalog runs against an in-memory store; durable persistence is an
//! external concern this service only ever sees through the domain ports.

mod example_data;
mod memory;

pub use example_data::{example_categories, example_questions};
pub use memory::MemoryTriviaStore;
