//! Risk-profile quiz engine: answer collection, scoring, result persistence.
//! No network or UI dependencies.

pub mod scoring;
pub mod session;
pub mod store;

pub use scoring::{AnswerSet, Tally, compute_result, tally};
pub use session::{QuizSession, QuizStep};
#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(target_arch = "wasm32")]
pub use store::LocalStore;
pub use store::{KeyValueStore, MemoryStore, QUIZ_RESULT_KEY, ResultStore};
