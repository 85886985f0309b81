//! In-memory adapters for the task board.

mod repository;

pub use repository::InMemoryTaskBoardRepository;
