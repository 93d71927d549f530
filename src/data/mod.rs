mod loader;

pub use loader::{
    DEFAULT_ASSIGNMENT_PATH, LoadError, deserialize, load_assignment, save_assignment, serialize,
};
