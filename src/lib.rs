pub mod holder;

pub use holder::ValueHolder;
