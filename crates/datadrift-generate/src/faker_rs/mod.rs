mod adapter;

pub use adapter::FakerProvider;
