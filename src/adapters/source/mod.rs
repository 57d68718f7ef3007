//! Record sources. Implement RecordSource.

pub mod fixture;
pub mod sample;

pub use fixture::FixtureSource;
pub use sample::SampleSource;
