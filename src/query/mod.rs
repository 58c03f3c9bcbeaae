pub mod builder;
pub mod client;
pub mod controller;
pub mod descriptor;

pub use builder::{build_descriptor, parse_range};
pub use client::{FrequencyResponse, HttpFrequencyClient, WordFrequencyApi};
pub use controller::{QueryController, QueryEvent, WordInput};
pub use descriptor::{RequestDescriptor, WordQuery};
