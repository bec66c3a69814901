/*
[INPUT]:  API schema definitions and parameter conventions
[OUTPUT]: Typed parameters, enumerations and request descriptors
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod params;
pub mod requests;

pub use enums::*;
pub use params::*;
pub use requests::*;
