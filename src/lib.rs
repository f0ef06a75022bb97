pub mod constants;
pub mod geoperturb_errors;
pub mod geopotential;
pub mod harmonics;
pub mod kepler;
pub mod keplerian_element;
pub mod legendre;
pub mod presets;
pub mod ref_frame;
pub mod sampler;

pub use geoperturb_errors::GeoperturbError;
pub use harmonics::{HarmonicCoefficients, STANDARD_FIELD};
pub use keplerian_element::KeplerianElements;
pub use sampler::{standard_sampler, OrbitSampler, OrbitSampling, ReferenceFrame, SampleOptions};
