pub mod ellipse;
pub mod error;
pub mod input;
pub mod marker;
pub mod popup;
pub mod types;

pub use ellipse::{EllipseParams, EllipseSpec, compute_ellipse};
pub use error::{ConfigurationError, OverlayError};
pub use marker::{MarkerDescriptor, classify, is_common_tag};
