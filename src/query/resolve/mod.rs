pub use self::resolve_planar::resolve_planar;
pub use self::resolve_volumetric::resolve_volumetric;
pub use self::resolver::{OverlapResolver, PlanarResolver, ResolutionStrategy, VolumetricResolver};

mod resolve_planar;
mod resolve_volumetric;
mod resolver;
