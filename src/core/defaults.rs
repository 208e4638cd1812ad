//! Built-in solar system catalog
//!
//! Used whenever the configured store has nothing to load. Masses are in
//! 10^24 kg, distances in million km, diameters in km.

use super::models::{Body, Catalog, Satellite};

/// Build the default catalog: the eight planets plus Pluto.
pub fn default_catalog() -> Catalog {
    vec![
        Body::new("Mercury", 0.330, 57.9),
        Body::new("Venus", 4.87, 108.2),
        Body::new("Earth", 5.97, 149.6).with_satellite(Satellite::new("Moon", 3474.0)),
        Body::new("Mars", 0.642, 227.9)
            .with_satellite(Satellite::new("Phobos", 22.0))
            .with_satellite(Satellite::new("Deimos", 12.0)),
        Body::new("Jupiter", 1898.0, 778.5)
            .with_satellite(Satellite::new("Io", 3643.0))
            .with_satellite(Satellite::new("Europa", 3122.0))
            .with_satellite(Satellite::new("Ganymede", 5262.0))
            .with_satellite(Satellite::new("Callisto", 4821.0)),
        Body::new("Saturn", 568.0, 1434.0)
            .with_satellite(Satellite::new("Titan", 5150.0))
            .with_satellite(Satellite::new("Enceladus", 504.0))
            .with_satellite(Satellite::new("Mimas", 396.0)),
        Body::new("Uranus", 86.8, 2871.0)
            .with_satellite(Satellite::new("Miranda", 472.0))
            .with_satellite(Satellite::new("Ariel", 1158.0))
            .with_satellite(Satellite::new("Umbriel", 1169.0)),
        Body::new("Neptune", 102.0, 4495.0)
            .with_satellite(Satellite::new("Triton", 2707.0))
            .with_satellite(Satellite::new("Nereid", 340.0)),
        // Dwarf planet, kept for completeness
        Body::new("Pluto", 0.0130, 5906.0).with_satellite(Satellite::new("Charon", 1212.0)),
    ]
    .into_iter()
    .collect()
}
