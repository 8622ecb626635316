mod export;
mod import;

/// External (serializable) representations of the entities that cross the library boundary.
pub mod ext_repr;

/// Exports a solution out of the library.
pub use export::export;

/// Imports a problem instance into the library.
pub use import::import;
