//! # MedFX Navigator
//!
//! Umbrella crate for the MedFX workspace. It re-exports the three member
//! crates so applications can depend on a single package:
//!
//! - [`fx_math`]: smoothing recursions and statistics
//! - [`fx_forecast`]: series loading, model artifacts and the forecast pipeline
//! - [`navigator`]: catalogs, views and rendering
//!
//! ## Example
//!
//! ```
//! use medfx_workspace::navigator::{Catalog, View};
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert_eq!(catalog.cities().count(), 4);
//! assert_eq!("budget".parse::<View>().unwrap(), View::Budget);
//! ```

pub use fx_forecast;
pub use fx_math;
pub use navigator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_reachable() {
        assert_eq!(fx_forecast::TEST_WINDOW, 216);
        assert_eq!(fx_forecast::NAME, "fx_forecast");
        assert!(fx_math::mean(&[1.0, 3.0]).is_ok());
    }
}
