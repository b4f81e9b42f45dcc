//! Fresnel reflectance at normal incidence.

use crate::provider::MaterialError;

/// Power reflectance of an interface between two lossless media at normal
/// incidence:
///
/// $R = \left(\frac{n_1 - n_2}{n_1 + n_2}\right)^2$
pub fn normal_incidence_reflectance(n1: f64, n2: f64) -> Result<f64, MaterialError> {
    for n in [n1, n2] {
        if !n.is_finite() || n <= 0.0 {
            return Err(MaterialError::InvalidIndex(n));
        }
    }
    let r = (n1 - n2) / (n1 + n2);
    Ok(r * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_air_glass_is_four_percent() {
        let r = normal_incidence_reflectance(1.0, 1.5168).unwrap();
        assert_relative_eq!(r, 0.0422, max_relative = 1e-2);
    }

    #[test]
    fn test_symmetric_in_media_order() {
        assert_relative_eq!(
            normal_incidence_reflectance(1.0, 1.45).unwrap(),
            normal_incidence_reflectance(1.45, 1.0).unwrap()
        );
    }

    #[test]
    fn test_index_matched_interface_reflects_nothing() {
        assert_relative_eq!(normal_incidence_reflectance(1.45, 1.45).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_index_rejected() {
        assert!(matches!(
            normal_incidence_reflectance(0.0, 1.5),
            Err(MaterialError::InvalidIndex(_))
        ));
    }
}
