// src/model/format.rs

use tracing::warn;

/// Supported creative formats, each mapping 1:1 to a fixed base size in
/// logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    MediumRectangle,
    Billboard,
    MobilePhoneInterstitial,
}

impl Format {
    /// Base (width, height) of the format.
    pub fn base_size(self) -> (f64, f64) {
        match self {
            Format::MediumRectangle => (300.0, 250.0),
            Format::Billboard => (970.0, 250.0),
            Format::MobilePhoneInterstitial => (640.0, 1136.0),
        }
    }

    /// Slug used in CDN default-creative paths and the web fallback page.
    pub fn slug(self) -> &'static str {
        match self {
            Format::MediumRectangle => "medium-rectangle",
            Format::Billboard => "billboard",
            Format::MobilePhoneInterstitial => "mobile-phone-interstitial",
        }
    }

    fn base_aspect(self) -> f64 {
        let (width, height) = self.base_size();
        width / height
    }
}

/// Caller-supplied display bounds. Either axis may be absent; non-positive
/// values are discarded with a warning before any scaling math runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayConstraints {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl DisplayConstraints {
    fn normalized(&self) -> (Option<f64>, Option<f64>) {
        (
            positive_or_absent(self.width, "width"),
            positive_or_absent(self.height, "height"),
        )
    }
}

fn positive_or_absent(value: Option<f64>, axis: &str) -> Option<f64> {
    match value {
        Some(v) if v > 0.0 => Some(v),
        Some(v) => {
            warn!(axis, value = v, "discarding non-positive display constraint");
            None
        }
        None => None,
    }
}

/// Derives the (x, y) display scale for `format` under the given bounds.
///
/// The aspect ratio stays locked to the format's base ratio, not the true
/// ratio of whatever image ends up rendered. With both bounds present, the
/// smaller of width/base_width and height/base_height is the binding
/// constraint and the other axis is derived from the base aspect, so the
/// creative fits inside both bounds without cropping or distortion.
pub fn scale_for(format: Format, constraints: &DisplayConstraints) -> (f64, f64) {
    let (base_width, base_height) = format.base_size();
    let aspect = format.base_aspect();

    match constraints.normalized() {
        (None, None) => (1.0, 1.0),
        (None, Some(height)) => {
            let derived_width = height * aspect;
            (derived_width / base_width, height / base_height)
        }
        (Some(width), None) => {
            let derived_height = width / aspect;
            (width / base_width, derived_height / base_height)
        }
        (Some(width), Some(height)) => {
            let width_ratio = width / base_width;
            let height_ratio = height / base_height;
            if width_ratio <= height_ratio {
                // Width is binding; height follows the base aspect.
                let derived_height = width / aspect;
                (width_ratio, derived_height / base_height)
            } else {
                let derived_width = height * aspect;
                (derived_width / base_width, height_ratio)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FORMATS: [Format; 3] = [
        Format::MediumRectangle,
        Format::Billboard,
        Format::MobilePhoneInterstitial,
    ];

    fn assert_scale(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn unconstrained_renders_at_base_size() {
        assert_scale(
            scale_for(Format::Billboard, &DisplayConstraints::default()),
            (1.0, 1.0),
        );
    }

    #[test]
    fn height_only_scales_both_axes() {
        let constraints = DisplayConstraints {
            width: None,
            height: Some(500.0),
        };
        assert_scale(scale_for(Format::MediumRectangle, &constraints), (2.0, 2.0));
    }

    #[test]
    fn width_only_scales_both_axes() {
        let constraints = DisplayConstraints {
            width: Some(600.0),
            height: None,
        };
        assert_scale(scale_for(Format::MediumRectangle, &constraints), (2.0, 2.0));
    }

    #[test]
    fn both_bounds_pick_the_limiting_dimension() {
        // width ratio = 2, height ratio = 4: width binds, height follows
        // the base aspect instead of stretching to fill.
        let constraints = DisplayConstraints {
            width: Some(600.0),
            height: Some(1000.0),
        };
        assert_scale(scale_for(Format::MediumRectangle, &constraints), (2.0, 2.0));

        let constraints = DisplayConstraints {
            width: Some(1940.0),
            height: Some(250.0),
        };
        assert_scale(scale_for(Format::Billboard, &constraints), (1.0, 1.0));
    }

    #[test]
    fn non_positive_constraints_are_discarded() {
        let constraints = DisplayConstraints {
            width: Some(-10.0),
            height: Some(0.0),
        };
        assert_scale(scale_for(Format::Billboard, &constraints), (1.0, 1.0));

        let constraints = DisplayConstraints {
            width: Some(-1.0),
            height: Some(500.0),
        };
        assert_scale(scale_for(Format::MediumRectangle, &constraints), (2.0, 2.0));
    }

    proptest! {
        #[test]
        fn scale_is_uniform_and_never_negative(
            width in proptest::option::of(1.0f64..4000.0),
            height in proptest::option::of(1.0f64..4000.0),
        ) {
            for format in FORMATS {
                let (sx, sy) = scale_for(format, &DisplayConstraints { width, height });
                prop_assert!(sx >= 0.0 && sy >= 0.0);
                // Both axes carry the same scale: the base aspect ratio is
                // preserved no matter which constraints were supplied.
                prop_assert!((sx - sy).abs() <= 1e-9 * sx.max(sy).max(1.0));
            }
        }

        #[test]
        fn contain_fit_stays_inside_both_bounds(
            width in 1.0f64..4000.0,
            height in 1.0f64..4000.0,
        ) {
            for format in FORMATS {
                let (base_width, base_height) = format.base_size();
                let constraints = DisplayConstraints {
                    width: Some(width),
                    height: Some(height),
                };
                let (sx, sy) = scale_for(format, &constraints);
                prop_assert!(sx * base_width <= width * (1.0 + 1e-9));
                prop_assert!(sy * base_height <= height * (1.0 + 1e-9));
            }
        }
    }
}
