use crate::extract::dimension::leading_digit_run;
use crate::model::{Access, FeatureRecord, Mount, QuoteDoc};

/// Build a [`FeatureRecord`] from a structured quote document.
///
/// Only the first section is consumed. Dimensions are reduced to their
/// leading digit run; the main circuit breaker (quantity 1) wins over the
/// `breakers` list (quantity = list length); access and mount come from a
/// keyword scan over the joined special construction requirements.
///
/// Total over its input: fields the quote does not carry stay `None`.
pub fn features_from_quote(quote: &QuoteDoc) -> FeatureRecord {
    let mut features = FeatureRecord::default();

    if let Some(first) = quote.sections.first() {
        if let Some(dims) = &first.dimensions {
            features.height = dims.height.as_deref().and_then(leading_digit_run);
            features.width = dims.width.as_deref().and_then(leading_digit_run);
            features.depth = dims.depth.as_deref().and_then(leading_digit_run);
        }

        if let Some(main) = &first.main_circuit_breaker {
            // Main breaker sections carry exactly one main device; the
            // quantity field on the quote is ignored here.
            features.breaker_type = non_empty(main.breaker_type.as_deref());
            features.breaker_quantity = Some(1);
        } else if let Some(first_breaker) = first.breakers.first() {
            features.breaker_type = non_empty(first_breaker.breaker_type.as_deref());
            features.breaker_quantity = Some(first.breakers.len() as u32);
        }
    }

    let requirements = quote.special_construction_requirements.join(" ");
    features.access = Access::from_str_loose(&requirements);
    features.mount = Mount::from_str_loose(&requirements);

    features
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuoteBreaker, QuoteDimensions, QuoteSection};

    fn quote_with_section(section: QuoteSection, requirements: &[&str]) -> QuoteDoc {
        QuoteDoc {
            sections: vec![section],
            special_construction_requirements: requirements
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    #[test]
    fn test_dimensions_normalized() {
        let doc = quote_with_section(
            QuoteSection {
                dimensions: Some(QuoteDimensions {
                    height: Some("90\"".into()),
                    width: Some("40 inches".into()),
                    depth: Some("60".into()),
                }),
                ..QuoteSection::default()
            },
            &[],
        );
        let f = features_from_quote(&doc);
        assert_eq!(f.height.as_deref(), Some("90"));
        assert_eq!(f.width.as_deref(), Some("40"));
        assert_eq!(f.depth.as_deref(), Some("60"));
    }

    #[test]
    fn test_main_breaker_wins_quantity_one() {
        let doc = quote_with_section(
            QuoteSection {
                main_circuit_breaker: Some(QuoteBreaker {
                    breaker_type: Some("ABB SACE Emax 6.2".into()),
                    quantity: Some(4),
                }),
                breakers: vec![QuoteBreaker::default(), QuoteBreaker::default()],
                ..QuoteSection::default()
            },
            &[],
        );
        let f = features_from_quote(&doc);
        assert_eq!(f.breaker_type.as_deref(), Some("ABB SACE Emax 6.2"));
        // Quantity comes from the section shape, not the quote field.
        assert_eq!(f.breaker_quantity, Some(1));
    }

    #[test]
    fn test_breakers_list_fallback() {
        let doc = quote_with_section(
            QuoteSection {
                breakers: vec![
                    QuoteBreaker {
                        breaker_type: Some("Emax 2.2".into()),
                        quantity: None,
                    },
                    QuoteBreaker::default(),
                    QuoteBreaker::default(),
                ],
                ..QuoteSection::default()
            },
            &[],
        );
        let f = features_from_quote(&doc);
        assert_eq!(f.breaker_type.as_deref(), Some("Emax 2.2"));
        assert_eq!(f.breaker_quantity, Some(3));
    }

    #[test]
    fn test_requirements_access_and_mount() {
        let doc = quote_with_section(
            QuoteSection::default(),
            &["fixed mount", "front and rear access required"],
        );
        let f = features_from_quote(&doc);
        assert_eq!(f.access, Some(Access::FrontAndRear));
        assert_eq!(f.mount, Some(Mount::Fixed));
    }

    #[test]
    fn test_only_first_section_consumed() {
        let doc = QuoteDoc {
            sections: vec![
                QuoteSection {
                    dimensions: Some(QuoteDimensions {
                        height: Some("90".into()),
                        ..QuoteDimensions::default()
                    }),
                    ..QuoteSection::default()
                },
                QuoteSection {
                    dimensions: Some(QuoteDimensions {
                        height: Some("78".into()),
                        ..QuoteDimensions::default()
                    }),
                    ..QuoteSection::default()
                },
            ],
            special_construction_requirements: vec![],
        };
        let f = features_from_quote(&doc);
        assert_eq!(f.height.as_deref(), Some("90"));
    }

    #[test]
    fn test_empty_quote_is_unconstrained() {
        let f = features_from_quote(&QuoteDoc::default());
        assert!(f.is_unconstrained());
    }

    #[test]
    fn test_empty_breaker_type_string_treated_as_absent() {
        let doc = quote_with_section(
            QuoteSection {
                main_circuit_breaker: Some(QuoteBreaker {
                    breaker_type: Some("  ".into()),
                    quantity: None,
                }),
                ..QuoteSection::default()
            },
            &[],
        );
        let f = features_from_quote(&doc);
        assert!(f.breaker_type.is_none());
        assert_eq!(f.breaker_quantity, Some(1));
    }
}
