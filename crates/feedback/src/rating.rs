//! Rating aggregation across a supplier's products.

use serde::{Deserialize, Serialize};

use crate::{FeedbackEntry, ProductFeedback};

/// Aggregated rating for a supplier (or any product collection).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal; `0.0` when there is no feedback.
    pub rating: f64,
    pub total_feedbacks: u64,
}

impl RatingSummary {
    pub fn zero() -> Self {
        Self {
            rating: 0.0,
            total_feedbacks: 0,
        }
    }
}

/// Reduce a product collection's feedback into a single rating.
///
/// Explicit entries each count toward `total_feedbacks`; only entries with a
/// usable numeric rating contribute to the sum. An entry whose rating was
/// malformed upstream is therefore counted but adds nothing — the historical
/// behavior of the storefront, kept on purpose. Summary-shaped feedback
/// contributes its average weighted by its count, so a supplier whose only
/// product reports (4.5 avg, 10 feedbacks) aggregates to exactly that.
///
/// Pure and total: empty input yields [`RatingSummary::zero`].
pub fn aggregate_rating(products: &[ProductFeedback]) -> RatingSummary {
    let mut rating_sum = 0.0_f64;
    let mut total_feedbacks = 0_u64;

    for product in products {
        match product {
            ProductFeedback::Explicit(entries) => {
                total_feedbacks += entries.len() as u64;
                rating_sum += entries.iter().filter_map(numeric_rating).sum::<f64>();
            }
            ProductFeedback::Summary {
                average_rating,
                feedback_count,
            } => {
                if *feedback_count > 0 && average_rating.is_finite() {
                    total_feedbacks += u64::from(*feedback_count);
                    rating_sum += average_rating * f64::from(*feedback_count);
                }
            }
        }
    }

    if total_feedbacks == 0 {
        return RatingSummary::zero();
    }

    RatingSummary {
        rating: round_to_decimal(rating_sum / total_feedbacks as f64),
        total_feedbacks,
    }
}

fn numeric_rating(entry: &FeedbackEntry) -> Option<f64> {
    entry.rating.filter(|r| r.is_finite())
}

fn round_to_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explicit(ratings: &[f64]) -> ProductFeedback {
        ProductFeedback::Explicit(ratings.iter().copied().map(FeedbackEntry::new).collect())
    }

    #[test]
    fn empty_input_yields_zero_summary() {
        assert_eq!(aggregate_rating(&[]), RatingSummary::zero());
    }

    #[test]
    fn sums_ratings_and_counts_across_products() {
        // sum = 12, count = 3, 12/3 = 4.0
        let products = vec![explicit(&[4.0, 5.0]), explicit(&[3.0])];
        let summary = aggregate_rating(&products);
        assert_eq!(summary.rating, 4.0);
        assert_eq!(summary.total_feedbacks, 3);
    }

    #[test]
    fn result_is_rounded_to_one_decimal() {
        // 4 + 4 + 5 = 13, 13/3 = 4.333...
        let summary = aggregate_rating(&[explicit(&[4.0, 4.0, 5.0])]);
        assert_eq!(summary.rating, 4.3);
        assert_eq!(summary.total_feedbacks, 3);
    }

    #[test]
    fn unrated_entries_count_but_do_not_contribute() {
        let product = ProductFeedback::Explicit(vec![
            FeedbackEntry::new(4.0),
            FeedbackEntry::unrated(),
            FeedbackEntry::new(2.0),
            FeedbackEntry {
                rating: Some(f64::NAN),
            },
        ]);

        let summary = aggregate_rating(&[product]);
        // sum = 6 over 4 counted entries
        assert_eq!(summary.rating, 1.5);
        assert_eq!(summary.total_feedbacks, 4);
    }

    #[test]
    fn summary_shape_is_weighted_by_its_count() {
        let summary = aggregate_rating(&[ProductFeedback::Summary {
            average_rating: 4.5,
            feedback_count: 10,
        }]);
        assert_eq!(summary.rating, 4.5);
        assert_eq!(summary.total_feedbacks, 10);
    }

    #[test]
    fn zero_count_summary_contributes_nothing() {
        let products = vec![
            ProductFeedback::Summary {
                average_rating: 4.5,
                feedback_count: 0,
            },
            explicit(&[3.0]),
        ];

        let summary = aggregate_rating(&products);
        assert_eq!(summary.rating, 3.0);
        assert_eq!(summary.total_feedbacks, 1);
    }

    #[test]
    fn mixed_shapes_average_together() {
        let products = vec![
            explicit(&[5.0, 5.0]),
            ProductFeedback::Summary {
                average_rating: 4.0,
                feedback_count: 2,
            },
        ];

        // (5 + 5 + 8) / 4 = 4.5
        let summary = aggregate_rating(&products);
        assert_eq!(summary.rating, 4.5);
        assert_eq!(summary.total_feedbacks, 4);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_product() -> impl Strategy<Value = ProductFeedback> {
            prop::collection::vec(proptest::option::of(0.0f64..=5.0), 0..8).prop_map(|ratings| {
                ProductFeedback::Explicit(
                    ratings
                        .into_iter()
                        .map(|rating| FeedbackEntry { rating })
                        .collect(),
                )
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: total_feedbacks equals the sum of list lengths.
            #[test]
            fn count_equals_total_entries(
                products in prop::collection::vec(arb_product(), 0..6)
            ) {
                let expected: u64 = products
                    .iter()
                    .map(|p| match p {
                        ProductFeedback::Explicit(entries) => entries.len() as u64,
                        ProductFeedback::Summary { .. } => unreachable!(),
                    })
                    .sum();

                prop_assert_eq!(aggregate_rating(&products).total_feedbacks, expected);
            }

            /// Property: with in-range inputs the aggregate never leaves the
            /// rating scale.
            #[test]
            fn rating_stays_on_scale(
                products in prop::collection::vec(arb_product(), 0..6)
            ) {
                let summary = aggregate_rating(&products);
                prop_assert!(summary.rating >= 0.0);
                prop_assert!(summary.rating <= 5.0);
            }
        }
    }
}
