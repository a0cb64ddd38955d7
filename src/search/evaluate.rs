use crate::models::Hotel;
use crate::search::filters::{Filters, PRICE_CEILING};

impl Filters {
    /// Conjunction of the per-field predicates; a field at its sentinel
    /// places no constraint.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        if self.review_count >= 0 && hotel.reviews_amount < self.review_count as u32 {
            return false;
        }
        if !self.types.is_empty() && !self.types.contains(&hotel.category) {
            return false;
        }
        if !self.star_count.is_empty() && !self.star_count.contains(&hotel.stars) {
            return false;
        }
        if self.price_from > 0 && hotel.min_price < self.price_from {
            return false;
        }
        if self.price_to < PRICE_CEILING && hotel.min_price > self.price_to {
            return false;
        }
        if !self.country.is_empty() && !self.country.contains(&hotel.country) {
            return false;
        }
        true
    }
}

/// Return the hotels matching every active constraint, in input order.
///
/// Pure: the input list is not mutated, and a fully-default specification
/// returns the whole list.
pub fn filter_hotels(filters: &Filters, hotels: &[Hotel]) -> Vec<Hotel> {
    hotels
        .iter()
        .filter(|hotel| filters.matches(hotel))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filters::NO_REVIEW_MINIMUM;
    use std::collections::BTreeSet;

    fn hotel(
        name: &str,
        category: &str,
        country: &str,
        stars: u8,
        reviews_amount: u32,
        min_price: i64,
    ) -> Hotel {
        Hotel {
            name: name.to_string(),
            country: country.to_string(),
            address: String::new(),
            stars,
            category: category.to_string(),
            description: String::new(),
            services: vec![],
            min_price,
            currency: "EUR".to_string(),
            rating: 8.0,
            reviews_amount,
            last_review: String::new(),
        }
    }

    fn two_hotels() -> Vec<Hotel> {
        vec![
            hotel("A", "hotel", "X", 3, 10, 100),
            hotel("B", "apartment", "Y", 5, 1, 500),
        ]
    }

    fn strings(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn default_filters_return_full_list() {
        let hotels = two_hotels();
        let result = filter_hotels(&Filters::default(), &hotels);
        assert_eq!(result, hotels);
    }

    #[test]
    fn type_filter_keeps_matching_category_only() {
        let filters = Filters {
            types: strings(&["hotel"]),
            ..Filters::default()
        };
        let result = filter_hotels(&filters, &two_hotels());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn review_minimum_excludes_low_review_counts() {
        let filters = Filters {
            review_count: 5,
            ..Filters::default()
        };
        let result = filter_hotels(&filters, &two_hotels());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn review_minimum_of_zero_is_active_but_accepts_everything() {
        let filters = Filters {
            review_count: 0,
            ..Filters::default()
        };
        assert_eq!(filter_hotels(&filters, &two_hotels()).len(), 2);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let hotels = two_hotels();
        let filters = Filters {
            price_from: 100,
            price_to: 500,
            ..Filters::default()
        };
        assert_eq!(filter_hotels(&filters, &hotels).len(), 2);

        let filters = Filters {
            price_from: 101,
            ..Filters::default()
        };
        let result = filter_hotels(&filters, &hotels);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");

        let filters = Filters {
            price_to: 499,
            ..Filters::default()
        };
        let result = filter_hotels(&filters, &hotels);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "A");
    }

    #[test]
    fn country_filter_matches_exact_names() {
        let filters = Filters {
            country: strings(&["Y"]),
            ..Filters::default()
        };
        let result = filter_hotels(&filters, &two_hotels());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "B");
    }

    #[test]
    fn result_preserves_input_order() {
        let hotels = vec![
            hotel("C", "hotel", "X", 3, 10, 100),
            hotel("A", "hotel", "X", 3, 10, 100),
            hotel("B", "hotel", "X", 3, 10, 100),
        ];
        let names: Vec<_> = filter_hotels(&Filters::default(), &hotels)
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let filters = Filters {
            types: strings(&["hotel"]),
            review_count: 2,
            ..Filters::default()
        };
        let once = filter_hotels(&filters, &two_hotels());
        let twice = filter_hotels(&filters, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn narrowing_a_field_never_grows_the_result() {
        let hotels: Vec<Hotel> = (0..20usize)
            .map(|i| {
                hotel(
                    &format!("H{i}"),
                    if i % 2 == 0 { "hotel" } else { "apartment" },
                    ["X", "Y", "Z"][i % 3],
                    (i % 5 + 1) as u8,
                    (i * 3) as u32,
                    50 + (i as i64) * 40,
                )
            })
            .collect();

        let base = Filters {
            types: strings(&["hotel"]),
            ..Filters::default()
        };
        let baseline = filter_hotels(&base, &hotels).len();

        let mut narrowed = base.clone();
        narrowed.star_count.insert(3);
        assert!(filter_hotels(&narrowed, &hotels).len() <= baseline);

        let mut narrowed = base.clone();
        narrowed.country.insert("X".to_string());
        assert!(filter_hotels(&narrowed, &hotels).len() <= baseline);

        let narrowed = Filters {
            review_count: 30,
            ..base.clone()
        };
        assert!(filter_hotels(&narrowed, &hotels).len() <= baseline);

        let narrowed = Filters {
            price_from: 400,
            price_to: 600,
            ..base
        };
        assert!(filter_hotels(&narrowed, &hotels).len() <= baseline);
    }

    // Cross-check the evaluator against a spelled-out conjunction over a
    // grid of specifications and hotels.
    #[test]
    fn evaluator_agrees_with_brute_force_conjunction() {
        let hotels: Vec<Hotel> = (0..24usize)
            .map(|i| {
                hotel(
                    &format!("H{i}"),
                    ["hotel", "apartment", "hostel"][i % 3],
                    ["X", "Y"][i % 2],
                    (i % 5 + 1) as u8,
                    (i * 2) as u32,
                    (i as i64) * 77 % 900,
                )
            })
            .collect();

        let mut specs = vec![Filters::default()];
        for review_count in [NO_REVIEW_MINIMUM, 0, 10, 40] {
            for (price_from, price_to) in [(0, PRICE_CEILING), (100, PRICE_CEILING), (0, 300)] {
                specs.push(Filters {
                    types: strings(&["hotel", "hostel"]),
                    star_count: [1u8, 3, 5].into_iter().collect(),
                    country: strings(&["X"]),
                    review_count,
                    price_from,
                    price_to,
                });
            }
        }

        for spec in &specs {
            let expected: Vec<Hotel> = hotels
                .iter()
                .filter(|h| {
                    let review_ok =
                        spec.review_count < 0 || h.reviews_amount >= spec.review_count as u32;
                    let type_ok = spec.types.is_empty() || spec.types.contains(&h.category);
                    let stars_ok =
                        spec.star_count.is_empty() || spec.star_count.contains(&h.stars);
                    let from_ok = spec.price_from <= 0 || h.min_price >= spec.price_from;
                    let to_ok = spec.price_to >= PRICE_CEILING || h.min_price <= spec.price_to;
                    let country_ok = spec.country.is_empty() || spec.country.contains(&h.country);
                    review_ok && type_ok && stars_ok && from_ok && to_ok && country_ok
                })
                .cloned()
                .collect();

            assert_eq!(filter_hotels(spec, &hotels), expected, "spec: {spec:?}");
        }
    }
}
