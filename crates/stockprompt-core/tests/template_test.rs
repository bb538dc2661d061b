//! Rendering built-in templates never leaves a placeholder behind.

use proptest::prelude::*;

use stockprompt_core::domains;
use stockprompt_core::models::{CategoryValue, TupleValues};

proptest! {
    #[test]
    fn every_placeholder_is_filled(domain_idx in 0usize..domains::ALL.len(), pick in any::<u64>()) {
        let domain = domains::by_name(domains::ALL[domain_idx]).unwrap().unwrap();
        let mut values = TupleValues::new();
        for (i, category) in domain.catalog().categories().iter().enumerate() {
            let n = category.options.len();
            let start = (pick as usize).wrapping_add(i) % n;
            let chosen: Vec<String> = (0..category.slots)
                .map(|k| category.options[(start + k) % n].clone())
                .collect();
            let value = if category.is_multi_slot() {
                CategoryValue::Multi(chosen)
            } else {
                CategoryValue::Single(chosen[0].clone())
            };
            values.insert(category.name.clone(), value);
        }
        let rendered = domain.render(&values);
        prop_assert!(!rendered.contains('{'), "rendered output contains '{{'");
        prop_assert!(!rendered.contains('}'), "rendered output contains '}}'");
        for value in values.values() {
            for v in value.as_slice() {
                prop_assert!(rendered.contains(v.as_str()));
            }
        }
    }
}
