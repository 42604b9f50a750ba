//! English CLDR plural category resolution.
//!
//! The rules instance is cached per thread; repeated lookups reuse it.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    static EN_CARDINAL: RefCell<Option<PluralRules>> = const { RefCell::new(None) };
}

/// CLDR cardinal category for a count in English: "one" or "other".
pub(crate) fn plural_category(n: u64) -> &'static str {
    EN_CARDINAL.with_borrow_mut(|cache| {
        let rules = cache.get_or_insert_with(|| {
            PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
                .expect("English plural rules are compiled in")
        });
        category_str(rules.category_for(n))
    })
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}
