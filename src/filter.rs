//! Label Filtering
//!
//! Recomputes the visible subset of the cached label list. Never touches the network.

use crate::models::Label;

/// Tri-state print flag selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrintFilter {
    #[default]
    All,
    Marked,
    Unmarked,
}

/// Selector options as (value, display name)
pub const PRINT_FILTERS: &[(&str, &str)] = &[
    ("all", "Vše"),
    ("marked", "K tisku"),
    ("unmarked", "Neoznačené"),
];

impl PrintFilter {
    /// Parse a `<select>` value. Unknown values select everything.
    pub fn from_value(value: &str) -> Self {
        match value {
            "marked" => PrintFilter::Marked,
            "unmarked" => PrintFilter::Unmarked,
            _ => PrintFilter::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            PrintFilter::All => "all",
            PrintFilter::Marked => "marked",
            PrintFilter::Unmarked => "unmarked",
        }
    }

    pub fn matches(self, marked_to_print: bool) -> bool {
        match self {
            PrintFilter::All => true,
            PrintFilter::Marked => marked_to_print,
            PrintFilter::Unmarked => !marked_to_print,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelFilter {
    /// Product name substring, case-insensitive
    pub query: String,
    pub print: PrintFilter,
}

impl LabelFilter {
    pub fn matches(&self, label: &Label) -> bool {
        self.matches_lowered(&self.query.to_lowercase(), label)
    }

    /// `query` must already be lowercase
    fn matches_lowered(&self, query: &str, label: &Label) -> bool {
        self.print.matches(label.marked_to_print)
            && (query.is_empty() || label.product_name.to_lowercase().contains(query))
    }

    /// Visible labels in cache order
    pub fn apply(&self, labels: &[Label]) -> Vec<Label> {
        let query = self.query.to_lowercase();
        labels
            .iter()
            .filter(|l| self.matches_lowered(&query, l))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_label(id: u32, name: &str, marked: bool) -> Label {
        Label {
            id,
            product_name: name.to_string(),
            form: "ks".to_string(),
            amount: 1.0,
            price: 10.0,
            unit_price: Some(10.0),
            marked_to_print: marked,
            created_at: None,
        }
    }

    fn sample() -> Vec<Label> {
        vec![
            make_label(1, "Milk 1l", true),
            make_label(2, "Chocolate MILK", false),
            make_label(3, "Bread", true),
            make_label(4, "Buttermilk", false),
            make_label(5, "Cheese", false),
        ]
    }

    fn ids(labels: &[Label]) -> Vec<u32> {
        labels.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let filter = LabelFilter {
            query: "milk".to_string(),
            print: PrintFilter::All,
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 4]);

        let filter = LabelFilter {
            query: "MiLk".to_string(),
            print: PrintFilter::All,
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![1, 2, 4]);
    }

    #[test]
    fn test_print_filter() {
        let labels = sample();
        let marked = LabelFilter { query: String::new(), print: PrintFilter::Marked }.apply(&labels);
        assert!(marked.iter().all(|l| l.marked_to_print));
        assert_eq!(ids(&marked), vec![1, 3]);

        let unmarked = LabelFilter { query: String::new(), print: PrintFilter::Unmarked }.apply(&labels);
        assert_eq!(ids(&unmarked), vec![2, 4, 5]);

        let all = LabelFilter::default().apply(&labels);
        assert_eq!(all, labels);
    }

    #[test]
    fn test_combined_filters() {
        let filter = LabelFilter {
            query: "milk".to_string(),
            print: PrintFilter::Unmarked,
        };
        assert_eq!(ids(&filter.apply(&sample())), vec![2, 4]);
        assert!(filter.matches(&make_label(9, "milkshake", false)));
        assert!(!filter.matches(&make_label(9, "milkshake", true)));
    }

    #[test]
    fn test_selector_values() {
        assert_eq!(PrintFilter::from_value("marked"), PrintFilter::Marked);
        assert_eq!(PrintFilter::from_value("unmarked"), PrintFilter::Unmarked);
        assert_eq!(PrintFilter::from_value("all"), PrintFilter::All);
        assert_eq!(PrintFilter::from_value("bogus"), PrintFilter::All);
        for (value, _) in PRINT_FILTERS {
            assert_eq!(PrintFilter::from_value(value).value(), *value);
        }
    }

    #[test]
    fn test_mixed_case_query_over_many_labels() {
        let labels: Vec<Label> = (0..50)
            .map(|i| make_label(i, if i % 5 == 0 { "Jogurt MILKY" } else { "Rohlík" }, i % 2 == 0))
            .collect();
        let filter = LabelFilter {
            query: "Milky".to_string(),
            print: PrintFilter::Marked,
        };
        let visible = filter.apply(&labels);
        assert_eq!(ids(&visible), vec![0, 10, 20, 30, 40]);
        assert!(visible.iter().all(|l| filter.matches(l)));
    }

    #[test]
    fn test_empty_cache() {
        assert!(LabelFilter::default().apply(&[]).is_empty());
    }
}
