//! Sum-of-products expression rendering
//!
//! Turns a selected implicant set into a literal SOP string. Per-term
//! literal formatting lives on [`Implicant::product`]; this module handles
//! the joining and the degenerate forms.

use crate::implicant::Implicant;

/// Render `terms` as a sum of products over `names`.
///
/// An empty selection renders as the constant `"0"`; a fully masked
/// implicant contributes the constant `"1"` (and, covering everything, is
/// the only selected term in that case).
pub(crate) fn sop_expression<'a, S: AsRef<str>>(
    terms: impl Iterator<Item = &'a Implicant>,
    num_vars: usize,
    names: &[S],
) -> String {
    let products: Vec<String> = terms.map(|t| t.product(num_vars, names)).collect();
    if products.is_empty() {
        return "0".to_string();
    }
    products.join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rowset::RowSet;

    const NAMES: [&str; 3] = ["A", "B", "C"];

    #[test]
    fn test_empty_selection_is_constant_false() {
        let none: Vec<Implicant> = Vec::new();
        assert_eq!(sop_expression(none.iter(), 3, &NAMES), "0");
    }

    #[test]
    fn test_single_term() {
        let term = Implicant::new(0b101, 0, RowSet::new(8));
        assert_eq!(sop_expression([term].iter(), 3, &NAMES), "AB'C");
    }

    #[test]
    fn test_two_terms_joined_with_or() {
        let low = Implicant::new(0b000, 0b010, RowSet::new(8));
        let high = Implicant::new(0b101, 0b010, RowSet::new(8));
        assert_eq!(sop_expression([low, high].iter(), 3, &NAMES), "A'C' + AC");
    }

    #[test]
    fn test_all_masked_is_constant_true() {
        let term = Implicant::new(0, 0b111, RowSet::new(8));
        assert_eq!(sop_expression([term].iter(), 3, &NAMES), "1");
    }
}
