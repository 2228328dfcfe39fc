//! Name ordering with pt-BR primary strength: case and diacritics do not
//! affect the relative order, only base letters do.

use std::cmp::Ordering;

use super::model::Visitor;
use super::search::fold;

/// Primary-strength comparison key for a name.
///
/// This approximates pt-BR base strength by folding case and combining marks
/// and then comparing code points. Letters with no canonical decomposition
/// (`ø`, `æ`, `ß`, `đ`) are left as-is and sort after `z`.
pub fn collation_key(name: &str) -> String {
    fold(name)
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Sorts by name in place. Ties keep their original relative order.
pub fn sort_by_name(visitors: &mut [Visitor]) {
    visitors.sort_by_cached_key(|v| collation_key(&v.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::VisitorId;
    use crate::visitor::model::FollowupStatus;

    fn named(id: &str, name: &str) -> Visitor {
        Visitor {
            id: VisitorId::from(id),
            name: name.to_string(),
            visit_date: "2025-01-05".to_string(),
            followup_status: FollowupStatus::Pending,
            phone: None,
            email: None,
            notes: None,
            is_member: false,
            archived: false,
            created_at_ms: 0,
            updated_at_ms: 0,
        }
    }

    #[test]
    fn test_case_and_accents_compare_equal() {
        assert_eq!(compare_names("Ana", "ana"), Ordering::Equal);
        assert_eq!(compare_names("Élio", "elio"), Ordering::Equal);
        assert_eq!(compare_names("Érica", "Fabio"), Ordering::Less);
        assert_eq!(compare_names("Érica", "Dora"), Ordering::Greater);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut list = vec![
            named("1", "bruno"),
            named("2", "Ana"),
            named("3", "ana"),
            named("4", "Carlos"),
        ];
        sort_by_name(&mut list);

        let names: Vec<&str> = list.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "ana", "bruno", "Carlos"]);

        let mut reversed = vec![named("3", "ana"), named("2", "Ana")];
        sort_by_name(&mut reversed);
        assert_eq!(reversed[0].id.as_str(), "3");
    }

    #[test]
    fn test_undecomposable_letters_sort_after_z() {
        assert_eq!(collation_key("Øyvind"), "øyvind");
        assert_eq!(compare_names("Øyvind", "Zélia"), Ordering::Greater);
        assert_eq!(compare_names("Åsa", "Zélia"), Ordering::Less);
    }

    #[test]
    fn test_empty_names_sort_first() {
        let mut list = vec![named("1", "Zé"), named("2", "")];
        sort_by_name(&mut list);
        assert_eq!(list[0].id.as_str(), "2");
    }
}
