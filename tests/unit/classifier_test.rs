//! Ref change classification tests

use proptest::prelude::*;
use pushgate::core::models::{ObjectId, RefChange, RefChangeType};
use pushgate::core::services::{Classification, SkipReason, classify, should_check};
use test_case::test_case;

use crate::common::mocks::{NEW_SHA, OLD_SHA, ref_change};

#[test_case("refs/heads/master", RefChangeType::Update, true ; "branch update")]
#[test_case("refs/heads/feature/x", RefChangeType::Add, true ; "branch add")]
#[test_case("refs/tags/v1.0", RefChangeType::Add, true ; "tag add")]
#[test_case("refs/heads/master", RefChangeType::Delete, false ; "branch delete")]
#[test_case("refs/notes/commits", RefChangeType::Update, false ; "notes update")]
#[test_case("refs/notes/commits", RefChangeType::Add, false ; "notes add")]
#[test_case("refs/notesy/x", RefChangeType::Update, true ; "prefix lookalike")]
fn test_should_check(ref_id: &str, change_type: RefChangeType, expected: bool) {
    assert_eq!(should_check(&ref_change(ref_id, change_type)), expected);
}

#[test]
fn test_delete_wins_over_namespace() {
    let change = ref_change("refs/notes/commits", RefChangeType::Delete);
    assert_eq!(classify(&change), Classification::Skip(SkipReason::Delete));
}

#[test]
fn test_zero_target_skipped_even_when_not_delete() {
    let change = RefChange::new(
        "refs/heads/master",
        RefChangeType::Update,
        ObjectId::new(OLD_SHA),
        ObjectId::zero(),
    );
    assert_eq!(
        classify(&change),
        Classification::Skip(SkipReason::NonexistentTarget)
    );
}

#[test]
fn test_skip_reason_display() {
    assert_eq!(SkipReason::Delete.to_string(), "deletion");
    assert_eq!(SkipReason::ExcludedNamespace.to_string(), "excluded namespace");
}

proptest! {
    /// Deletions are never checked, whatever the ref
    #[test]
    fn deletions_never_checked(name in "[a-z/]{1,30}") {
        let change = ref_change(&format!("refs/{name}"), RefChangeType::Delete);
        prop_assert!(!should_check(&change));
    }

    /// Anything under refs/notes/ is never checked
    #[test]
    fn notes_never_checked(name in "[a-z0-9/_-]{1,30}") {
        let change = RefChange::new(
            format!("refs/notes/{name}"),
            RefChangeType::Update,
            ObjectId::new(OLD_SHA),
            ObjectId::new(NEW_SHA),
        );
        prop_assert!(!should_check(&change));
    }

    /// Branch updates to a real object are always checked
    #[test]
    fn branch_updates_checked(name in "[a-z0-9_-]{1,30}") {
        let change = ref_change(&format!("refs/heads/{name}"), RefChangeType::Update);
        prop_assert!(should_check(&change));
    }
}
