//! Built-in rule tests through the evaluator

use pushgate::config::PolicyConfig;
use pushgate::core::models::{RefChangeType, ViolationKind};
use pushgate::core::services::{RefChangeEvaluator, RuleEvaluator};
use test_case::test_case;

use crate::common::mocks::{MockRepository, commit, master, ref_change};

fn evaluate(config: &PolicyConfig, repo: &MockRepository) -> Vec<(ViolationKind, String)> {
    RuleEvaluator::default()
        .evaluate(repo, config, &master())
        .unwrap()
        .into_iter()
        .map(|v| (v.kind(), v.message().to_string()))
        .collect()
}

fn repo_with(message: &str, name: &str, email: &str) -> MockRepository {
    MockRepository::new()
        .with_pusher("Alice", "alice@example.com")
        .with_commits("refs/heads/master", vec![commit("c1", message, name, email)])
}

#[test_case("ABC-123 Fix it", true ; "ticket prefix")]
#[test_case("ABC-123 Fix it\n\nLonger body\nacross lines", true ; "multi line body")]
#[test_case("ABC-123 Fix it\n", true ; "trailing newline")]
#[test_case("Fix it", false ; "missing ticket")]
#[test_case("see ABC-123", false ; "ticket not at start")]
fn test_commit_message_pattern(message: &str, ok: bool) {
    let config = PolicyConfig {
        commit_message_regex: Some("[A-Z]+-[0-9]+ .*".to_string()),
        ..PolicyConfig::default()
    };

    let violations = evaluate(&config, &repo_with(message, "Alice", "alice@example.com"));
    assert_eq!(violations.is_empty(), ok, "{violations:?}");
}

#[test_case("alice@example.com", true ; "same email")]
#[test_case("ALICE@Example.com", true ; "case differs")]
#[test_case("bob@example.com", false ; "other email")]
fn test_matching_author_email(email: &str, ok: bool) {
    let config = PolicyConfig {
        require_matching_author_email: true,
        ..PolicyConfig::default()
    };

    let violations = evaluate(&config, &repo_with("msg", "Alice", email));
    assert_eq!(violations.is_empty(), ok);
}

#[test_case("Alice", true ; "same name")]
#[test_case(" alice ", true ; "case and whitespace differ")]
#[test_case("Bob", false ; "other name")]
fn test_matching_author_name(name: &str, ok: bool) {
    let config = PolicyConfig {
        require_matching_author_name: true,
        ..PolicyConfig::default()
    };

    let violations = evaluate(&config, &repo_with("msg", name, "alice@example.com"));
    assert_eq!(violations.is_empty(), ok);
}

#[test]
fn test_author_email_pattern() {
    let config = PolicyConfig {
        author_email_regex: Some(".*@example\\.com".to_string()),
        ..PolicyConfig::default()
    };

    assert!(evaluate(&config, &repo_with("msg", "Bob", "bob@example.com")).is_empty());

    let violations = evaluate(&config, &repo_with("msg", "Bob", "bob@gmail.com"));
    assert_eq!(
        violations,
        [(
            ViolationKind::AuthorEmailRegex,
            "c1: author email 'bob@gmail.com' does not match regex '.*@example\\.com'".to_string()
        )]
    );
}

#[test]
fn test_unknown_pusher_skips_identity_rules() {
    let config = PolicyConfig {
        require_matching_author_email: true,
        require_matching_author_name: true,
        ..PolicyConfig::default()
    };
    let repo = MockRepository::new().with_commits(
        "refs/heads/master",
        vec![commit("c1", "msg", "Bob", "bob@example.com")],
    );

    assert!(evaluate(&config, &repo).is_empty());
}

#[test]
fn test_excluded_users_are_skipped() {
    let config = PolicyConfig {
        require_matching_author_email: true,
        exclude_users: Some("Jenkins, ci@example.com".to_string()),
        ..PolicyConfig::default()
    };

    assert!(evaluate(&config, &repo_with("msg", "jenkins", "build@example.com")).is_empty());
    assert!(evaluate(&config, &repo_with("msg", "CI", "CI@example.com")).is_empty());
    assert_eq!(evaluate(&config, &repo_with("msg", "Bob", "bob@example.com")).len(), 1);
}

#[test]
fn test_exclude_by_message() {
    let config = PolicyConfig {
        commit_message_regex: Some("[A-Z]+-[0-9]+ .*".to_string()),
        exclude_by_regex: Some("(?i)wip.*".to_string()),
        ..PolicyConfig::default()
    };

    assert!(evaluate(&config, &repo_with("WIP: later\n\nnotes", "Alice", "a@b.c")).is_empty());
    assert_eq!(evaluate(&config, &repo_with("later", "Alice", "a@b.c")).len(), 1);
}

#[test]
fn test_excluded_branch_is_not_checked() {
    let config = PolicyConfig {
        commit_message_regex: Some("[A-Z]+-[0-9]+ .*".to_string()),
        exclude_branch_regex: Some("mast.*".to_string()),
        ..PolicyConfig::default()
    };

    assert!(evaluate(&config, &repo_with("bad", "Alice", "a@b.c")).is_empty());
}

#[test_case("feature/login", RefChangeType::Add, 0 ; "valid new branch")]
#[test_case("login", RefChangeType::Add, 1 ; "invalid new branch")]
#[test_case("login", RefChangeType::Update, 0 ; "existing branch")]
fn test_branch_name(branch: &str, change_type: RefChangeType, expected: usize) {
    let config = PolicyConfig {
        branch_name_regex: Some("(feature|bugfix)/.*".to_string()),
        ..PolicyConfig::default()
    };
    let change = ref_change(&format!("refs/heads/{branch}"), change_type);

    let violations = RuleEvaluator::default()
        .evaluate(&MockRepository::new(), &config, &change)
        .unwrap();
    assert_eq!(violations.len(), expected);
}

#[test]
fn test_custom_message_is_appended() {
    let config = PolicyConfig {
        commit_message_regex: Some("[A-Z]+-[0-9]+ .*".to_string()),
        error_message_commit_message: Some("Reference a JIRA ticket.".to_string()),
        ..PolicyConfig::default()
    };

    let violations = evaluate(&config, &repo_with("bad", "Alice", "a@b.c"));
    assert_eq!(violations.len(), 1);
    assert!(violations[0].1.ends_with("\n\n    Reference a JIRA ticket."));
}

#[test]
fn test_invalid_pattern_becomes_configuration_violation() {
    let config = PolicyConfig {
        commit_message_regex: Some("(unclosed".to_string()),
        ..PolicyConfig::default()
    };

    let violations = evaluate(&config, &repo_with("anything", "Alice", "a@b.c"));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].0, ViolationKind::Configuration);
    assert!(violations[0].1.contains("commitMessageRegex"));
}

#[test]
fn test_author_messages_name_the_commit() {
    let config = PolicyConfig {
        require_matching_author_email: true,
        require_matching_author_name: true,
        ..PolicyConfig::default()
    };
    let repo = MockRepository::new().with_pusher(" Alice Smith ", "Alice@Example.com").with_commits(
        "refs/heads/master",
        vec![
            commit("c1", "m", "alice smith", "alice@example.com"),
            commit("c2", "m", "Bob", "bob@example.com"),
        ],
    );

    assert_eq!(
        evaluate(&config, &repo),
        [
            (
                ViolationKind::AuthorEmail,
                "c2: expected author email 'Alice@Example.com' but found 'bob@example.com'"
                    .to_string()
            ),
            (
                ViolationKind::AuthorName,
                "c2: expected author name 'Alice Smith' but found 'Bob'".to_string()
            ),
        ]
    );
}

#[test]
fn test_blank_pusher_email_skips_email_rule() {
    let config = PolicyConfig {
        require_matching_author_email: true,
        ..PolicyConfig::default()
    };
    let repo = MockRepository::new()
        .with_pusher("Alice", "  ")
        .with_commits("refs/heads/master", vec![commit("c1", "m", "Bob", "bob@example.com")]);

    assert!(evaluate(&config, &repo).is_empty());
}

#[test]
fn test_merge_commits_can_be_excluded() {
    let mut merge = commit("c1", "Merge branch 'x'", "A", "a@x");
    merge.parent_count = 2;
    let repo = MockRepository::new().with_commits("refs/heads/master", vec![merge]);
    let config = PolicyConfig {
        commit_message_regex: Some("[A-Z]+-[0-9]+ .*".to_string()),
        exclude_merge_commits: true,
        ..PolicyConfig::default()
    };

    assert!(evaluate(&config, &repo).is_empty());
}

/// `excludeByRegex` and `commitMessageRegex` see the same message text, so
/// a commit is excluded by a pattern exactly when it would pass it
#[test_case("WIP\n" ; "newline")]
#[test_case("WIP\r\n" ; "crlf")]
#[test_case("WIP \n" ; "trailing space")]
#[test_case("WIP\t" ; "trailing tab")]
fn test_message_patterns_agree_on_trailing_whitespace(message: &str) {
    let required = PolicyConfig {
        commit_message_regex: Some("WIP".to_string()),
        ..PolicyConfig::default()
    };
    let excluded = PolicyConfig {
        commit_message_regex: Some("never".to_string()),
        exclude_by_regex: Some("WIP".to_string()),
        ..PolicyConfig::default()
    };
    let repo = repo_with(message, "Alice", "alice@example.com");

    let passes = evaluate(&required, &repo).is_empty();
    let is_excluded = evaluate(&excluded, &repo).is_empty();
    assert_eq!(passes, is_excluded);
}
