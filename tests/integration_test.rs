use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use git2::{Oid, Repository, Signature};
use taiga_lint::cli::commits::check_commits;
use taiga_lint::git::GitRepository;
use taiga_lint::lint::check_message;
use taiga_lint::{extract_reference_data, validate_commit_title, LintError};
use tempfile::TempDir;

/// Test setup that creates a temporary git repository with test commits
struct TestRepo {
    _temp_dir: TempDir,
    repo_path: PathBuf,
    repo: Repository,
    commits: Vec<Oid>,
}

impl TestRepo {
    fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();

        let repo = Repository::init(&repo_path)?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(Self {
            _temp_dir: temp_dir,
            repo_path,
            repo,
            commits: Vec::new(),
        })
    }

    fn add_commit(&mut self, message: &str) -> Result<Oid> {
        let parents: Vec<Oid> = self.commits.last().copied().into_iter().collect();
        self.commit_with_parents(message, &parents)
    }

    fn commit_with_parents(&mut self, message: &str, parent_ids: &[Oid]) -> Result<Oid> {
        let file_path = self.repo_path.join("test.txt");
        fs::write(&file_path, format!("{}\n", self.commits.len()))?;

        let mut index = self.repo.index()?;
        index.add_path(std::path::Path::new("test.txt"))?;
        index.write()?;

        let signature = Signature::now("Test User", "test@example.com")?;
        let tree = self.repo.find_tree(index.write_tree()?)?;

        let parents = parent_ids
            .iter()
            .map(|id| self.repo.find_commit(*id))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let parent_refs: Vec<&git2::Commit<'_>> = parents.iter().collect();

        let commit_id = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parent_refs,
        )?;

        self.commits.push(commit_id);
        Ok(commit_id)
    }

    fn open(&self) -> Result<GitRepository> {
        GitRepository::open_at(&self.repo_path)
    }
}

const GOOD_MESSAGE: &str = "feat: implement user authentication (Taiga #AUTH-555)

Ticket Link: [(Taiga #AUTH-555)] (https://projects.example.id/project/AUTH/us/555)
Documentation Link: [Figma Design] (https://www.figma.com/auth-design)
Testing Link: [Test Cases] (https://docs.google.com/spreadsheets/test-auth)
";

#[test]
fn check_commit_range() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    let root = test_repo.add_commit("Initial commit")?;
    test_repo.add_commit(GOOD_MESSAGE)?;
    test_repo.add_commit("fix stuff")?;

    let repo = test_repo.open()?;
    let report = check_commits(&repo, &format!("{root}..HEAD"))?;

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.passing, 1);
    assert_eq!(report.summary.failing, 1);
    assert_eq!(report.exit_code(), 1);

    // Oldest first
    let first = &report.messages[0];
    assert_eq!(first.hash.as_deref(), Some(test_repo.commits[1].to_string().as_str()));
    assert!(first.passes());
    assert_eq!(
        first.references.ticket_link.as_ref().map(|t| t.display.as_str()),
        Some("Taiga #AUTH-555")
    );

    let second = &report.messages[1];
    assert_eq!(second.title, "fix stuff");
    assert!(!second.passes());
    assert!(second.references.is_empty());
    Ok(())
}

#[test]
fn check_head_only() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("wip")?;
    test_repo.add_commit(GOOD_MESSAGE)?;

    let report = check_commits(&test_repo.open()?, "HEAD")?;
    assert_eq!(report.summary.total, 1);
    assert_eq!(report.exit_code(), 0);
    Ok(())
}

#[test]
fn merge_commits_are_skipped() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    let root = test_repo.add_commit("Initial commit")?;
    let side = test_repo.add_commit("fix: repair dashboard chart (Taiga #PROJ-123)")?;
    test_repo.commit_with_parents("Merge branch 'side'", &[side, root])?;

    let report = check_commits(&test_repo.open()?, &format!("{root}..HEAD"))?;
    assert_eq!(report.summary.total, 1);
    assert_eq!(report.messages[0].title, "fix: repair dashboard chart (Taiga #PROJ-123)");
    Ok(())
}

#[test]
fn merge_at_head_is_skipped() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    let root = test_repo.add_commit("Initial commit")?;
    let side = test_repo.add_commit("fix: repair dashboard chart (Taiga #PROJ-123)")?;
    test_repo.commit_with_parents("Merge branch 'side'", &[side, root])?;

    let report = check_commits(&test_repo.open()?, "HEAD")?;
    assert_eq!(report.summary.total, 0);
    assert_eq!(report.exit_code(), 0);

    let single = check_commits(&test_repo.open()?, &side.to_string())?;
    assert_eq!(single.summary.total, 1);
    assert!(single.messages[0].passes());
    Ok(())
}

#[test]
fn malformed_range_is_rejected() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Initial commit")?;

    let err = match test_repo.open()?.commit_messages("HEAD...HEAD") {
        Ok(_) => anyhow::bail!("three-dot range should be rejected"),
        Err(err) => err,
    };
    assert_eq!(
        err.downcast_ref::<LintError>(),
        Some(&LintError::InvalidRange("HEAD...HEAD".to_string()))
    );
    Ok(())
}

#[test]
fn unknown_revision_is_an_error() -> Result<()> {
    let mut test_repo = TestRepo::new()?;
    test_repo.add_commit("Initial commit")?;
    assert!(test_repo.open()?.commit_messages("no-such-branch").is_err());
    Ok(())
}

#[test]
fn title_and_description_workflow() {
    let check = check_message(GOOD_MESSAGE);
    assert!(check.passes());
    assert_eq!(
        check.validation.parsed_data.as_ref().map(|p| p.project.as_str()),
        Some("AUTH")
    );
    assert!(check.references.ticket_link.is_some());
    assert!(check.references.documentation_link.is_some());
    assert!(check.references.testing_link.is_some());
}

#[test]
fn valid_title_json_snapshot() -> Result<()> {
    let result = validate_commit_title("feat: menambahkan fitur login user (Taiga #DATB-10353)");
    insta::assert_snapshot!(serde_json::to_string_pretty(&result)?, @r#"
    {
      "is_valid": true,
      "errors": [],
      "suggestions": [],
      "parsed_data": {
        "type": "feat",
        "summary": "menambahkan fitur login user",
        "project": "DATB",
        "ticket_number": "10353"
      }
    }
    "#);
    Ok(())
}

#[test]
fn unknown_type_json_snapshot() -> Result<()> {
    let result = validate_commit_title("feature: add login (Taiga #DATB-10353)");
    insta::assert_snapshot!(serde_json::to_string_pretty(&result)?, @r#"
    {
      "is_valid": false,
      "errors": [
        "Type 'feature' is not valid"
      ],
      "suggestions": [
        "Did you mean 'feat'?",
        "Allowed types: feat, fix, refactor, docs, style, test, chore, perf, ci, build, revert"
      ]
    }
    "#);
    Ok(())
}

#[test]
fn ticket_reference_json_snapshot() -> Result<()> {
    let refs = extract_reference_data("Ticket Link: [(Taiga #DATB-10353)] (https://example.com/t/10353)");
    insta::assert_snapshot!(serde_json::to_string_pretty(&refs)?, @r#"
    {
      "ticket_link": {
        "project": "DATB",
        "ticket_number": "10353",
        "url": "https://example.com/t/10353",
        "display": "Taiga #DATB-10353"
      }
    }
    "#);
    Ok(())
}
