//! Both backends must report the same new files for the same index state

use imagehook::{
    ErrorKind, GitBackend, GitCliSource, LibGitSource, StagedEntry, StagedFile, StagedFileLister,
    StagedStatusSource, StatusKind,
};
use tempfile::TempDir;

use crate::common::git_repo::TempGitRepo;

const BACKENDS: [GitBackend; 2] = [GitBackend::Cli, GitBackend::LibGit2];

fn list(repo: &TempGitRepo, backend: GitBackend) -> Vec<String> {
    let source = backend.open(repo.path(), "git");
    StagedFileLister::new(source)
        .fetch_new_staged_files()
        .unwrap_or_else(|e| panic!("{backend} backend failed: {e}"))
        .into_iter()
        .map(StagedFile::into_string)
        .collect()
}

fn sorted_entries(source: &dyn StagedStatusSource) -> Vec<StagedEntry> {
    let mut entries = source.staged_entries().unwrap();
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}

#[test]
fn test_new_images_in_fresh_repo() {
    let repo = TempGitRepo::with_new_images();
    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["subdir/test-2.jpg", "test-1.jpg"], "{backend}");
    }
}

#[test]
fn test_empty_index_is_empty() {
    let repo = TempGitRepo::new();
    for backend in BACKENDS {
        assert!(list(&repo, backend).is_empty(), "{backend}");
    }
}

#[test]
fn test_untracked_files_are_ignored() {
    let repo = TempGitRepo::new();
    repo.touch("staged.png");
    repo.touch("untracked.png");
    repo.stage("staged.png");
    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["staged.png"], "{backend}");
    }
}

#[test]
fn test_modified_file_is_not_new() {
    let repo = TempGitRepo::new();
    repo.write_file("logo.png", "v1");
    repo.stage("logo.png");
    repo.commit("add logo");

    repo.write_file("logo.png", "v2");
    repo.stage("logo.png");

    for backend in BACKENDS {
        assert!(list(&repo, backend).is_empty(), "{backend}");
    }
}

#[test]
fn test_deleted_file_is_not_new() {
    let repo = TempGitRepo::new();
    repo.write_file("old.gif", "gif");
    repo.stage("old.gif");
    repo.commit("add gif");

    repo.remove("old.gif");
    repo.touch("new.gif");
    repo.stage("new.gif");

    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["new.gif"], "{backend}");
    }
}

#[test]
fn test_rename_is_not_new() {
    let repo = TempGitRepo::new();
    repo.write_file("images/banner.jpg", "a reasonably long banner body so rename detection works\n");
    repo.stage_all();
    repo.commit("add banner");

    repo.rename("images/banner.jpg", "assets/banner.jpg");

    for backend in BACKENDS {
        assert!(list(&repo, backend).is_empty(), "{backend}");
    }
}

#[test]
fn test_added_then_edited_stays_new() {
    let repo = TempGitRepo::new();
    repo.write_file("photo.jpg", "first");
    repo.stage("photo.jpg");
    repo.write_file("photo.jpg", "second");
    repo.stage("photo.jpg");
    repo.write_file("photo.jpg", "unstaged edit");

    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["photo.jpg"], "{backend}");
    }
}

#[test]
fn test_new_files_after_first_commit() {
    let repo = TempGitRepo::new();
    repo.write_file("README.md", "# test\n");
    repo.stage_all();
    repo.commit("initial");

    repo.touch("b/two.png");
    repo.touch("a/one.png");
    repo.write_file("README.md", "# changed\n");
    repo.stage_all();

    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["a/one.png", "b/two.png"], "{backend}");
    }
}

#[test]
fn test_subdirectory_root_gives_repo_relative_paths() {
    let repo = TempGitRepo::with_new_images();
    for backend in BACKENDS {
        let source = backend.open(repo.path().join("subdir"), "git");
        let files = StagedFileLister::new(source).fetch_new_staged_files().unwrap();
        assert_eq!(files, vec!["subdir/test-2.jpg", "test-1.jpg"], "{backend}");
    }
}

#[test]
fn test_listing_does_not_touch_the_index() {
    let repo = TempGitRepo::with_new_images();
    let before = repo.git_ok(&["ls-files", "--stage"]).stdout;
    for backend in BACKENDS {
        list(&repo, backend);
    }
    assert_eq!(repo.git_ok(&["ls-files", "--stage"]).stdout, before);
}

#[test]
fn test_backends_report_same_classification() {
    let repo = TempGitRepo::new();
    repo.write_file("keep.png", "keep");
    repo.write_file("drop.png", "drop");
    repo.stage_all();
    repo.commit("initial");

    repo.write_file("keep.png", "changed");
    repo.remove("drop.png");
    repo.touch("fresh.png");
    repo.stage_all();
    repo.write_file("planned.png", "not staged yet");
    repo.intent_to_add("planned.png");

    let cli = sorted_entries(&GitCliSource::new(repo.path()));
    let lib = sorted_entries(&LibGitSource::new(repo.path()));
    assert_eq!(cli, lib);
    assert_eq!(
        cli,
        vec![
            StagedEntry::new("drop.png", StatusKind::Deleted),
            StagedEntry::added("fresh.png"),
            StagedEntry::new("keep.png", StatusKind::Modified),
        ]
    );
}

#[test]
fn test_subdirectory_root_ignores_diff_config() {
    let repo = TempGitRepo::with_new_images();
    repo.git_ok(&["config", "diff.relative", "true"]);
    repo.git_ok(&["config", "color.diff", "always"]);
    repo.git_ok(&["config", "color.ui", "always"]);

    for backend in BACKENDS {
        let source = backend.open(repo.path().join("subdir"), "git");
        let files = StagedFileLister::new(source).fetch_new_staged_files().unwrap();
        assert_eq!(files, vec!["subdir/test-2.jpg", "test-1.jpg"], "{backend}");
    }
}

#[test]
fn test_intent_to_add_is_not_new() {
    let repo = TempGitRepo::new();
    repo.write_file("x.png", "content not staged");
    repo.intent_to_add("x.png");
    repo.touch("y.png");
    repo.stage("y.png");

    for backend in BACKENDS {
        assert_eq!(list(&repo, backend), vec!["y.png"], "{backend}");
    }
}

#[test]
fn test_libgit_reads_alternate_index() {
    let repo = TempGitRepo::new();
    repo.touch("x.png");
    let index_file = repo.path().join(".git/alt-index");
    repo.stage_into_index(&index_file, "x.png");

    assert!(list(&repo, GitBackend::LibGit2).is_empty());

    let source = LibGitSource::new(repo.path()).with_index_file(&index_file);
    let files = StagedFileLister::new(source).fetch_new_staged_files().unwrap();
    assert_eq!(files, vec!["x.png"]);
}

#[test]
fn test_outside_repository_is_environment_error() {
    let temp = TempDir::new().unwrap();
    for backend in BACKENDS {
        let source = backend.open(temp.path(), "git");
        let err = StagedFileLister::new(source).fetch_new_staged_files().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Environment, "{backend}: {err}");
    }
}

#[test]
fn test_missing_git_program_is_tool_error() {
    let repo = TempGitRepo::with_new_images();
    let source = GitCliSource::with_program(repo.path(), "imagehook-no-such-git");
    let err = StagedFileLister::new(source).fetch_new_staged_files().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ToolInvocation);
}
