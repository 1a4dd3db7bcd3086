mod common;

use assert_fs::TempDir;
use common::objects::{TreeEntrySpec, absent_oid, write_blob, write_commit, write_tree};
use common::{DIRECTORY, REGULAR, SampleRepository, repository_dir, sample_repository};
use gitdav::{EntryMode, GitError, ObjectId, ObjectType, Repository, Snapshot};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Read;

fn oid(hex: &str) -> ObjectId {
    ObjectId::try_parse(hex).expect("valid object id")
}

fn open_snapshot<'r>(repository: &'r Repository, commit: &str) -> Result<Snapshot<'r>, GitError> {
    let commit = repository.commit(&oid(commit))?;
    Snapshot::from_commit(&commit)
}

#[rstest]
fn read_dir_describes_files_and_directories(
    sample_repository: SampleRepository,
) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let listing = snapshot
        .read_dir("")?
        .into_iter()
        .map(|entry| (entry.name.to_string(), entry.is_dir(), entry.size))
        .collect::<Vec<_>>();

    assert_eq!(
        listing,
        vec![
            ("hello.txt".to_string(), false, Some(5)),
            ("link".to_string(), false, Some(9)),
            ("run.sh".to_string(), false, Some(18)),
            ("sub".to_string(), true, None),
        ]
    );

    Ok(())
}

#[rstest]
#[case::plain("sub")]
#[case::leading_slash("/sub")]
#[case::trailing_slash("sub/")]
#[case::doubled_slashes("//sub//")]
fn empty_path_components_are_ignored(
    sample_repository: SampleRepository,
    #[case] path: &str,
) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let names = snapshot
        .read_dir(path)?
        .into_iter()
        .map(|entry| entry.name.to_string())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["deeper", "nested.txt"]);

    Ok(())
}

#[rstest]
fn stat_of_root_is_a_directory(sample_repository: SampleRepository) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let root = snapshot.stat("/")?;

    assert!(root.is_dir());
    assert!(root.name.is_empty());
    assert_eq!(root.oid.as_ref(), sample_repository.root_tree);
    assert_eq!(root.size, None);

    Ok(())
}

#[rstest]
fn stat_describes_nested_paths(sample_repository: SampleRepository) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let file = snapshot.stat("sub/nested.txt")?;
    let dir = snapshot.stat("sub/deeper")?;

    assert_eq!(file.name, "nested.txt");
    assert_eq!(file.oid.as_ref(), sample_repository.nested_blob);
    assert_eq!(file.size, Some(15));
    assert!(!file.is_dir());
    assert_eq!(dir.mode, EntryMode::Directory);
    assert_eq!(dir.oid.as_ref(), sample_repository.deeper_tree);

    Ok(())
}

#[rstest]
fn open_reads_deeply_nested_file(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let mut blob = snapshot.open("sub/deeper/leaf.txt")?;
    let mut content = String::new();
    blob.read_to_string(&mut content)?;

    assert_eq!(blob.size(), 4);
    assert_eq!(content, "leaf");

    Ok(())
}

#[rstest]
#[case::missing_file("sub/missing.txt", "missing.txt")]
#[case::missing_directory("nope/leaf.txt", "nope")]
fn missing_component_is_entry_not_found(
    sample_repository: SampleRepository,
    #[case] path: &str,
    #[case] missing: &str,
) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let result = snapshot.open(path);

    assert!(matches!(result, Err(GitError::EntryNotFound(name)) if name == missing));

    Ok(())
}

#[rstest]
fn opening_the_root_is_entry_not_found(
    sample_repository: SampleRepository,
) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    assert!(matches!(snapshot.open("/"), Err(GitError::EntryNotFound(_))));

    Ok(())
}

#[rstest]
fn traversing_through_a_file_is_wrong_kind(
    sample_repository: SampleRepository,
) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    let result = snapshot.read_dir("hello.txt/inner");

    assert!(matches!(
        result,
        Err(GitError::WrongObjectKind {
            expected: ObjectType::Tree,
            found: ObjectType::Blob,
            ..
        })
    ));

    Ok(())
}

#[rstest]
fn opening_a_directory_is_wrong_kind(sample_repository: SampleRepository) -> Result<(), GitError> {
    let repository = Repository::open(sample_repository.dir.path())?;
    let snapshot = open_snapshot(&repository, &sample_repository.commit)?;

    assert!(matches!(
        snapshot.open("sub/deeper"),
        Err(GitError::WrongObjectKind {
            expected: ObjectType::Blob,
            found: ObjectType::Tree,
            ..
        })
    ));

    Ok(())
}

#[rstest]
fn packed_entries_are_listed_without_size(repository_dir: TempDir) -> Result<(), GitError> {
    let root = repository_dir.path();
    let packed_blob = absent_oid("packed blob");
    let packed_tree = absent_oid("packed tree");
    let present = write_blob(root, b"present");
    let tree = write_tree(
        root,
        &[
            TreeEntrySpec::new(DIRECTORY, "archive", &packed_tree),
            TreeEntrySpec::new(REGULAR, "packed.bin", &packed_blob),
            TreeEntrySpec::new(REGULAR, "present.txt", &present),
        ],
    );
    let commit = write_commit(root, &tree, &[], "Packed\n");

    let repository = Repository::open(root)?;
    let snapshot = open_snapshot(&repository, &commit)?;
    let entries = snapshot.read_dir("")?;

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].name, "packed.bin");
    assert_eq!(entries[1].size, None);
    assert_eq!(entries[2].size, Some(7));
    assert!(matches!(
        snapshot.read_dir("archive"),
        Err(GitError::ObjectNotFound(id)) if id.as_ref() == packed_tree
    ));

    Ok(())
}
