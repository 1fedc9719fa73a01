//! Fuzz target for repository operations.
//!
//! Replays arbitrary commit/checkout sequences and checks that ids stay
//! monotonic and checkouts never create commits or move existing tips.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use twig_storage::Repository;

#[derive(Debug, Arbitrary)]
enum Op {
    Commit(String),
    Checkout(String),
    CreateBranch(String),
    SwitchBranch(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut repo = Repository::new("fuzz");
    let mut last_id = None;

    for op in ops {
        let commits_before = repo.commit_count();
        let branches_before = repo.branch_count();

        match op {
            Op::Commit(message) => match repo.commit(message) {
                Ok(commit) => {
                    assert!(last_id.map_or(true, |last| commit.id() > last));
                    last_id = Some(commit.id());
                }
                Err(_) => assert_eq!(repo.commit_count(), commits_before),
            },
            Op::Checkout(name) => {
                let tip_before = repo.branch(&name).map(|b| b.tip());
                let _ = repo.checkout(&name);
                if let Some(tip) = tip_before {
                    assert_eq!(repo.branch(&name).map(|b| b.tip()), Some(tip));
                    assert_eq!(repo.branch_count(), branches_before);
                }
            }
            Op::CreateBranch(name) => {
                if repo.create_branch(&name).is_err() {
                    assert_eq!(repo.branch_count(), branches_before);
                }
            }
            Op::SwitchBranch(name) => {
                let _ = repo.switch_branch(&name);
                assert_eq!(repo.branch_count(), branches_before);
            }
        }

        assert!(repo.commit_count() <= commits_before + 1);
        let log = repo.log().expect("HEAD always names a branch");
        assert!(log.windows(2).all(|w| w[0].id() > w[1].id()));
    }
});
