//! Voting workflow integration tests

use ballot::{
    CastError, Error, Result, ValidationError, VotingBooth,
    config::ValidationRules,
    engine::{CandidateRegistry, validate_identity},
    types::{CandidateId, CandidateSpec, SessionState},
};

const ANA: CandidateId = CandidateId::new(1);
const BUDI: CandidateId = CandidateId::new(2);
const CITRA: CandidateId = CandidateId::new(3);

fn two_candidate_booth() -> VotingBooth {
    let registry = CandidateRegistry::new(vec![
        CandidateSpec::new(1, "Ana", "Transparent budgets"),
        CandidateSpec::new(2, "Budi", "More study rooms"),
    ])
    .unwrap();
    VotingBooth::new(registry, ValidationRules::default())
}

fn three_candidate_booth() -> VotingBooth {
    let registry = CandidateRegistry::new(vec![
        CandidateSpec::new(1, "Ana", ""),
        CandidateSpec::new(2, "Budi", ""),
        CandidateSpec::new(3, "Citra", ""),
    ])
    .unwrap();
    VotingBooth::new(registry, ValidationRules::default())
}

fn counts(booth: &VotingBooth) -> Vec<u64> {
    booth.list_candidates().iter().map(|c| c.votes()).collect()
}

#[test]
fn test_cast_and_tally() -> Result<()> {
    let mut booth = two_candidate_booth();

    booth.select_candidate(ANA)?;
    let identity = validate_identity("Sari", "12345678")?;
    booth.cast_vote(identity)?;

    let results = booth.compute_results();
    assert_eq!(results.total_votes, 1);

    let ana = &results.per_candidate[0];
    assert_eq!((ana.id, ana.name.as_str(), ana.count), (ANA, "Ana", 1));
    assert_eq!(ana.percentage, 100.0);

    let budi = &results.per_candidate[1];
    assert_eq!((budi.id, budi.name.as_str(), budi.count), (BUDI, "Budi", 0));
    assert_eq!(budi.percentage, 0.0);

    let leaders: Vec<CandidateId> = results.leaders().iter().map(|e| e.id).collect();
    assert_eq!(leaders, vec![ANA]);
    Ok(())
}

#[test]
fn test_identity_rejections() {
    assert_eq!(
        validate_identity("", "12345678").unwrap_err(),
        ValidationError::EmptyName
    );
    assert_eq!(
        validate_identity("Sari", "123").unwrap_err(),
        ValidationError::IdentifierTooShort
    );
    assert_eq!(
        validate_identity("Sari", "").unwrap_err(),
        ValidationError::EmptyIdentifier
    );
}

#[test]
fn test_cast_without_selection() -> Result<()> {
    let mut booth = two_candidate_booth();

    let err = booth.cast_vote(validate_identity("Sari", "12345678")?).unwrap_err();

    assert!(matches!(err, Error::Cast(CastError::NoCandidateSelected)));
    assert_eq!(counts(&booth), vec![0, 0]);
    assert_eq!(booth.state(), SessionState::NotStarted);
    Ok(())
}

#[test]
fn test_second_cast_is_rejected() -> Result<()> {
    let mut booth = two_candidate_booth();
    booth.select_candidate(BUDI)?;
    booth.cast_vote(validate_identity("Sari", "12345678")?)?;
    let after_first = counts(&booth);

    let err = booth.cast_vote(validate_identity("Rina", "87654321")?).unwrap_err();

    assert!(matches!(err, Error::Cast(CastError::AlreadyCast)));
    assert_eq!(counts(&booth), after_first);
    assert_eq!(after_first, vec![0, 1]);
    // The committed voter is still the first one
    assert_eq!(booth.voter().map(|v| v.name()), Some("Sari"));
    Ok(())
}

#[test]
fn test_reset_then_vote_again() -> Result<()> {
    let mut booth = two_candidate_booth();
    booth.select_candidate(ANA)?;
    booth.cast_vote(validate_identity("Sari", "12345678")?)?;

    booth.reset();
    booth.select_candidate(BUDI)?;
    booth.cast_vote(validate_identity("Rina", "87654321")?)?;

    let results = booth.compute_results();
    assert_eq!(results.entry(ANA).map(|e| e.count), Some(0));
    assert_eq!(results.entry(BUDI).map(|e| e.count), Some(1));
    assert_eq!(results.total_votes, 1);
    Ok(())
}

#[test]
fn test_only_last_selection_counts() -> Result<()> {
    let mut booth = three_candidate_booth();

    for id in [ANA, CITRA, BUDI, ANA, CITRA] {
        booth.select_candidate(id)?;
    }
    booth.cast_vote(validate_identity("Sari", "12345678")?)?;

    assert_eq!(counts(&booth), vec![0, 0, 1]);
    Ok(())
}

#[test]
fn test_exactly_one_counter_moves() -> Result<()> {
    for target in [ANA, BUDI, CITRA] {
        let mut booth = three_candidate_booth();
        let before = counts(&booth);

        booth.select_candidate(target)?;
        booth.cast_vote(validate_identity("Sari", "12345678")?)?;

        let after = counts(&booth);
        for (candidate, (b, a)) in booth.list_candidates().iter().zip(before.iter().zip(&after)) {
            if candidate.id() == target {
                assert_eq!(*a, b + 1);
            } else {
                assert_eq!(a, b);
            }
        }
    }
    Ok(())
}

#[test]
fn test_selection_after_cast_is_rejected() -> Result<()> {
    let mut booth = three_candidate_booth();
    booth.select_candidate(ANA)?;
    booth.cast_vote(validate_identity("Sari", "12345678")?)?;

    let err = booth.select_candidate(BUDI).unwrap_err();

    assert!(matches!(err, Error::Cast(CastError::AlreadyCast)));
    assert_eq!(booth.selected_candidate().map(|c| c.id()), Some(ANA));
    Ok(())
}

#[test]
fn test_unknown_candidate() {
    let mut booth = three_candidate_booth();

    let err = booth.select_candidate(CandidateId::new(404)).unwrap_err();

    match err {
        Error::NotFound(e) => assert_eq!(e.candidate_id, CandidateId::new(404)),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    assert_eq!(booth.state(), SessionState::NotStarted);
}

#[test]
fn test_tally_invariants_across_sessions() -> Result<()> {
    let mut booth = three_candidate_booth();

    let empty = booth.compute_results();
    assert_eq!(empty.total_votes, 0);
    assert!(empty.per_candidate.iter().all(|e| e.percentage == 0.0));

    for target in [CITRA, ANA, CITRA] {
        booth.select_candidate(target)?;
        booth.cast_vote(validate_identity("Sari", "12345678")?)?;

        let results = booth.compute_results();
        let sum_counts: u64 = results.per_candidate.iter().map(|e| e.count).sum();
        let sum_pct: f64 = results.per_candidate.iter().map(|e| e.percentage).sum();

        assert_eq!(results.total_votes, sum_counts);
        assert_eq!(results.total_votes, 1);
        assert!((sum_pct - 100.0).abs() < 1e-6);

        booth.reset();
        assert_eq!(booth.compute_results().total_votes, 0);
    }
    Ok(())
}

#[test]
fn test_reset_from_every_state() -> Result<()> {
    // NotStarted
    let mut booth = three_candidate_booth();
    booth.reset();
    assert_eq!(booth.state(), SessionState::NotStarted);

    // Selecting
    booth.select_candidate(BUDI)?;
    booth.reset();
    assert_eq!(booth.state(), SessionState::NotStarted);
    assert!(booth.selected_candidate().is_none());

    // Cast
    booth.select_candidate(BUDI)?;
    booth.cast_vote(validate_identity("Sari", "12345678")?)?;
    booth.reset();
    assert_eq!(booth.state(), SessionState::NotStarted);
    assert!(booth.voter().is_none());
    assert_eq!(counts(&booth), vec![0, 0, 0]);
    Ok(())
}
