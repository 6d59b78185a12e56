use locallib_polls::error::PollsServiceError;
use locallib_polls::usecase::question::GetResultsUseCase;
use locallib_polls::usecase::vote::VoteUseCase;

use crate::helpers::MockPolls;

fn usecase(polls: &MockPolls) -> VoteUseCase<MockPolls, MockPolls> {
    VoteUseCase {
        questions: polls.clone(),
        votes: polls.clone(),
    }
}

#[tokio::test]
async fn should_add_exactly_one_vote_to_chosen_choice() {
    let polls = MockPolls::seeded();
    usecase(&polls).execute(1, Some(12)).await.unwrap();
    assert_eq!(polls.votes(), vec![(11, 0), (12, 5), (13, 1), (21, 7)]);
}

#[tokio::test]
async fn should_show_vote_in_results() {
    let polls = MockPolls::seeded();
    usecase(&polls).execute(1, Some(11)).await.unwrap();
    usecase(&polls).execute(1, Some(11)).await.unwrap();

    let results = GetResultsUseCase {
        repo: polls.clone(),
    }
    .execute(1)
    .await
    .unwrap();
    let not_much = results.choices.iter().find(|c| c.id == 11).unwrap();
    assert_eq!(not_much.votes, 2);
}

#[tokio::test]
async fn should_reject_missing_selection_without_counting() {
    let polls = MockPolls::seeded();
    let before = polls.votes();
    let result = usecase(&polls).execute(1, None).await;
    assert!(matches!(result, Err(PollsServiceError::MissingSelection)));
    assert_eq!(polls.votes(), before);
}

#[tokio::test]
async fn should_reject_choice_of_another_question_without_counting() {
    let polls = MockPolls::seeded();
    let before = polls.votes();
    let result = usecase(&polls).execute(1, Some(21)).await;
    assert!(matches!(result, Err(PollsServiceError::MissingSelection)));
    assert_eq!(polls.votes(), before);
}

#[tokio::test]
async fn should_report_unknown_question_before_selection() {
    let polls = MockPolls::seeded();
    let before = polls.votes();
    let result = usecase(&polls).execute(99, None).await;
    assert!(matches!(result, Err(PollsServiceError::QuestionNotFound)));
    assert_eq!(polls.votes(), before);
}
