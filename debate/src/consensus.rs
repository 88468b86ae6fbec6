//! Consensus detection
//!
//! Polls every participant for a vote and reduces the set to a verdict.
//! The only supported policy is unanimity: any `disagree` or
//! `needs_revision` vote means no consensus.

use std::sync::Arc;

use crate::agent::AgentPort;
use crate::types::{error_marker, Vote, VoteDecision};

/// Stateless vote collector
#[derive(Debug, Clone, Copy, Default)]
pub struct VoteAggregator;

impl VoteAggregator {
    /// Ask every participant to vote, one after another in roster order.
    ///
    /// A participant whose vote call fails is recorded as `needs_revision`
    /// with an `[Error: ...]` reasoning; the poll always returns one vote
    /// per participant.
    pub async fn poll(
        participants: &[Arc<dyn AgentPort>],
        topic: &str,
        contents: &[String],
    ) -> Vec<Vote> {
        let mut votes = Vec::with_capacity(participants.len());

        for participant in participants {
            let vote = match participant.vote(topic, contents).await {
                Ok(vote) => vote,
                Err(e) => {
                    tracing::warn!(
                        agent = participant.agent_id(),
                        error = %e,
                        "Vote failed, counting as needs_revision"
                    );
                    Vote::new(
                        participant.agent_id(),
                        VoteDecision::NeedsRevision,
                        error_marker(&e),
                    )
                }
            };

            tracing::debug!(agent = %vote.agent_id, decision = %vote.decision, "Vote cast");
            votes.push(vote);
        }

        votes
    }

    /// True only if there is at least one vote and every vote is `agree`
    pub fn unanimous(votes: &[Vote]) -> bool {
        !votes.is_empty() && votes.iter().all(Vote::is_agree)
    }

    /// Poll all participants and report whether they unanimously agree
    pub async fn check(
        participants: &[Arc<dyn AgentPort>],
        topic: &str,
        contents: &[String],
    ) -> bool {
        let votes = Self::poll(participants, topic, contents).await;
        let verdict = Self::unanimous(&votes);

        let agreeing = votes.iter().filter(|v| v.is_agree()).count();
        tracing::info!(agreeing, total = votes.len(), verdict, "Consensus check");

        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Voter {
        id: String,
        reply: Result<&'static str, &'static str>,
        calls: AtomicUsize,
    }

    impl Voter {
        fn new(id: &str, reply: Result<&'static str, &'static str>) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AgentPort for Voter {
        fn agent_id(&self) -> &str {
            &self.id
        }

        fn role(&self) -> &str {
            "voter"
        }

        async fn process(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(String::new())
        }

        async fn vote(&self, _topic: &str, _current: &[String]) -> Result<Vote, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(Vote::from_text(&self.id, text)),
                Err(msg) => Err(ProviderError::request(msg)),
            }
        }
    }

    fn roster(voters: &[Arc<Voter>]) -> Vec<Arc<dyn AgentPort>> {
        voters.iter().map(|v| v.clone() as Arc<dyn AgentPort>).collect()
    }

    #[tokio::test]
    async fn test_all_agree_is_consensus() {
        let voters = [Voter::new("a", Ok("agree")), Voter::new("b", Ok("I agree"))];
        assert!(VoteAggregator::check(&roster(&voters), "t", &["x".to_string()]).await);
    }

    #[tokio::test]
    async fn test_single_dissent_blocks_consensus() {
        let voters = [
            Voter::new("a", Ok("agree")),
            Voter::new("b", Ok("disagree")),
            Voter::new("c", Ok("agree")),
        ];
        assert!(!VoteAggregator::check(&roster(&voters), "t", &[]).await);
    }

    #[tokio::test]
    async fn test_needs_revision_blocks_consensus() {
        let voters = [Voter::new("a", Ok("agree")), Voter::new("b", Ok("not yet"))];
        assert!(!VoteAggregator::check(&roster(&voters), "t", &[]).await);
    }

    #[tokio::test]
    async fn test_every_participant_is_polled() {
        let voters = [
            Voter::new("a", Ok("disagree")),
            Voter::new("b", Ok("agree")),
            Voter::new("c", Ok("agree")),
        ];
        let votes = VoteAggregator::poll(&roster(&voters), "t", &[]).await;

        assert_eq!(votes.len(), 3);
        let ids: Vec<_> = votes.iter().map(|v| v.agent_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        for voter in &voters {
            assert_eq!(voter.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_failed_vote_counts_as_needs_revision() {
        let voters = [Voter::new("a", Ok("agree")), Voter::new("b", Err("timeout"))];
        let votes = VoteAggregator::poll(&roster(&voters), "t", &[]).await;

        assert_eq!(votes[1].decision, VoteDecision::NeedsRevision);
        assert_eq!(votes[1].reasoning, "[Error: timeout]");
        assert!(!VoteAggregator::unanimous(&votes));
    }

    #[test]
    fn test_empty_vote_set_is_not_unanimous() {
        assert!(!VoteAggregator::unanimous(&[]));
    }
}
