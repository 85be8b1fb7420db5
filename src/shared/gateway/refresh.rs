use tokio::sync::{broadcast, Mutex};

use crate::shared::errors::RefreshError;

/// 하나의 refresh 작업이 settle된 결과 (대기자 전원에게 공유됨)
/// Settled outcome of one refresh operation, shared with every waiter
#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// 새 access token 발급됨
    /// A new access token was issued
    Refreshed(String),

    /// Refresh 실패 (세션은 leader가 이미 제거함)
    /// Refresh failed (the leader already cleared the session)
    Failed(RefreshError),
}

/// Single-flight 참여 결과
/// Result of joining the single-flight coordination
pub enum RefreshTicket {
    /// 이 호출자가 refresh를 직접 수행해야 함
    /// This caller must perform the refresh itself
    Leader,

    /// 이미 진행 중인 refresh의 결과를 기다림
    /// Await the outcome of the refresh already in flight
    Follower(broadcast::Receiver<RefreshOutcome>),
}

// Refresh single-flight 조정자
// Refresh single-flight coordinator
//
// 상태는 둘뿐이다: idle (None) <-> refreshing (Some(sender))
// - 첫 번째 인증 실패가 Leader가 되어 refresh를 수행한다
// - 그 사이 도착한 인증 실패는 전부 같은 sender를 구독한다 (중복 refresh 호출 없음)
// - settle되면 결과가 모든 Follower에게 broadcast되고 idle로 돌아간다
//
// 구독은 lock 안에서 일어나고 send도 lock 안에서 일어나므로
// Follower가 결과를 놓치는 경우는 없다.
pub struct RefreshCoordinator {
    inflight: Mutex<Option<broadcast::Sender<RefreshOutcome>>>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self {
            inflight: Mutex::new(None),
        }
    }

    /// Single-flight 참여
    /// 진행 중인 refresh가 없으면 Leader, 있으면 Follower가 된다
    pub async fn join(&self) -> RefreshTicket {
        let mut guard = self.inflight.lock().await;
        match guard.as_ref() {
            Some(sender) => RefreshTicket::Follower(sender.subscribe()),
            None => {
                // 결과는 settle 시점에 정확히 1건만 전송된다
                let (sender, _) = broadcast::channel(1);
                *guard = Some(sender);
                RefreshTicket::Leader
            }
        }
    }

    /// Refresh 종료: 결과를 모든 Follower에게 전달하고 idle로 복귀
    /// Leader만 호출한다
    pub async fn complete(&self, outcome: RefreshOutcome) {
        let mut guard = self.inflight.lock().await;
        if let Some(sender) = guard.take() {
            // Follower가 하나도 없으면 send가 에러를 반환하지만 문제 없다
            let _ = sender.send(outcome);
        }
    }

    /// 최대 대기 시간 초과 시 guard 해제
    /// Release the in-flight guard after the maximum wait elapses
    ///
    /// Leader가 결과 없이 사라진 경우에도 다음 인증 실패가
    /// 새 refresh를 시작할 수 있어야 한다.
    pub async fn expire(&self) {
        let mut guard = self.inflight.lock().await;
        *guard = None;
    }
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_joiner_becomes_leader() {
        let coordinator = RefreshCoordinator::new();

        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
        // Leader가 settle하기 전까지는 전부 Follower
        assert!(matches!(coordinator.join().await, RefreshTicket::Follower(_)));
        assert!(matches!(coordinator.join().await, RefreshTicket::Follower(_)));
    }

    #[tokio::test]
    async fn test_outcome_broadcast_to_all_followers() {
        let coordinator = RefreshCoordinator::new();

        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
        let mut followers = Vec::new();
        for _ in 0..3 {
            match coordinator.join().await {
                RefreshTicket::Follower(rx) => followers.push(rx),
                RefreshTicket::Leader => panic!("second leader while refresh in flight"),
            }
        }

        coordinator
            .complete(RefreshOutcome::Refreshed("token-2".to_string()))
            .await;

        // 모든 Follower가 같은 결과를 받는다
        for mut rx in followers {
            match rx.recv().await.unwrap() {
                RefreshOutcome::Refreshed(token) => assert_eq!(token, "token-2"),
                RefreshOutcome::Failed(err) => panic!("unexpected failure: {}", err),
            }
        }
    }

    #[tokio::test]
    async fn test_settle_returns_to_idle() {
        let coordinator = RefreshCoordinator::new();

        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
        coordinator
            .complete(RefreshOutcome::Failed(RefreshError::TimedOut))
            .await;

        // settle 이후 도착한 쪽은 새 episode의 Leader가 된다
        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
    }

    #[tokio::test]
    async fn test_expire_releases_guard_and_closes_channel() {
        let coordinator = RefreshCoordinator::new();

        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
        let mut follower = match coordinator.join().await {
            RefreshTicket::Follower(rx) => rx,
            RefreshTicket::Leader => panic!("second leader while refresh in flight"),
        };

        coordinator.expire().await;

        // sender가 drop되어 Follower는 즉시 깨어난다
        assert!(follower.recv().await.is_err());
        // guard가 풀렸으므로 새 Leader 선출 가능
        assert!(matches!(coordinator.join().await, RefreshTicket::Leader));
    }
}
