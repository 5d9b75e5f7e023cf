//! 識別リクエストの世代管理
//!
//! 新しいリクエストを始めるたびに世代トークンを発行し、最新の世代の
//! 応答だけを画面に反映する。古い応答は破棄され、ローディング状態にも触れない。

use crate::api::PlantApi;
use crate::error::Error;
use crate::request::IdentifyRequest;
use crate::view::ResultView;

/// リクエスト世代
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// 識別トリガーの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifySession {
    generation: u64,
    pending: Option<RequestToken>,
}

impl IdentifySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい世代を開始する（以前の世代は古くなる）
    pub fn begin(&mut self) -> RequestToken {
        self.generation += 1;
        let token = RequestToken(self.generation);
        self.pending = Some(token);
        token
    }

    /// 最新の世代が応答待ちか
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.pending == Some(token)
    }

    /// 応答到着を記録し、反映してよいかを返す
    ///
    /// 最新の世代ならローディングを解除して `true`。古い世代は `false`。
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// 1回のリクエストの結果
#[derive(Debug)]
pub enum IdentifyOutcome {
    Rendered(ResultView),
    Failed(Error),
}

impl IdentifyOutcome {
    /// 失敗時に利用者へ出す文言
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            IdentifyOutcome::Rendered(_) => None,
            IdentifyOutcome::Failed(e) => Some(e.user_message()),
        }
    }
}

/// 識別リクエストを1回送り、表示モデルに変換する
pub async fn identify<A: PlantApi>(api: &A, request: IdentifyRequest<A::Image>) -> IdentifyOutcome {
    match api.identify(request).await {
        Ok(response) => IdentifyOutcome::Rendered(ResultView::from_response(&response)),
        Err(e) => IdentifyOutcome::Failed(e),
    }
}

/// 識別トリガー1回分の結果
#[derive(Debug)]
pub enum Attempt {
    /// 入力不足。リクエストは送っていない
    Rejected(Error),
    /// 最新の世代として反映する
    Applied(IdentifyOutcome),
    /// 後続のリクエストに追い越されたので破棄
    Discarded,
}

/// 入力検証 → 世代開始 → リクエスト → 反映判定
///
/// `begin` / `settle` は呼び出し側が持つ `IdentifySession` を更新するクロージャ。
/// 状態の持ち方（Leptosのsignal、RefCellなど）に依存しないようにしている。
pub async fn run_identify<A, B, S>(
    api: &A,
    description: &str,
    image: Option<A::Image>,
    begin: B,
    settle: S,
) -> Attempt
where
    A: PlantApi,
    B: FnOnce() -> RequestToken,
    S: FnOnce(RequestToken) -> bool,
{
    let request = match IdentifyRequest::from_input(description, image) {
        Ok(request) => request,
        Err(e) => return Attempt::Rejected(e),
    };

    let token = begin();
    let outcome = identify(api, request).await;

    if settle(token) {
        Attempt::Applied(outcome)
    } else {
        Attempt::Discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::types::{IdentifyResponse, Plant, PlantSummary, Stats};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// 呼び出し回数を数えるだけのAPI
    struct FakeApi {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FakeApi {
        fn ok() -> Self {
            Self { calls: Cell::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { calls: Cell::new(0), fail: true }
        }
    }

    impl PlantApi for FakeApi {
        type Image = &'static str;

        async fn identify(&self, _request: IdentifyRequest<Self::Image>) -> Result<IdentifyResponse> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(Error::Http { status: 500 });
            }
            Ok(IdentifyResponse {
                plant: Some(Plant {
                    common_name: "Gumamela".to_string(),
                    scientific_name: "Hibiscus rosa-sinensis".to_string(),
                    ..Default::default()
                }),
                confidence: 0.92,
                ..Default::default()
            })
        }

        async fn list_plants(&self, _limit: u32) -> Result<Vec<PlantSummary>> {
            Ok(vec![])
        }

        async fn plant(&self, _id: u64) -> Result<Plant> {
            Ok(Plant::default())
        }

        async fn stats(&self) -> Result<Stats> {
            Ok(Stats::new())
        }
    }

    fn attempt(api: &FakeApi, session: &RefCell<IdentifySession>, description: &str, image: Option<&'static str>) -> Attempt {
        block_on(run_identify(
            api,
            description,
            image,
            || session.borrow_mut().begin(),
            |token| session.borrow_mut().settle(token),
        ))
    }

    #[test]
    fn test_session_begin_and_settle() {
        let mut session = IdentifySession::new();
        assert!(!session.is_loading());

        let token = session.begin();
        assert!(session.is_loading());
        assert!(session.is_current(token));

        assert!(session.settle(token));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_stale_token_discarded() {
        let mut session = IdentifySession::new();
        let first = session.begin();
        let second = session.begin();
        assert_ne!(first, second);

        // 古い応答は反映しないし、ローディングも解除しない
        assert!(!session.settle(first));
        assert!(session.is_loading());

        assert!(session.settle(second));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_settle_twice() {
        let mut session = IdentifySession::new();
        let token = session.begin();
        assert!(session.settle(token));
        assert!(!session.settle(token));
    }

    #[test]
    fn test_missing_input_sends_nothing() {
        let api = FakeApi::ok();
        let session = RefCell::new(IdentifySession::new());

        let result = attempt(&api, &session, "  ", None);

        assert!(matches!(result, Attempt::Rejected(Error::MissingInput)));
        assert_eq!(api.calls.get(), 0);
        assert_eq!(*session.borrow(), IdentifySession::new());
    }

    #[test]
    fn test_success_applied_and_not_loading() {
        let api = FakeApi::ok();
        let session = RefCell::new(IdentifySession::new());

        let result = attempt(&api, &session, "red flower", None);

        match result {
            Attempt::Applied(IdentifyOutcome::Rendered(view)) => assert!(view.is_identified()),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(api.calls.get(), 1);
        assert!(!session.borrow().is_loading());
    }

    #[test]
    fn test_failure_applied_and_not_loading() {
        let api = FakeApi::failing();
        let session = RefCell::new(IdentifySession::new());

        let result = attempt(&api, &session, "", Some("leaf.jpg"));

        match result {
            Attempt::Applied(outcome) => {
                assert_eq!(
                    outcome.alert_message(),
                    Some("An error occurred while identifying the plant. Please try again.")
                );
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(!session.borrow().is_loading());
    }

    #[test]
    fn test_superseded_attempt_discarded() {
        let api = FakeApi::ok();
        let session = RefCell::new(IdentifySession::new());

        // 応答待ちの間に次のリクエストが始まった状況
        let result = block_on(run_identify(
            &api,
            "vine",
            None,
            || session.borrow_mut().begin(),
            |token| {
                let newer = session.borrow_mut().begin();
                let applied = session.borrow_mut().settle(token);
                session.borrow_mut().settle(newer);
                applied
            },
        ));

        assert!(matches!(result, Attempt::Discarded));
        assert!(!session.borrow().is_loading());
    }
}
