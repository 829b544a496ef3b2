use crate::common::*;

/* 페이지네이션 루프의 상태 기계 - 짧은 페이지(0건 포함)를 받으면 Done 으로 전이한다 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Fetching,
    Done,
}

impl FetchState {
    #[doc = "이번 페이지의 행 개수를 보고 다음 상태를 결정하는 함수"]
    pub fn advance(self, page_len: usize, chunk_size: usize) -> Self {
        match self {
            FetchState::Fetching if page_len < chunk_size => FetchState::Done,
            state => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_keeps_fetching() {
        assert_eq!(
            FetchState::Fetching.advance(1000, 1000),
            FetchState::Fetching
        );
    }

    #[test]
    fn short_page_transitions_to_done() {
        assert_eq!(FetchState::Fetching.advance(437, 1000), FetchState::Done);
    }

    #[test]
    fn empty_page_transitions_to_done() {
        assert_eq!(FetchState::Fetching.advance(0, 1000), FetchState::Done);
    }
}
