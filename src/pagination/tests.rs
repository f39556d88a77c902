//! Tests for offset pagination

use super::*;
use test_case::test_case;

#[test]
fn test_page_state_default() {
    let state = PageState::new();
    assert_eq!(state.page, 0);
    assert_eq!(state.skip, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
#[should_panic(expected = "page size must be positive")]
fn test_zero_page_size_rejected() {
    let _ = OffsetPager::new(0);
}

#[test]
fn test_short_page_terminates() {
    let pager = OffsetPager::new(10);
    let mut state = PageState::new();

    let next = pager.advance(5, &mut state);
    assert!(next.is_done());
    assert!(state.done);
    assert_eq!(state.total_fetched, 5);
}

#[test]
fn test_empty_page_terminates() {
    let pager = OffsetPager::new(10);
    let mut state = PageState::new();

    let next = pager.advance(0, &mut state);
    assert!(next.is_done());
    assert_eq!(state.total_fetched, 0);
}

#[test]
fn test_full_page_advances_offset() {
    let pager = OffsetPager::new(10);
    let mut state = PageState::new();

    assert_eq!(pager.advance(10, &mut state), NextPage::Continue { skip: 10 });
    assert_eq!(pager.advance(10, &mut state), NextPage::Continue { skip: 20 });
    assert_eq!(state.page, 2);
    assert_eq!(state.total_fetched, 20);
    assert!(!state.done);
}

// Page counts per the termination rule: ceil(N/top) requests when N is not a
// multiple of top, N/top + 1 (trailing empty page) when it is.
#[test_case(25, 10, 3; "partial final page")]
#[test_case(20, 10, 3; "exact multiple costs a trailing empty page")]
#[test_case(5, 10, 1; "single short page")]
#[test_case(0, 10, 1; "empty collection")]
#[test_case(10, 10, 2; "one full page plus empty terminal page")]
fn test_request_count(total: usize, top: u32, expected_requests: u32) {
    let pager = OffsetPager::new(top);
    let mut state = PageState::new();
    let mut remaining = total;
    let mut requests = 0;

    loop {
        let fetched = remaining.min(top as usize);
        remaining -= fetched;
        requests += 1;

        match pager.advance(fetched, &mut state) {
            NextPage::Continue { skip } => {
                assert_eq!(skip as u64, state.total_fetched);
            }
            NextPage::Done => break,
        }
    }

    assert_eq!(requests, expected_requests);
    assert_eq!(state.total_fetched, total as u64);
}

#[test]
fn test_skip_sequence_for_25_records() {
    let pager = OffsetPager::new(10);
    let mut state = PageState::new();
    let mut skips = vec![state.skip];

    for fetched in [10usize, 10] {
        if let NextPage::Continue { skip } = pager.advance(fetched, &mut state) {
            skips.push(skip);
        }
    }
    assert_eq!(pager.advance(5, &mut state), NextPage::Done);
    assert_eq!(skips, vec![0, 10, 20]);
}
