//! Page arithmetic for `GET /numbers`.

pub const DEFAULT_PER_PAGE: usize = 50;
pub const MAX_PER_PAGE: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  /// 1-indexed; never below 1, but may point past the last page.
  pub page:     usize,
  pub per_page: usize,
  pub pages:    usize,
  pub offset:   usize,
}

/// Sanitise the requested page and page size against `total` rows.
///
/// Pages past the end are kept as requested and simply come back empty.
pub fn paginate(total: usize, page: Option<i64>, per_page: Option<i64>) -> Pagination {
  let per_page = per_page
    .map(|n| n.clamp(1, MAX_PER_PAGE as i64) as usize)
    .unwrap_or(DEFAULT_PER_PAGE);
  let page = page.map(|n| n.max(1) as usize).unwrap_or(1);

  Pagination {
    page,
    per_page,
    pages: total.div_ceil(per_page),
    offset: (page - 1).saturating_mul(per_page),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let p = paginate(120, None, None);
    assert_eq!(p, Pagination { page: 1, per_page: 50, pages: 3, offset: 0 });
  }

  #[test]
  fn middle_page() {
    let p = paginate(250, Some(2), Some(100));
    assert_eq!(p.offset, 100);
    assert_eq!(p.pages, 3);
  }

  #[test]
  fn page_below_one_clamps_to_first() {
    assert_eq!(paginate(10, Some(0), None).page, 1);
    assert_eq!(paginate(10, Some(-4), None).offset, 0);
  }

  #[test]
  fn per_page_is_bounded() {
    assert_eq!(paginate(10, None, Some(0)).per_page, 1);
    assert_eq!(paginate(10, None, Some(10_000)).per_page, MAX_PER_PAGE);
  }

  #[test]
  fn past_the_end_is_not_clamped() {
    let p = paginate(30, Some(9), Some(10));
    assert_eq!(p.page, 9);
    assert_eq!(p.offset, 80);
    assert_eq!(p.pages, 3);
  }

  #[test]
  fn empty_has_no_pages() {
    assert_eq!(paginate(0, None, None).pages, 0);
  }
}
