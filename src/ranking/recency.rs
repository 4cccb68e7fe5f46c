//! Recency comparator for course ordering.
//!
//! Courses the user has opened carry a last-access time; courses never opened carry
//! the start of their latest enrolment. The two signals are never compared against
//! each other. When one side only has an enrolment start, that side ranks first so
//! that newly enrolled courses surface above ones the user has merely visited.

use crate::domain::{CourseMembership, Recency};
use std::cmp::Ordering;

/// Anything carrying a recency signal that can be ranked.
pub trait HasRecency {
    fn recency(&self) -> Recency;
}

impl HasRecency for CourseMembership {
    fn recency(&self) -> Recency {
        self.recency
    }
}

impl HasRecency for Recency {
    fn recency(&self) -> Recency {
        *self
    }
}

/// Orders two recency signals, most recent first.
///
/// `Ordering::Less` means `a` ranks before `b`. Branches are evaluated in order:
///
/// 1. Both last-access: descending by timestamp.
/// 2. Both enrolment-start: descending by timestamp.
/// 3. `a` is an enrolment: `a` first, whatever the other timestamp says.
/// 4. Anything else, including two records without a signal: `b` first.
///
/// The last branch is kept literally. It means `compare_recency(x, y)` is
/// `Greater` for two signal-less records in either argument order.
///
/// # Examples
///
/// ```
/// use coursenav::domain::Recency;
/// use coursenav::ranking::compare_recency;
/// use std::cmp::Ordering;
///
/// let enrolled = Recency::EnrollmentStart(100);
/// let visited = Recency::LastAccess(999);
/// assert_eq!(compare_recency(&enrolled, &visited), Ordering::Less);
/// ```
pub fn compare_recency<T: HasRecency + ?Sized>(a: &T, b: &T) -> Ordering {
    match (a.recency(), b.recency()) {
        (Recency::LastAccess(ta), Recency::LastAccess(tb))
        | (Recency::EnrollmentStart(ta), Recency::EnrollmentStart(tb)) => tb.cmp(&ta),
        (Recency::EnrollmentStart(_), _) => Ordering::Less,
        _ => Ordering::Greater,
    }
}

/// Sorts records in place, most recent first.
///
/// Records the comparator considers equal keep their incoming order (the host
/// delivers them in its own sort order), and sorting a list of records that all
/// carry a signal a second time changes nothing.
///
/// Records with [`Recency::None`] break both properties. The fallback branch of
/// [`compare_recency`] says "b first" in either argument order, so every pass
/// moves a signal-less record ahead of the neighbour it is compared with: two
/// such records swap on each call, and a mixed list can come out differently
/// when sorted again. The output for a given input is still deterministic.
///
/// `slice::sort_by` may panic on a comparator that is not a total order, so this
/// is an insertion pass that swaps only on `Greater`; course lists are short.
pub fn sort_by_recency<T: HasRecency>(records: &mut [T]) {
    for i in 1..records.len() {
        let mut j = i;
        while j > 0 && compare_recency(&records[j - 1], &records[j]) == Ordering::Greater {
            records.swap(j - 1, j);
            j -= 1;
        }
    }
}
