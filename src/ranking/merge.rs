//! Merges last-access and enrolment rows into one recency signal per course.

use crate::domain::{Course, CourseId, CourseMembership, Recency};
use crate::ranking::recency::HasRecency;
use crate::source::models::{Enrolment, LastAccess};
use serde::Serialize;
use std::collections::HashMap;

/// A course paired with the recency signal resolved for the viewing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCourse {
    pub course: Course,
    pub recency: Recency,
}

impl RankedCourse {
    #[must_use]
    pub const fn membership(&self) -> CourseMembership {
        CourseMembership::new(self.course.id, self.recency)
    }
}

impl HasRecency for RankedCourse {
    fn recency(&self) -> Recency {
        self.recency
    }
}

/// Resolves the recency signal of every course, keeping input order.
///
/// A recorded last access wins. Without one, the latest start time across all of
/// the user's enrolments in that course is used. A zero timestamp is the host's
/// "unset" value and counts as absent.
///
/// # Examples
///
/// ```
/// use coursenav::domain::{CategoryId, Course, CourseId, Recency};
/// use coursenav::ranking::merge_recency;
/// use coursenav::source::{Enrolment, LastAccess};
///
/// let courses = vec![Course::new(CourseId(7), CategoryId(1), "C7", "Course seven")];
/// let enrolments = vec![
///     Enrolment { course_id: CourseId(7), time_start: 100 },
///     Enrolment { course_id: CourseId(7), time_start: 400 },
/// ];
/// let ranked = merge_recency(courses, &[], &enrolments);
/// assert_eq!(ranked[0].recency, Recency::EnrollmentStart(400));
/// ```
#[must_use]
pub fn merge_recency(
    courses: Vec<Course>,
    last_access: &[LastAccess],
    enrolments: &[Enrolment],
) -> Vec<RankedCourse> {
    let accessed: HashMap<CourseId, i64> = last_access
        .iter()
        .filter(|row| row.time_access != 0)
        .map(|row| (row.course_id, row.time_access))
        .collect();

    let mut latest_start: HashMap<CourseId, i64> = HashMap::new();
    for enrolment in enrolments {
        latest_start
            .entry(enrolment.course_id)
            .and_modify(|start| *start = (*start).max(enrolment.time_start))
            .or_insert(enrolment.time_start);
    }

    tracing::debug!(
        courses = courses.len(),
        accessed = accessed.len(),
        enrolled = latest_start.len(),
        "merging recency signals"
    );

    courses
        .into_iter()
        .map(|course| {
            let recency = match (accessed.get(&course.id), latest_start.get(&course.id)) {
                (Some(&time), _) => Recency::LastAccess(time),
                (None, Some(&start)) if start != 0 => Recency::EnrollmentStart(start),
                _ => Recency::None,
            };
            RankedCourse { course, recency }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryId;

    fn course(id: i64) -> Course {
        Course::new(CourseId(id), CategoryId(1), format!("C{id}"), format!("Course {id}"))
    }

    #[test]
    fn last_access_takes_precedence_over_enrolment() {
        let ranked = merge_recency(
            vec![course(2)],
            &[LastAccess { course_id: CourseId(2), time_access: 50 }],
            &[Enrolment { course_id: CourseId(2), time_start: 9000 }],
        );
        assert_eq!(ranked[0].recency, Recency::LastAccess(50));
    }

    #[test]
    fn picks_latest_of_overlapping_enrolments() {
        let ranked = merge_recency(
            vec![course(3)],
            &[],
            &[
                Enrolment { course_id: CourseId(3), time_start: 300 },
                Enrolment { course_id: CourseId(3), time_start: 700 },
                Enrolment { course_id: CourseId(3), time_start: 500 },
            ],
        );
        assert_eq!(ranked[0].recency, Recency::EnrollmentStart(700));
    }

    #[test]
    fn zero_timestamps_count_as_absent() {
        let ranked = merge_recency(
            vec![course(4), course(5)],
            &[LastAccess { course_id: CourseId(4), time_access: 0 }],
            &[
                Enrolment { course_id: CourseId(4), time_start: 20 },
                Enrolment { course_id: CourseId(5), time_start: 0 },
            ],
        );
        assert_eq!(ranked[0].recency, Recency::EnrollmentStart(20));
        assert_eq!(ranked[1].recency, Recency::None);
    }

    #[test]
    fn keeps_input_order() {
        let ranked = merge_recency(vec![course(9), course(8)], &[], &[]);
        let ids: Vec<_> = ranked.iter().map(|r| r.membership().course_id).collect();
        assert_eq!(ids, vec![CourseId(9), CourseId(8)]);
    }
}
