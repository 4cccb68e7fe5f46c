//! Course menu assembly.
//!
//! Builds the "My courses" branch (optionally grouped by top-level category) and
//! the "This course" branch from settings, the viewer's courses and the current
//! page.
//!
//! # Flow
//!
//! ```text
//! enrolled courses ─► merge_recency ─► sort_by_recency (if enabled)
//!                                           │
//!                      ┌────────────────────┴─────────────────────┐
//!                 flat list (limit per branch)      category folders (limit per folder)
//! ```

use crate::categories::{CategoryTree, RenderCycle};
use crate::domain::error::Result;
use crate::domain::CategoryId;
use crate::menu::titles::BranchTitles;
use crate::menu::viewmodel::{MenuContext, MenuItem, MenuTarget, MenuText};
use crate::ranking::{merge_recency, sort_by_recency, RankedCourse};
use crate::source::{CourseOrder, CourseSource, CurrentPage};
use crate::Config;
use std::collections::HashMap;

/// Sort weight of the course branches among the host's top-level menu items.
const BRANCH_SORT: u32 = 10_000;

const COURSE_ICON: &str = "graduation-cap";
const HIDDEN_COURSE_ICON: &str = "eye-slash";
const CATEGORY_ICON: &str = "folder-open";

/// Builds the course navigation menu for one render.
///
/// Returns an empty context when the branch is disabled or the viewer is not a
/// logged-in member. Categories are only read (through `cycle`) when grouping by
/// category is enabled.
///
/// # Errors
///
/// Returns an error if the source fails, or if grouping is enabled and the
/// visible categories do not include every ancestor of every course category.
pub fn build_course_menu(
    config: &Config,
    cycle: &mut RenderCycle,
    source: &dyn CourseSource,
    current: Option<&CurrentPage>,
) -> Result<MenuContext> {
    let viewer = source.viewer()?;
    if !config.display_my_courses || !viewer.has_courses() {
        tracing::debug!(
            enabled = config.display_my_courses,
            member = viewer.has_courses(),
            "course menu skipped"
        );
        return Ok(MenuContext::default());
    }

    let titles = config.terminology.titles();
    let mut branch = MenuItem::keyed(titles.branch, MenuTarget::MyHome).with_sort(BRANCH_SORT);
    branch.add(MenuItem::keyed("mymoodle", MenuTarget::Dashboard));

    let mut course_count = 0;
    let courses = source.enrolled_courses(CourseOrder::FullName)?;
    if courses.is_empty() {
        let placeholder = branch.add(MenuItem::keyed("noenrolments", MenuTarget::Site));
        placeholder.emphasis = true;
    } else {
        let ranked = if config.sort_by_recency {
            let courses = source.enrolled_courses(CourseOrder::SortOrder)?;
            if courses.is_empty() {
                return Ok(MenuContext::notice("nomycourses"));
            }
            let mut ranked = merge_recency(courses, &source.last_access()?, &source.enrolments()?);
            sort_by_recency(&mut ranked);
            ranked
        } else {
            merge_recency(courses, &[], &[])
        };

        course_count = if config.category_submenu {
            let tree = cycle.categories(source)?;
            add_grouped(&mut branch, &ranked, tree, config)?
        } else {
            add_flat(&mut branch, &ranked, config)
        };
    }

    let mut items = vec![branch];
    if let Some(this_course) = current.and_then(|page| this_course_branch(config, titles, page)) {
        items.push(this_course);
    }

    let collapsible = config.category_submenu;
    if collapsible {
        assign_keys(&mut items);
    }

    tracing::debug!(
        course_count,
        branches = items.len(),
        grouped = collapsible,
        "course menu built"
    );

    Ok(MenuContext {
        items,
        course_count,
        collapsible,
        notice: None,
    })
}

/// Adds courses directly under the branch, stopping at the configured maximum.
fn add_flat(branch: &mut MenuItem, ranked: &[RankedCourse], config: &Config) -> usize {
    let mut added = 0;
    for entry in ranked {
        if config.max_courses.is_some_and(|max| added >= max) {
            break;
        }
        if let Some(item) = course_item(entry, config) {
            branch.add(item);
            added += 1;
        }
    }
    added
}

/// Adds courses under one folder per top-level category.
///
/// Folders appear in the order their first course appears; each holds at most the
/// configured maximum.
fn add_grouped(
    branch: &mut MenuItem,
    ranked: &[RankedCourse],
    tree: &CategoryTree,
    config: &Config,
) -> Result<usize> {
    let mut folders: HashMap<CategoryId, (usize, usize)> = HashMap::new();
    let mut total = 0;

    for entry in ranked {
        let Some(item) = course_item(entry, config) else {
            continue;
        };
        let top = tree.top_ancestor(entry.course.category)?;

        let (index, count) = match folders.get(&top) {
            Some(&slot) => slot,
            None => {
                let name = tree.top_ancestor_name(top)?;
                branch.add(
                    MenuItem::new(
                        MenuText::literal(name),
                        MenuText::literal(name),
                        MenuTarget::CurrentPage,
                    )
                    .with_icon(CATEGORY_ICON),
                );
                let slot = (branch.children.len() - 1, 0);
                folders.insert(top, slot);
                slot
            }
        };

        if config.max_courses.is_some_and(|max| count >= max) {
            continue;
        }
        branch.children[index].add(item);
        folders.insert(top, (index, count + 1));
        total += 1;
    }

    tracing::debug!(folders = folders.len(), courses = total, "grouped courses by category");
    Ok(total)
}

/// Menu entry for one course, or `None` if the viewer should not see it.
fn course_item(entry: &RankedCourse, config: &Config) -> Option<MenuItem> {
    let course = &entry.course;
    let hidden = !course.visible;
    if hidden && !(config.display_hidden && course.can_view_hidden) {
        return None;
    }

    let mut item = MenuItem::new(
        MenuText::literal(course.fullname.as_str()),
        MenuText::literal(course.shortname.as_str()),
        MenuTarget::Course { course: course.id },
    )
    .with_icon(if hidden { HIDDEN_COURSE_ICON } else { COURSE_ICON });
    item.dimmed = hidden;
    item.only_enrolled = entry.recency.is_enrollment();
    Some(item)
}

/// The "This course" branch for a course page with sections.
fn this_course_branch(config: &Config, titles: BranchTitles, page: &CurrentPage) -> Option<MenuItem> {
    let course = page.course_id;
    if !config.display_this_course || !course.is_course() || page.sections.is_empty() {
        return None;
    }

    let mut branch = MenuItem::new(
        MenuText::key(titles.this),
        MenuText::key(titles.branch),
        MenuTarget::MyHome,
    )
    .with_sort(BRANCH_SORT);

    branch.add(MenuItem::keyed(titles.home, MenuTarget::Course { course }));
    branch.add(MenuItem::keyed("calendar", MenuTarget::Calendar { course }));
    branch.add(MenuItem::keyed("participants", MenuTarget::Participants { course }));
    if config.badges_enabled {
        branch.add(MenuItem::keyed("badges", MenuTarget::Badges { course }));
    }
    if config.competencies_enabled {
        branch.add(MenuItem::keyed("competencies", MenuTarget::Competencies { course }));
    }
    for section in &page.sections {
        branch.add(MenuItem::new(
            MenuText::literal(section.name.as_str()),
            MenuText::literal(section.name.as_str()),
            MenuTarget::Section {
                course,
                section: section.number,
                multipage: page.multipage,
            },
        ));
    }
    Some(branch)
}

/// Gives every child of a top-level item a unique key.
fn assign_keys(items: &mut [MenuItem]) {
    let mut next = 0_usize;
    for child in items.iter_mut().flat_map(|item| item.children.iter_mut()) {
        next += 1;
        child.key = Some(format!("menu-item-{next}"));
    }
}
