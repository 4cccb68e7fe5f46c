//! Branch terminology.
//!
//! Sites call their courses different things (modules, units, classes...). The
//! `mycoursetitle` setting picks one terminology, which decides the localisation
//! keys used for the "My ..." branch, the "This ..." branch and its home entry.

/// Terminology for course branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseTerminology {
    #[default]
    Course,
    Module,
    Unit,
    Class,
    Training,
    ProfessionalDevelopment,
    Credential,
    Plan,
    Competency,
    Program,
    Lecture,
    Lesson,
}

/// Localisation keys for one terminology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchTitles {
    /// "My courses" branch.
    pub branch: &'static str,
    /// "This course" branch.
    pub this: &'static str,
    /// Course home entry inside "This course".
    pub home: &'static str,
}

impl CourseTerminology {
    /// Parses the stored setting value. Unknown values mean [`Self::Course`].
    ///
    /// # Examples
    ///
    /// ```
    /// use coursenav::CourseTerminology;
    ///
    /// assert_eq!(CourseTerminology::from_setting("pd"), CourseTerminology::ProfessionalDevelopment);
    /// assert_eq!(CourseTerminology::from_setting("seminar"), CourseTerminology::Course);
    /// ```
    #[must_use]
    pub fn from_setting(value: &str) -> Self {
        match value {
            "module" => Self::Module,
            "unit" => Self::Unit,
            "class" => Self::Class,
            "training" => Self::Training,
            "pd" => Self::ProfessionalDevelopment,
            "cred" => Self::Credential,
            "plan" => Self::Plan,
            "comp" => Self::Competency,
            "program" => Self::Program,
            "lecture" => Self::Lecture,
            "lesson" => Self::Lesson,
            _ => Self::Course,
        }
    }

    /// The localisation keys for this terminology.
    #[must_use]
    pub const fn titles(self) -> BranchTitles {
        let (branch, this, home) = match self {
            Self::Course => ("mycourses", "thismycourses", "homemycourses"),
            Self::Module => ("mymodules", "thismymodules", "homemymodules"),
            Self::Unit => ("myunits", "thismyunits", "homemyunits"),
            Self::Class => ("myclasses", "thismyclasses", "homemyclasses"),
            Self::Training => ("mytraining", "thismytraining", "homemytraining"),
            Self::ProfessionalDevelopment => (
                "myprofessionaldevelopment",
                "thismyprofessionaldevelopment",
                "homemyprofessionaldevelopment",
            ),
            Self::Credential => ("mycred", "thismycred", "homemycred"),
            Self::Plan => ("myplans", "thismyplans", "homemyplans"),
            Self::Competency => ("mycomp", "thismycomp", "homemycomp"),
            Self::Program => ("myprograms", "thismyprograms", "homemyprograms"),
            Self::Lecture => ("mylectures", "thismylectures", "homemylectures"),
            Self::Lesson => ("mylessons", "thismylessons", "homemylessons"),
        };
        BranchTitles { branch, this, home }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_terminology_uses_matching_key_family() {
        for setting in [
            "course", "module", "unit", "class", "training", "pd", "cred", "plan", "comp",
            "program", "lecture", "lesson",
        ] {
            let titles = CourseTerminology::from_setting(setting).titles();
            let stem = titles.branch.trim_start_matches("my");
            assert_eq!(titles.this, format!("thismy{stem}"));
            assert_eq!(titles.home, format!("homemy{stem}"));
        }
    }

    #[test]
    fn unknown_setting_falls_back_to_courses() {
        assert_eq!(
            CourseTerminology::from_setting("").titles().branch,
            "mycourses"
        );
    }
}
